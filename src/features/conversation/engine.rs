//! # Feature: Response Engine
//!
//! Turn handler for a single conversation. Each user message runs through a
//! fixed-priority intent cascade:
//!
//! 1. exit
//! 2. gratitude
//! 3. self-description
//! 4. topic (fact drawn from that topic's pool)
//! 5. callback to the previous message's topic, or a random fact from any topic
//! 6. generic prompt (first turn only)
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use log::{debug, error};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

use crate::core::text::{contains_any, render_template};
use crate::features::personas::Persona;
use crate::features::topics::{detect_topic, FactPools, Topic};

pub const EXIT_KEYWORDS: &[&str] = &["bye", "quit", "exit", "leave"];
pub const GRATITUDE_KEYWORDS: &[&str] = &["thanks", "thank you", "appreciate"];
pub const SELF_KEYWORDS: &[&str] = &["who", "what are you"];

pub const GRATITUDE_RESPONSE: &str = "Yeah yeah, gratitude accepted. \
Now keep the questions coming before my attention span bails.";

pub const CALLBACK_PREAMBLE: &str = "Still curious? Let's crank it up: ";

pub const KNOWLEDGE_TEASERS: &[&str] = &[
    "I binge facts like they're nachos at 3AM.",
    "I'm fueled by caffeine, sarcasm, and obscure trivia.",
    "I'm basically a cursed encyclopedia with better jokes.",
];

pub const DEFAULT_PROMPTS: &[&str] = &[
    "Spill more details, champ. I left my mind-reading antenna in my other jacket.",
    "Words, friend. Use 'em. Preferably spicy ones.",
    "That's vague as heck. Elaborate before I start making stuff up (again).",
];

/// Outcome of the intent cascade for one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Exit,
    Gratitude,
    SelfDescription,
    Topic(Topic),
    /// No rule matched on a later turn; carries the previous message's topic
    Callback(Option<Topic>),
    /// No rule matched on the first turn
    Default,
}

/// Run the cascade for `message`. `previous` is the message from the turn
/// before, or `None` on the first turn.
pub fn classify_intent(message: &str, previous: Option<&str>) -> Intent {
    let lower = message.to_lowercase();

    if contains_any(&lower, EXIT_KEYWORDS) {
        return Intent::Exit;
    }
    if contains_any(&lower, GRATITUDE_KEYWORDS) {
        return Intent::Gratitude;
    }
    if contains_any(&lower, SELF_KEYWORDS) {
        return Intent::SelfDescription;
    }
    if let Some(topic) = detect_topic(&lower) {
        return Intent::Topic(topic);
    }

    match previous {
        Some(prev) => Intent::Callback(detect_topic(prev)),
        None => Intent::Default,
    }
}

fn pick<'a, T, R>(rng: &mut R, items: &'a [T]) -> &'a T
where
    R: Rng + ?Sized,
{
    items
        .choose(rng)
        .expect("persona sequences are validated non-empty")
}

/// One conversation: history, fact pools and a randomness source over a shared persona
#[derive(Debug)]
pub struct ChatEngine<R = StdRng> {
    persona: Arc<Persona>,
    history: Vec<String>,
    pools: FactPools,
    rng: R,
}

impl ChatEngine<StdRng> {
    pub fn new(persona: Arc<Persona>) -> Result<Self> {
        Self::with_rng(persona, StdRng::from_os_rng())
    }

    /// Reproducible engine for a fixed seed
    pub fn seeded(persona: Arc<Persona>, seed: u64) -> Result<Self> {
        Self::with_rng(persona, StdRng::seed_from_u64(seed))
    }

    /// Engine over the bundled persona
    pub fn bundled() -> Result<Self> {
        Self::new(Arc::new(Persona::default()))
    }
}

impl<R: Rng> ChatEngine<R> {
    /// Fails if `persona` does not pass [`Persona::validate`]
    pub fn with_rng(persona: Arc<Persona>, rng: R) -> Result<Self> {
        persona.validate()?;
        let pools = FactPools::new(persona.clone());
        Ok(ChatEngine {
            persona,
            history: Vec::new(),
            pools,
            rng,
        })
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Raw user messages, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn intro(&mut self) -> String {
        let greeting = pick(&mut self.rng, &self.persona.greetings);
        let descriptor = pick(&mut self.rng, &self.persona.descriptors);
        render_template(
            greeting,
            &[
                ("name", self.persona.name.as_str()),
                ("descriptor", descriptor.as_str()),
            ],
        )
    }

    pub fn outro(&mut self) -> String {
        pick(&mut self.rng, &self.persona.exit_lines).clone()
    }

    /// True if `text` is exactly one of the persona's exit lines
    pub fn is_exit_line(&self, text: &str) -> bool {
        self.persona.is_exit_line(text)
    }

    /// Intent `message` would get as the next turn of this conversation
    pub fn classify(&self, message: &str) -> Intent {
        classify_intent(message, self.history.last().map(String::as_str))
    }

    pub fn respond(&mut self, message: &str) -> String {
        let intent = self.classify(message);
        self.history.push(message.to_string());
        debug!("Turn {} classified as {intent:?}", self.history.len());

        match intent {
            Intent::Exit => self.outro(),
            Intent::Gratitude => GRATITUDE_RESPONSE.to_string(),
            Intent::SelfDescription => self.self_description(),
            Intent::Topic(topic) | Intent::Callback(Some(topic)) => self.topic_response(topic),
            Intent::Callback(None) => self.any_fact_response(),
            Intent::Default => pick(&mut self.rng, DEFAULT_PROMPTS).to_string(),
        }
    }

    fn self_description(&mut self) -> String {
        let descriptor = pick(&mut self.rng, &self.persona.descriptors);
        let teaser = pick(&mut self.rng, KNOWLEDGE_TEASERS);
        format!(
            "Name's {}. I'm your {descriptor}. {teaser} Now, what's rattling in that brain-pan of yours?",
            self.persona.name
        )
    }

    fn topic_response(&mut self, topic: Topic) -> String {
        let fact = match self.pools.draw(topic, &mut self.rng) {
            Ok(fact) => fact,
            Err(e) => {
                error!("Fact pool invariant violated: {e}");
                panic!("fact pool invariant violated: {e}");
            }
        };
        let comeback = pick(&mut self.rng, &self.persona.comebacks);
        render_template(comeback, &[("fact", fact.as_str())])
    }

    /// Samples the persona's full fact lists; pools are left untouched
    fn any_fact_response(&mut self) -> String {
        let facts = self.persona.all_facts();
        let fact = pick(&mut self.rng, &facts);
        format!("{CALLBACK_PREAMBLE}{fact}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::personas::guttermuse;
    use std::collections::HashSet;

    fn engine(seed: u64) -> ChatEngine {
        ChatEngine::seeded(Arc::new(guttermuse()), seed).unwrap()
    }

    /// Fact inside `response` if it is a rendered comeback for `topic`
    fn topic_fact(persona: &Persona, topic: Topic, response: &str) -> Option<String> {
        persona.topics[&topic].iter().find_map(|fact| {
            persona
                .comebacks
                .iter()
                .any(|c| render_template(c, &[("fact", fact.as_str())]) == response)
                .then(|| fact.clone())
        })
    }

    #[test]
    fn test_classify_cascade_order() {
        assert_eq!(classify_intent("thanks, bye", None), Intent::Exit);
        assert_eq!(
            classify_intent("thank you, who are you", None),
            Intent::Gratitude
        );
        assert_eq!(
            classify_intent("who knows about space", None),
            Intent::SelfDescription
        );
        assert_eq!(
            classify_intent("tell me about space and physics", None),
            Intent::Topic(Topic::Space)
        );
        assert_eq!(classify_intent("hello there", None), Intent::Default);
        assert_eq!(
            classify_intent("go on then", Some("I love music")),
            Intent::Callback(Some(Topic::Art))
        );
        assert_eq!(
            classify_intent("go on then", Some("hello there")),
            Intent::Callback(None)
        );
    }

    #[test]
    fn test_exit_keywords_return_exit_line() {
        for message in ["Bye!", "I QUIT.", "time to leave...", "exit", "Good-bye, pal"] {
            let mut bot = engine(1);
            let response = bot.respond(message);
            assert!(bot.is_exit_line(&response), "{message:?} -> {response:?}");
        }
    }

    #[test]
    fn test_gratitude_beats_topic() {
        let mut bot = engine(2);
        assert_eq!(bot.respond("thanks for the space facts"), GRATITUDE_RESPONSE);
        assert_eq!(bot.respond("I really APPRECIATE it!"), GRATITUDE_RESPONSE);
    }

    #[test]
    fn test_self_description() {
        let mut bot = engine(3);
        let response = bot.respond("Who are you?");
        let persona = guttermuse();

        assert!(response.starts_with("Name's GutterMuse. I'm your "));
        assert!(response.ends_with(" Now, what's rattling in that brain-pan of yours?"));
        assert!(persona
            .descriptors
            .iter()
            .any(|d| response.contains(&format!("I'm your {d}. "))));
        assert!(KNOWLEDGE_TEASERS.iter().any(|t| response.contains(t)));
    }

    #[test]
    fn test_topic_response_uses_comeback_and_fact() {
        let mut bot = engine(4);
        let response = bot.respond("Tell me about a galaxy far away");
        assert!(topic_fact(&guttermuse(), Topic::Space, &response).is_some());
    }

    #[test]
    fn test_topic_facts_do_not_repeat_until_exhausted() {
        let mut bot = engine(5);
        let persona = guttermuse();
        let count = persona.topics[&Topic::Science].len();

        let facts: HashSet<String> = (0..count)
            .map(|_| {
                let response = bot.respond("more science please");
                topic_fact(&persona, Topic::Science, &response).unwrap()
            })
            .collect();
        assert_eq!(facts.len(), count);

        let again = bot.respond("more science please");
        assert!(topic_fact(&persona, Topic::Science, &again).is_some());
    }

    #[test]
    fn test_callback_reuses_previous_topic() {
        let mut bot = engine(6);
        let persona = guttermuse();
        bot.respond("tell me about planets");
        let response = bot.respond("go on then");
        assert!(topic_fact(&persona, Topic::Space, &response).is_some());
    }

    #[test]
    fn test_callback_without_topic_draws_any_fact() {
        let mut bot = engine(7);
        let persona = guttermuse();
        bot.respond("hello there");
        let response = bot.respond("and so on");

        let fact = response.strip_prefix(CALLBACK_PREAMBLE).unwrap();
        assert!(persona.all_facts().contains(&fact));
    }

    #[test]
    fn test_callback_without_topic_leaves_pools_alone() {
        let mut bot = engine(8);
        bot.respond("hello there");
        for _ in 0..5 {
            bot.respond("and so on");
        }
        for topic in Topic::ALL {
            assert_eq!(bot.pools.remaining(topic), 3);
        }
    }

    #[test]
    fn test_first_turn_default() {
        let mut bot = engine(9);
        let response = bot.respond("hello there");
        assert!(DEFAULT_PROMPTS.contains(&response.as_str()));
    }

    #[test]
    fn test_empty_input_falls_through() {
        let mut bot = engine(10);
        assert!(DEFAULT_PROMPTS.contains(&bot.respond("").as_str()));
        assert!(bot.respond("   ").starts_with(CALLBACK_PREAMBLE));
    }

    #[test]
    fn test_history_records_raw_messages() {
        let mut bot = engine(11);
        bot.respond("Hello, THERE!");
        bot.respond("bye");
        assert_eq!(bot.history(), ["Hello, THERE!", "bye"]);
    }

    #[test]
    fn test_intro_renders_name_and_descriptor() {
        let persona = guttermuse();
        let mut bot = engine(12);
        for _ in 0..10 {
            let intro = bot.intro();
            let rendered = persona.greetings.iter().any(|g| {
                persona.descriptors.iter().any(|d| {
                    render_template(g, &[("name", "GutterMuse"), ("descriptor", d.as_str())]) == intro
                })
            });
            assert!(rendered, "unexpected intro: {intro}");
        }
    }

    #[test]
    fn test_outro_is_exit_line() {
        let mut bot = engine(13);
        for _ in 0..10 {
            let outro = bot.outro();
            assert!(bot.persona().exit_lines.contains(&outro));
            assert!(bot.is_exit_line(&outro));
        }
    }

    #[test]
    fn test_same_seed_same_conversation() {
        let script = ["hi", "who are you", "space!", "ok", "code", "thanks", "hmm", "bye"];
        let mut a = engine(99);
        let mut b = engine(99);
        let intro_a = a.intro();
        assert_eq!(intro_a, b.intro());
        for line in script {
            assert_eq!(a.respond(line), b.respond(line));
        }
    }

    #[test]
    fn test_engines_share_persona_but_not_pools() {
        let persona = Arc::new(guttermuse());
        let mut first = ChatEngine::seeded(persona.clone(), 1).unwrap();
        let second = ChatEngine::seeded(persona.clone(), 2).unwrap();

        first.respond("art");
        assert_eq!(first.pools.remaining(Topic::Art), 2);
        assert_eq!(second.pools.remaining(Topic::Art), 3);
        assert_eq!(persona.topics[&Topic::Art].len(), 3);
    }

    #[test]
    fn test_rejects_invalid_persona() {
        let mut no_greetings = guttermuse();
        no_greetings.greetings.clear();
        assert!(ChatEngine::seeded(Arc::new(no_greetings), 1).is_err());

        let mut no_comebacks = guttermuse();
        no_comebacks.comebacks.clear();
        assert!(ChatEngine::seeded(Arc::new(no_comebacks), 1).is_err());

        let mut missing_topic = guttermuse();
        missing_topic.topics.remove(&Topic::Tech);
        let err = ChatEngine::seeded(Arc::new(missing_topic), 1).unwrap_err();
        assert!(err.to_string().contains("missing topic tech"));
    }

    #[test]
    fn test_bundled_engine() {
        let mut bot = ChatEngine::bundled().unwrap();
        assert_eq!(bot.persona().name, "GutterMuse");
        assert!(bot.intro().contains("GutterMuse"));
    }

    #[test]
    fn test_classify_reads_previous_turn_from_history() {
        let mut bot = engine(14);
        assert_eq!(bot.classify("go on then"), Intent::Default);

        bot.respond("I love music");
        assert_eq!(bot.classify("go on then"), Intent::Callback(Some(Topic::Art)));
        assert_eq!(bot.classify("thanks"), Intent::Gratitude);
        // classify does not record the message
        assert_eq!(bot.history(), ["I love music"]);
    }
}
