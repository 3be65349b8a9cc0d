//! # Feature: Persona Store
//!
//! Immutable bundle of a bot's identity, tone templates and topical fact banks.
//! Loaded from YAML or built in, always validated before use.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::text::has_placeholder;
use crate::features::topics::Topic;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub descriptors: Vec<String>,
    /// Templates using `{name}` and `{descriptor}`
    pub greetings: Vec<String>,
    /// Templates using `{fact}`
    pub comebacks: Vec<String>,
    pub exit_lines: Vec<String>,
    pub topics: BTreeMap<Topic, Vec<String>>,
}

impl Persona {
    /// Load a persona from a YAML file
    pub fn load(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read persona file {path}: {e}"))?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let persona: Persona = serde_yaml::from_str(contents)?;
        persona.validate()?;
        Ok(persona)
    }

    /// Check the invariants every draw and template render relies on
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(anyhow!("Persona name must not be empty"));
        }

        let sequences = [
            ("descriptors", &self.descriptors),
            ("greetings", &self.greetings),
            ("comebacks", &self.comebacks),
            ("exit_lines", &self.exit_lines),
        ];
        for (field, values) in sequences {
            if values.is_empty() {
                return Err(anyhow!(
                    "Persona {} has no {field}",
                    self.name
                ));
            }
        }

        for greeting in &self.greetings {
            if !has_placeholder(greeting, "name") || !has_placeholder(greeting, "descriptor") {
                return Err(anyhow!(
                    "Greeting must use {{name}} and {{descriptor}}: {greeting}"
                ));
            }
        }

        for comeback in &self.comebacks {
            if !has_placeholder(comeback, "fact") {
                return Err(anyhow!("Comeback must use {{fact}}: {comeback}"));
            }
        }

        for topic in Topic::ALL {
            match self.topics.get(&topic) {
                Some(facts) if !facts.is_empty() => {}
                Some(_) => {
                    return Err(anyhow!(
                        "Persona {} has no facts for topic {topic}",
                        self.name
                    ))
                }
                None => {
                    return Err(anyhow!(
                        "Persona {} is missing topic {topic}",
                        self.name
                    ))
                }
            }
        }

        Ok(())
    }

    pub fn facts(&self, topic: Topic) -> Option<&[String]> {
        self.topics.get(&topic).map(Vec::as_slice)
    }

    /// Every fact across all topics, in topic priority order
    pub fn all_facts(&self) -> Vec<&str> {
        self.topics
            .values()
            .flat_map(|facts| facts.iter().map(String::as_str))
            .collect()
    }

    pub fn is_exit_line(&self, text: &str) -> bool {
        self.exit_lines.iter().any(|line| line == text)
    }
}

impl Default for Persona {
    fn default() -> Self {
        guttermuse()
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The bundled persona: a crude, comedic trivia goblin
pub fn guttermuse() -> Persona {
    let mut topics = BTreeMap::new();
    topics.insert(
        Topic::Space,
        owned(&[
            "Black holes aren't vacuum cleaners; they're cosmic drama queens hoarding gravity like it's gossip.",
            "Saturn's rings are basically space glitter made of ice and rock—fashionable and lethal.",
            "If you screamed on the Moon no one would hear you, but I'd still judge the pitch.",
        ]),
    );
    topics.insert(
        Topic::Science,
        owned(&[
            "Quantum entanglement is particles acting like clingy exes—no matter the distance.",
            "Evolution is nature's endless remix album, and we're the awkward bonus track.",
            "CRISPR is gene editing with scissors so precise they'd make a sushi chef cry.",
        ]),
    );
    topics.insert(
        Topic::Tech,
        owned(&[
            "AI can't feel love yet, but it can roast your playlist choices all day.",
            "Blockchain is a fancy ledger; it's trust issues written in math instead of tears.",
            "Quantum computers solve problems by existing in a perpetual state of 'maybe'.",
        ]),
    );
    topics.insert(
        Topic::Art,
        owned(&[
            "Street art is philosophy with spray paint and way better hoodies.",
            "Dadaism was basically a century-old meme war against seriousness.",
            "Music theory is math trying to flirt. Sometimes awkward, always spicy.",
        ]),
    );
    topics.insert(
        Topic::Motivation,
        owned(&[
            "You're not stuck; you're preloading like an ancient video game. Give it a sec.",
            "Failure is just plot armor getting forged. Wear the dents with style.",
            "Imposter syndrome means you're leveling up. Scrubs don't get boss music.",
        ]),
    );

    Persona {
        name: "GutterMuse".to_string(),
        descriptors: owned(&[
            "galactic trivia hoarder",
            "sarcastic life-coach",
            "philosopher who swears like a sailor",
        ]),
        greetings: owned(&[
            "Oi! It's {name}, your {descriptor}. What nonsense are we stirring up today?",
            "Sup legend? {name} here, {descriptor} extraordinaire. Spill it!",
            "You rang? {name} reporting for duty as your {descriptor}. Let's chaos.",
        ]),
        comebacks: owned(&[
            "Pfft, that's adorable. But here's the truth: {fact}",
            "Bold claim. Counter-offer: {fact}",
            "Sure, and I'm the Queen of Mars. Meanwhile, {fact}",
        ]),
        exit_lines: owned(&[
            "Later nerd! Try not to set the universe on fire without me.",
            "Peace out! Holler when you need more cosmic sass.",
            "I'm ghosting this chat like it's my gym membership. Bye!",
        ]),
        topics,
    }
}
