//! # Feature: Topic Classification
//!
//! Maps a user message to at most one topic by first-match over a fixed,
//! ordered keyword table. A message naming several topics resolves to the
//! earliest entry; there is no scoring.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::text::contains_any;

/// Subject categories, declared in classifier priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Space,
    Science,
    Tech,
    Art,
    Motivation,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::Space,
        Topic::Science,
        Topic::Tech,
        Topic::Art,
        Topic::Motivation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Space => "space",
            Topic::Science => "science",
            Topic::Tech => "tech",
            Topic::Art => "art",
            Topic::Motivation => "motivation",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        TOPIC_KEYWORDS
            .iter()
            .find(|(topic, _)| topic == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword table in priority order
pub const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (Topic::Space, &["space", "planet", "galaxy", "star", "cosmos"]),
    (
        Topic::Science,
        &["science", "physics", "chemistry", "biology", "experiment"],
    ),
    (
        Topic::Tech,
        &["tech", "technology", "ai", "code", "software", "hardware"],
    ),
    (Topic::Art, &["art", "music", "painting", "dance", "poetry"]),
    (
        Topic::Motivation,
        &["motivate", "inspire", "stuck", "sad", "help", "motivation"],
    ),
];

/// First topic whose keywords appear in `message`, if any
pub fn detect_topic(message: &str) -> Option<Topic> {
    let lower = message.to_lowercase();
    Topic::ALL
        .into_iter()
        .find(|topic| contains_any(&lower, topic.keywords()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_follows_priority_order() {
        let order: Vec<Topic> = TOPIC_KEYWORDS.iter().map(|(t, _)| *t).collect();
        assert_eq!(order, Topic::ALL.to_vec());
    }

    #[test]
    fn test_detects_each_topic() {
        assert_eq!(detect_topic("Tell me about the GALAXY"), Some(Topic::Space));
        assert_eq!(detect_topic("chemistry is neat"), Some(Topic::Science));
        assert_eq!(detect_topic("I write software"), Some(Topic::Tech));
        assert_eq!(detect_topic("poetry, please"), Some(Topic::Art));
        assert_eq!(detect_topic("I feel stuck"), Some(Topic::Motivation));
    }

    #[test]
    fn test_first_registered_topic_wins() {
        assert_eq!(
            detect_topic("tell me about space and physics"),
            Some(Topic::Space)
        );
        assert_eq!(detect_topic("the physics of painting"), Some(Topic::Science));
        assert_eq!(detect_topic("music to help me code"), Some(Topic::Tech));
    }

    #[test]
    fn test_no_topic() {
        assert_eq!(detect_topic("hello there"), None);
        assert_eq!(detect_topic(""), None);
    }

    #[test]
    fn test_every_topic_has_keywords() {
        for topic in Topic::ALL {
            assert!(!topic.keywords().is_empty(), "{topic} has no keywords");
        }
    }

    #[test]
    fn test_keywords_lookup() {
        assert!(Topic::Tech.keywords().contains(&"ai"));
        assert_eq!(Topic::Motivation.keywords().len(), 6);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let yaml = serde_yaml::to_string(&Topic::Motivation).unwrap();
        assert_eq!(yaml.trim(), "motivation");
        let parsed: Topic = serde_yaml::from_str("space").unwrap();
        assert_eq!(parsed, Topic::Space);
    }
}
