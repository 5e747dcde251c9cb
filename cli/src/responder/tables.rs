//! # Topic Tables
//!
//! File: cli/src/responder/tables.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Keyword triggers, verse citations, encouragement sentences and openers are
//! data, kept in `data/topics.toml` and embedded in the binary at compile time.
//! A user may point `responder.topics_file` at a replacement with the same shape.
//!
//! ## Validation
//!
//! - `general` must be present with at least one verse
//! - at least one opener
//! - keywords must be non-empty and lowercase (input is lowercased before matching)
//! - each topic appears at most once
//!
//! A keyword topic with no entry or no verses borrows from `general`.
//!
use crate::core::error::{GospelError, Result};
use crate::responder::topic::Topic;
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const EMBEDDED_TOPICS: &str = include_str!("../../data/topics.toml");

/// On-disk shape of a topics file.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct TopicsFile {
    openers: Vec<String>,
    topics: Vec<TopicEntry>,
}

/// One topic's keywords, encouragement and verses.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct TopicEntry {
    pub topic: Topic,
    pub encouragement: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub verses: Vec<String>,
}

/// Read-only lookup tables used by `TopicResponder`.
#[derive(Debug, Clone)]
pub struct TopicTables {
    openers: Vec<String>,
    entries: BTreeMap<Topic, TopicEntry>,
}

impl TopicTables {
    /// Tables compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_TOPICS).context("Embedded topic tables are invalid")
    }

    /// Loads a user-supplied topics file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading topic tables from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read topics file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid topics file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TopicsFile = toml::from_str(content).context("Failed to parse topic tables")?;
        Self::build(file)
    }

    fn build(file: TopicsFile) -> Result<Self> {
        if file.openers.is_empty() {
            return Err(anyhow!(GospelError::TopicData(
                "at least one opener is required".into()
            )));
        }

        let mut entries = BTreeMap::new();
        for entry in file.topics {
            for keyword in &entry.keywords {
                if keyword.is_empty() {
                    return Err(anyhow!(GospelError::TopicData(format!(
                        "topic '{}' has an empty keyword",
                        entry.topic
                    ))));
                }
                if keyword.to_lowercase() != *keyword {
                    return Err(anyhow!(GospelError::TopicData(format!(
                        "keyword '{}' for topic '{}' must be lowercase",
                        keyword, entry.topic
                    ))));
                }
            }
            if entry.topic == Topic::General && !entry.keywords.is_empty() {
                warn!("Keywords on the 'general' topic are never matched; ignoring them.");
            }
            let topic = entry.topic;
            if entries.insert(topic, entry).is_some() {
                return Err(anyhow!(GospelError::TopicData(format!(
                    "topic '{}' is defined more than once",
                    topic
                ))));
            }
        }

        match entries.get(&Topic::General) {
            Some(general) if !general.verses.is_empty() => {}
            Some(_) => {
                return Err(anyhow!(GospelError::TopicData(
                    "the 'general' topic must have at least one verse".into()
                )))
            }
            None => {
                return Err(anyhow!(GospelError::TopicData(
                    "the 'general' topic is required".into()
                )))
            }
        }

        for topic in Topic::CLASSIFICATION_ORDER {
            match entries.get(&topic) {
                None => warn!("Topic '{}' is not defined; it will never be selected.", topic),
                Some(entry) if entry.verses.is_empty() => {
                    warn!("Topic '{}' has no verses; 'general' verses will be used.", topic)
                }
                Some(_) => {}
            }
        }

        Ok(Self {
            openers: file.openers,
            entries,
        })
    }

    /// Keyword triggers for `topic`, empty if the topic is undefined.
    pub fn keywords(&self, topic: Topic) -> &[String] {
        match topic {
            Topic::General => &[],
            _ => self
                .entries
                .get(&topic)
                .map(|e| e.keywords.as_slice())
                .unwrap_or(&[]),
        }
    }

    /// Verses for `topic`, falling back to `general`. Never empty.
    pub fn verses(&self, topic: Topic) -> &[String] {
        match self.entries.get(&topic) {
            Some(entry) if !entry.verses.is_empty() => &entry.verses,
            _ => &self.general().verses,
        }
    }

    /// Encouragement sentence for `topic`, falling back to `general`.
    pub fn encouragement(&self, topic: Topic) -> &str {
        self.entries
            .get(&topic)
            .unwrap_or_else(|| self.general())
            .encouragement
            .as_str()
    }

    pub fn openers(&self) -> &[String] {
        &self.openers
    }

    fn general(&self) -> &TopicEntry {
        // `build` rejects tables without a general entry.
        &self.entries[&Topic::General]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        openers = ["Hi."]

        [[topics]]
        topic = "fear"
        encouragement = "Be brave."
        keywords = ["scared"]

        [[topics]]
        topic = "general"
        encouragement = "Keep going."
        verses = ["Be strong and courageous. — Joshua 1:9"]
    "#;

    #[test]
    fn embedded_tables_are_complete() {
        let tables = TopicTables::embedded().expect("embedded tables should load");
        assert_eq!(tables.openers().len(), 4);
        assert_eq!(tables.verses(Topic::Anxiety).len(), 3);
        assert_eq!(tables.verses(Topic::General).len(), 3);
        for topic in Topic::CLASSIFICATION_ORDER {
            assert!(!tables.keywords(topic).is_empty(), "{} has no keywords", topic);
            assert!(tables.verses(topic).len() >= 2, "{} has too few verses", topic);
            assert_ne!(
                tables.encouragement(topic),
                tables.encouragement(Topic::General),
                "{} should have its own encouragement",
                topic
            );
        }
    }

    #[test]
    fn missing_verses_fall_back_to_general() {
        let tables = TopicTables::from_toml_str(MINIMAL).unwrap();
        assert_eq!(tables.verses(Topic::Fear), tables.verses(Topic::General));
        assert_eq!(tables.encouragement(Topic::Fear), "Be brave.");
    }

    #[test]
    fn undefined_topic_falls_back_to_general() {
        let tables = TopicTables::from_toml_str(MINIMAL).unwrap();
        assert!(tables.keywords(Topic::Love).is_empty());
        assert_eq!(tables.encouragement(Topic::Love), "Keep going.");
        assert_eq!(tables.verses(Topic::Love).len(), 1);
    }

    #[test]
    fn general_keywords_are_never_exposed() {
        let content = MINIMAL.replace(
            "encouragement = \"Keep going.\"",
            "encouragement = \"Keep going.\"\n        keywords = [\"hello\"]",
        );
        let tables = TopicTables::from_toml_str(&content).unwrap();
        assert!(tables.keywords(Topic::General).is_empty());
    }

    #[test]
    fn rejects_missing_general() {
        let content = r#"
            openers = ["Hi."]
            [[topics]]
            topic = "fear"
            encouragement = "Be brave."
            verses = ["Fear not. — Isaiah 41:10"]
        "#;
        let err = TopicTables::from_toml_str(content).unwrap_err();
        assert!(err.to_string().contains("'general' topic is required"));
    }

    #[test]
    fn rejects_general_without_verses() {
        let content = r#"
            openers = ["Hi."]
            [[topics]]
            topic = "general"
            encouragement = "Keep going."
        "#;
        let err = TopicTables::from_toml_str(content).unwrap_err();
        assert!(err.to_string().contains("at least one verse"));
    }

    #[test]
    fn rejects_uppercase_keyword() {
        let content = MINIMAL.replace("[\"scared\"]", "[\"Scared\"]");
        let err = TopicTables::from_toml_str(&content).unwrap_err();
        assert!(err.to_string().contains("must be lowercase"));
    }

    #[test]
    fn rejects_duplicate_topic() {
        let content = format!(
            "{}\n[[topics]]\ntopic = \"fear\"\nencouragement = \"Again.\"\n",
            MINIMAL
        );
        let err = TopicTables::from_toml_str(&content).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn rejects_empty_openers() {
        let content = MINIMAL.replace("[\"Hi.\"]", "[]");
        let err = TopicTables::from_toml_str(&content).unwrap_err();
        assert!(err.to_string().contains("opener"));
    }

    #[test]
    fn rejects_unknown_topic_name() {
        let content = MINIMAL.replace("topic = \"fear\"", "topic = \"loneliness\"");
        assert!(TopicTables::from_toml_str(&content).is_err());
    }
}
