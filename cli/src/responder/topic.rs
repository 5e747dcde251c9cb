//! # Topics
//!
//! File: cli/src/responder/topic.rs
//! Author: Christi Mahu
//!
//! The closed set of concerns the responder recognises. `General` is the
//! fallback and is never matched by keyword.
//!
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A fixed category of emotional or spiritual concern.
///
/// The derived `Ord` follows declaration order, which is also the
/// classification order, so a `BTreeMap<Topic, _>` iterates the same way.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Anxiety,
    Fear,
    Grief,
    Forgiveness,
    Temptation,
    Doubt,
    Purpose,
    Strength,
    Love,
    General,
}

impl Topic {
    /// Keyword topics in tie-break order. The first topic with a matching
    /// keyword wins.
    pub const CLASSIFICATION_ORDER: [Topic; 9] = [
        Topic::Anxiety,
        Topic::Fear,
        Topic::Grief,
        Topic::Forgiveness,
        Topic::Temptation,
        Topic::Doubt,
        Topic::Purpose,
        Topic::Strength,
        Topic::Love,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Anxiety => "anxiety",
            Topic::Fear => "fear",
            Topic::Grief => "grief",
            Topic::Forgiveness => "forgiveness",
            Topic::Temptation => "temptation",
            Topic::Doubt => "doubt",
            Topic::Purpose => "purpose",
            Topic::Strength => "strength",
            Topic::Love => "love",
            Topic::General => "general",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::CLASSIFICATION_ORDER
            .iter()
            .chain(std::iter::once(&Topic::General))
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown topic '{}'", s))
    }
}
