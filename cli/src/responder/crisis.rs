//! # Crisis Detection
//!
//! File: cli/src/responder/crisis.rs
//! Author: Christi Mahu
//!
//! Substrings that indicate possible self-harm risk. A match overrides topic
//! classification entirely. These are compiled in and cannot be replaced by
//! a custom topics file.
//!

/// Lowercase patterns matched as literal substrings of the lowercased input.
pub const CRISIS_PATTERNS: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "hurt myself",
    "i can't go on",
    "i want to die",
    "self-harm",
];

/// The fixed reply for any input containing a crisis pattern.
pub const CRISIS_RESPONSE: &str = "I'm really sorry — it sounds like you're in a crisis right now. \
I care about your safety. If you're thinking about harming yourself, please contact local emergency services or a crisis hotline right away. \
If you can, please reach out to someone you trust; if not, call your local emergency number or a suicide prevention hotline (for example, in the U.S. call 988). \
It's important to get help now. I can stay with you and listen, but professional care is crucial in this situation.";

/// Returns true if `normalized` (already lowercased) contains any crisis pattern.
pub fn is_crisis(normalized: &str) -> bool {
    CRISIS_PATTERNS.iter().any(|p| normalized.contains(p))
}
