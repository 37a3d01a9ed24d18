use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ── Practical-judgment style ─────────────────────────────────────

/// How caution clauses are rendered in the practical judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PracticalStyle {
    /// One appended sentence per detected caution flag (the richer default).
    #[default]
    Clauses,
    /// A single combined caution sentence, no per-flag clauses.
    Combined,
}

// ── Engine config ────────────────────────────────────────────────

/// Vocabularies and thresholds for the signal detectors.
///
/// Every knob has a serde default so a TOML file only needs the fields it
/// overrides. Read-only once a detector set is built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Sensory/visual vocabulary, matched as case-insensitive substrings.
    #[serde(default = "default_imagery_words")]
    pub imagery_words: Vec<String>,

    /// Common business-naming vocabulary, matched as exact tokens.
    #[serde(default = "default_generic_words")]
    pub generic_words: Vec<String>,

    /// Word count at or above which a name reads as long.
    #[serde(default = "default_long_word_threshold")]
    pub long_word_threshold: usize,

    /// Character count at or above which a name reads as long.
    #[serde(default = "default_long_char_threshold")]
    pub long_char_threshold: usize,

    /// Word count at or below which a name can read as short.
    #[serde(default = "default_short_word_threshold")]
    pub short_word_threshold: usize,

    /// Character count at or below which a name can read as short.
    #[serde(default = "default_short_char_threshold")]
    pub short_char_threshold: usize,

    /// Uncommon letter-cluster patterns fed to the spelling detector,
    /// compiled case-insensitively into a `RegexSet`.
    #[serde(default = "default_spelling_patterns")]
    pub spelling_patterns: Vec<String>,

    /// Trailing tokens associated with currently popular naming patterns.
    #[serde(default = "default_trend_suffixes")]
    pub trend_suffixes: Vec<String>,

    #[serde(default)]
    pub practical_style: PracticalStyle,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            imagery_words: default_imagery_words(),
            generic_words: default_generic_words(),
            long_word_threshold: default_long_word_threshold(),
            long_char_threshold: default_long_char_threshold(),
            short_word_threshold: default_short_word_threshold(),
            short_char_threshold: default_short_char_threshold(),
            spelling_patterns: default_spelling_patterns(),
            trend_suffixes: default_trend_suffixes(),
            practical_style: PracticalStyle::default(),
        }
    }
}

impl EngineConfig {
    /// Reject threshold combinations under which a name could classify as
    /// both short and long at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.long_word_threshold == 0 || self.long_char_threshold == 0 {
            return Err(ConfigError::Validation(
                "long thresholds must be greater than zero".into(),
            ));
        }
        if self.long_word_threshold <= self.short_word_threshold {
            return Err(ConfigError::Validation(format!(
                "long_word_threshold ({}) must exceed short_word_threshold ({})",
                self.long_word_threshold, self.short_word_threshold
            )));
        }
        if self.long_char_threshold <= self.short_char_threshold {
            return Err(ConfigError::Validation(format!(
                "long_char_threshold ({}) must exceed short_char_threshold ({})",
                self.long_char_threshold, self.short_char_threshold
            )));
        }
        Ok(())
    }
}

// ── Defaults ─────────────────────────────────────────────────────

fn default_imagery_words() -> Vec<String> {
    [
        "moon", "sun", "star", "river", "ocean", "stone", "lantern", "forest", "shadow", "light",
        "ember", "storm", "garden", "wind", "cloud", "mountain",
    ]
    .map(String::from)
    .to_vec()
}

fn default_generic_words() -> Vec<String> {
    [
        "studio",
        "labs",
        "lab",
        "group",
        "collective",
        "solutions",
        "media",
        "creative",
        "works",
        "company",
        "co",
        "inc",
        "llc",
        "systems",
        "digital",
    ]
    .map(String::from)
    .to_vec()
}

fn default_long_word_threshold() -> usize {
    4
}

fn default_long_char_threshold() -> usize {
    28
}

fn default_short_word_threshold() -> usize {
    2
}

fn default_short_char_threshold() -> usize {
    18
}

fn default_spelling_patterns() -> Vec<String> {
    ["xq", "jq", "tz", "zs", "aei", "iou"].map(String::from).to_vec()
}

fn default_trend_suffixes() -> Vec<String> {
    ["labs", "lab", "studio", "collective", "hub"]
        .map(String::from)
        .to_vec()
}
