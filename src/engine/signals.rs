//! Boolean structural signals detected from a candidate name.
//!
//! Each detector is a pure predicate over the raw input string; vocabularies
//! and thresholds come from [`EngineConfig`](crate::config::EngineConfig) and
//! are read-only once the detector set is built.

use regex::RegexSet;

use crate::config::EngineConfig;
use crate::error::ConfigError;

use super::text::{char_count, normalize, words_of};

// SignalSet — per-candidate record of detected structural signals.
//
// `caution_count` is always derived from the flags, never stored, so the
// invariant (count of {long, spelling, generic, trendy}) holds by
// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignalSet {
    pub long: bool,
    pub short: bool,
    pub imagery: bool,
    pub generic: bool,
    pub spelling: bool,
    pub trendy: bool,
}

impl SignalSet {
    /// Count of negative-leaning signals, in `0..=4`.
    ///
    /// `imagery` and `short` are positive signals and never count.
    pub fn caution_count(&self) -> u8 {
        u8::from(self.long) + u8::from(self.spelling) + u8::from(self.generic) + u8::from(self.trendy)
    }
}

/// Compiled detector set. Built once from config, read-only afterwards, so
/// concurrent evaluation of independent candidates is safe.
pub struct SignalDetectors {
    imagery_words: Vec<String>,
    generic_words: Vec<String>,
    trend_suffixes: Vec<String>,
    clusters: RegexSet,
    long_word_threshold: usize,
    long_char_threshold: usize,
    short_word_threshold: usize,
    short_char_threshold: usize,
}

impl SignalDetectors {
    /// Compile a detector set from configuration.
    ///
    /// Invalid cluster patterns surface here as [`ConfigError::Pattern`], not
    /// at evaluation time.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        let clusters = RegexSet::new(config.spelling_patterns.iter().map(|p| format!("(?i){p}")))
            .map_err(|e| ConfigError::Pattern(e.to_string()))?;

        Ok(Self {
            imagery_words: lowercased(&config.imagery_words),
            generic_words: lowercased(&config.generic_words),
            trend_suffixes: lowercased(&config.trend_suffixes),
            clusters,
            long_word_threshold: config.long_word_threshold,
            long_char_threshold: config.long_char_threshold,
            short_word_threshold: config.short_word_threshold,
            short_char_threshold: config.short_char_threshold,
        })
    }

    /// Run every detector over one candidate.
    pub fn detect(&self, input: &str) -> SignalSet {
        SignalSet {
            long: self.is_long(input),
            short: self.is_short(input),
            imagery: self.has_imagery_word(input),
            generic: self.has_generic_word(input),
            spelling: self.has_hard_to_spell_signals(input),
            trendy: self.has_trend_pattern(input),
        }
    }

    /// Either dimension alone triggers it: word count or character count.
    pub fn is_long(&self, input: &str) -> bool {
        words_of(input).len() >= self.long_word_threshold
            || char_count(input) >= self.long_char_threshold
    }

    /// Both dimensions required: few words and few characters.
    pub fn is_short(&self, input: &str) -> bool {
        words_of(input).len() <= self.short_word_threshold
            && char_count(input) <= self.short_char_threshold
    }

    /// Case-insensitive substring containment against the imagery vocabulary.
    ///
    /// Loose on purpose: "Starlight" matches "star". Substring semantics are
    /// part of the heuristic, not an accident.
    pub fn has_imagery_word(&self, input: &str) -> bool {
        let s = normalize(input).to_lowercase();
        self.imagery_words.iter().any(|w| s.contains(w.as_str()))
    }

    /// Case-insensitive exact token match against the generic vocabulary.
    ///
    /// Stricter than imagery matching to avoid over-triggering on substrings.
    pub fn has_generic_word(&self, input: &str) -> bool {
        let s = normalize(input).to_lowercase();
        s.split(' ')
            .any(|token| self.generic_words.iter().any(|w| w == token))
    }

    /// Doubled character, a `q` not followed by `u`, or any configured
    /// uncommon letter cluster. All case-insensitive, run on raw input.
    pub fn has_hard_to_spell_signals(&self, input: &str) -> bool {
        has_doubled_char(input) || has_q_without_u(input) || self.clusters.is_match(input)
    }

    /// Case-insensitive suffix match of the normalized text against the
    /// configured trend endings.
    pub fn has_trend_pattern(&self, input: &str) -> bool {
        let s = normalize(input).to_lowercase();
        self.trend_suffixes.iter().any(|suffix| s.ends_with(suffix.as_str()))
    }
}

fn lowercased(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

fn has_doubled_char(input: &str) -> bool {
    let lower: Vec<char> = input.to_lowercase().chars().collect();
    lower.windows(2).any(|pair| pair[0] == pair[1])
}

fn has_q_without_u(input: &str) -> bool {
    let lower: Vec<char> = input.to_lowercase().chars().collect();
    lower
        .iter()
        .enumerate()
        .any(|(i, &c)| c == 'q' && lower.get(i + 1) != Some(&'u'))
}
