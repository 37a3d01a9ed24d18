//! The evaluation engine: normalize a candidate, detect structural signals,
//! render the four judgments, and compare two candidates under one tie-break
//! policy.

pub mod compare;
pub mod narrative;
pub mod signals;
pub mod text;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

use crate::config::{EngineConfig, PracticalStyle};
use crate::error::{ConfigError, InputError};

pub use compare::{Candidate, Verdict, compare_summary, pick_better_name};
pub use signals::{SignalDetectors, SignalSet};

// ── Results ──────────────────────────────────────────────────────

/// One evaluated candidate: the normalized name plus the four judgments.
///
/// The signal set rides along for callers that want the raw flags; the wire
/// contract is the normalized name and the four narrative fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub normalized_name: String,
    #[serde(skip)]
    pub signals: SignalSet,
    pub memorability: String,
    pub clarity: String,
    pub practical: String,
    pub gutcheck: String,
}

/// Two evaluated candidates plus the comparative narrative and the pick.
///
/// `preferred_name` is always one of the two normalized input names, never a
/// synthesized value.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub a: EvaluationResult,
    pub b: EvaluationResult,
    pub comparison_summary: String,
    pub preferred_name: String,
}

// ── Engine ───────────────────────────────────────────────────────

/// The evaluation engine: compiled detectors plus rendering style.
///
/// Read-only after construction; evaluations share no mutable state, so one
/// engine can serve concurrent requests.
pub struct NameGauge {
    detectors: SignalDetectors,
    style: PracticalStyle,
}

impl NameGauge {
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            detectors: SignalDetectors::from_config(config)?,
            style: config.practical_style,
        })
    }

    /// Evaluate one candidate. Total over any string input, including empty.
    pub fn evaluate(&self, name: &str) -> EvaluationResult {
        let normalized = text::normalize(name);
        // Detect over the normalized form so interior whitespace runs never
        // read as doubled characters.
        let signals = self.detectors.detect(&normalized);
        debug!(name = %normalized, ?signals, caution_count = signals.caution_count(), "evaluated candidate");

        let narratives = narrative::render(&signals, self.style);
        EvaluationResult {
            normalized_name: normalized,
            signals,
            memorability: narratives.memorability,
            clarity: narratives.clarity,
            practical: narratives.practical,
            gutcheck: narratives.gutcheck,
        }
    }

    /// Evaluate two candidates and apply the tie-break policy.
    pub fn compare(&self, name_a: &str, name_b: &str) -> ComparisonResult {
        let a = self.evaluate(name_a);
        let b = self.evaluate(name_b);

        let comparison_summary = compare::compare_summary(
            &a.normalized_name,
            &a.signals,
            &b.normalized_name,
            &b.signals,
        );
        let preferred_name = compare::pick_better_name(
            &a.normalized_name,
            &a.signals,
            &b.normalized_name,
            &b.signals,
        )
        .to_string();

        ComparisonResult {
            a,
            b,
            comparison_summary,
            preferred_name,
        }
    }
}

// ── Input validation ─────────────────────────────────────────────

/// Validate that a required candidate name is present, returning it
/// normalized. `slot` names the input in the error ("name", "name A", ...).
pub fn require_name(raw: &str, slot: &'static str) -> Result<String, InputError> {
    let normalized = text::normalize(raw);
    if normalized.is_empty() {
        return Err(InputError::EmptyName { slot });
    }
    Ok(normalized)
}

// ── Default-config conveniences ──────────────────────────────────

static DEFAULT_ENGINE: Lazy<NameGauge> =
    Lazy::new(|| NameGauge::new(&EngineConfig::default()).expect("default engine config is valid"));

/// Evaluate with the default vocabularies and thresholds.
pub fn evaluate_name(name: &str) -> EvaluationResult {
    DEFAULT_ENGINE.evaluate(name)
}

/// Compare with the default vocabularies and thresholds.
pub fn compare_names(name_a: &str, name_b: &str) -> ComparisonResult {
    DEFAULT_ENGINE.compare(name_a, name_b)
}
