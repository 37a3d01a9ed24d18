#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod config;
pub mod engine;
pub mod error;
pub mod links;

pub use config::{EngineConfig, PracticalStyle};
pub use engine::{
    ComparisonResult, EvaluationResult, NameGauge, SignalSet, compare_names, evaluate_name,
    require_name,
};
pub use error::{GaugeError, Result};
