//! Thyroid screening inference
//!
//! Validates a single patient's hormone panel, lays it out on the fixed 30-column
//! thyroid schema and classifies it with a pre-trained decision tree ([`linfa_trees`]).
//! The binary in `apps/cli` is a thin clap surface over this crate.

pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod model;
pub mod schema;
pub mod vector;


pub use config::EngineConfig;
pub use engine::{Verdict, predict};
pub use error::{InferenceError, InferenceResult, InputError, InputResult};
pub use input::{PatientInput, ReferralSource};
pub use model::ThyroidModel;
pub use vector::FeatureVector;
