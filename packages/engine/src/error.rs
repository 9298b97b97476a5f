//! Error types for input validation and inference

use std::path::PathBuf;
use thiserror::Error;

/// Result type for argument validation
pub type InputResult<T> = Result<T, InputError>;

/// Result type for model loading and classification
pub type InferenceResult<T> = Result<T, InferenceError>;

/// Errors raised while validating a single command-line value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Value could not be parsed as the expected number type
    #[error("An invalid number has been provided for {field}: `{value}`")]
    InvalidNumber { field: &'static str, value: String },

    /// Hormone values can be zero but never negative
    #[error("{field} is negative and impossible: `{value}`")]
    Negative { field: &'static str, value: String },

    #[error("An impossible age has been given: {0} (expected 1 to 119)")]
    AgeOutOfRange(i32),

    #[error(
        "A wrong referral source has been given: `{0}` (expected one of SVHC, other, SVI, STMW, SVHD, WEST)"
    )]
    UnknownReferralSource(String),

    /// Boolean flags only take 0, 1, t, T, f or F
    #[error("{field} has not been included correctly: `{value}` (expected 1, t, T or 0, f, F)")]
    InvalidFlag { field: &'static str, value: String },
}

/// Errors that can occur while loading the model artifact or classifying
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON model artifact is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("MessagePack deserialization failed: {0}")]
    MessagePack(#[from] rmp_serde::decode::Error),

    #[error("MessagePack serialization failed: {0}")]
    MessagePackEncode(#[from] rmp_serde::encode::Error),

    #[error("Unsupported model artifact version: {0}")]
    UnsupportedVersion(u8),

    /// Artifact was trained on a different column layout
    #[error("Model schema mismatch: expected {expected} predictor attributes, artifact declares {actual} ({detail})")]
    SchemaMismatch {
        expected: usize,
        actual: usize,
        detail: String,
    },

    #[error("Model class {index} is labelled `{found}`, schema expects `{expected}`")]
    ClassMismatch {
        index: usize,
        expected: String,
        found: String,
    },

    #[error("Could not shape feature vector: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Got an empty prediction")]
    EmptyPrediction,

    #[error("Couldn't map prediction {index} to any of these classes {labels:?}")]
    UnknownClass {
        index: usize,
        labels: &'static [&'static str],
    },
}
