//! Error types for the fatigue solver

use thiserror::Error;

/// Main error type for equivalent stress operations
#[derive(Error, Debug)]
pub enum FatigueError {
    #[error("Material property '{field}' must be positive, got {value}")]
    InvalidMaterial { field: &'static str, value: f64 },

    #[error("{correction} correction requires material parameter '{parameter}'")]
    MissingParameter {
        correction: &'static str,
        parameter: &'static str,
    },

    #[error(
        "{correction} correction is undefined{}: amplitude={amplitude}, mean={mean} ({reason})",
        .index.map(|i| format!(" at point {i}")).unwrap_or_default()
    )]
    Domain {
        correction: &'static str,
        index: Option<usize>,
        amplitude: f64,
        mean: f64,
        reason: String,
    },

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Duplicate id '{0}' already exists")]
    DuplicateId(String),

    #[error("Node {0} not found in model")]
    NodeNotFound(u32),

    #[error("Element {0} not found in model")]
    ElementNotFound(u32),

    #[error("{criterion} produced a non-finite value {value} at point {index}")]
    NonFiniteResult {
        criterion: &'static str,
        index: usize,
        value: f64,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl FatigueError {
    /// Attach the evaluation point index to a domain error raised by a scalar evaluation
    pub fn at_point(self, point: usize) -> Self {
        match self {
            FatigueError::Domain {
                correction,
                index: None,
                amplitude,
                mean,
                reason,
            } => FatigueError::Domain {
                correction,
                index: Some(point),
                amplitude,
                mean,
                reason,
            },
            other => other,
        }
    }
}

/// Result type for fatigue operations
pub type FatigueResult<T> = Result<T, FatigueError>;
