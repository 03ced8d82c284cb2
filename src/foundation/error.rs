/// Convenience result type used across the crate.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by planning and encoding APIs.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid configuration or passage data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Word tokens and timing boundaries of a passage cannot be aligned.
    #[error("alignment error in passage {passage}: {message}")]
    Alignment {
        /// Passage ordinal the failure belongs to.
        passage: u32,
        /// Human readable detail.
        message: String,
    },

    /// A required field is absent at the JSON boundary.
    #[error("missing field `{field}`{}", fmt_passage(.passage))]
    MissingField {
        /// Passage ordinal, when the field belongs to a passage record.
        passage: Option<u32>,
        /// JSON field name.
        field: &'static str,
    },

    /// Errors while invoking the external encoder.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn fmt_passage(passage: &Option<u32>) -> String {
    match passage {
        Some(p) => format!(" in passage {p}"),
        None => String::new(),
    }
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Alignment`] value.
    pub fn alignment(passage: u32, msg: impl Into<String>) -> Self {
        Self::Alignment {
            passage,
            message: msg.into(),
        }
    }

    /// Build a [`ReelError::MissingField`] value for a passage field.
    pub fn missing_field(passage: Option<u32>, field: &'static str) -> Self {
        Self::MissingField { passage, field }
    }

    /// Build a [`ReelError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
