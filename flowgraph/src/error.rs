//! Document-level extraction failures.
//!
//! Only these three conditions ever reach the caller. Record-level gaps
//! (missing ids, missing link endpoints, missing detail fields) are absorbed
//! by the builders and never surface here.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Parse,
    Locate,
    Build,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Parse => write!(f, "Parse"),
            Phase::Locate => write!(f, "Locate"),
            Phase::Build => write!(f, "Build"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The source text is not valid JSON.
    #[error("[Parse:P001] malformed JSON: {0}")]
    MalformedInput(String),

    /// No activities collection was found under any known key-path.
    #[error("[Locate:S001] unrecognized schema")]
    SchemaNotRecognized,

    /// The schema was recognized but no activity survived node building.
    #[error("[Build:G001] no nodes parsed")]
    EmptyGraph,
}

impl ExtractError {
    pub fn malformed(message: impl Into<String>) -> Self {
        ExtractError::MalformedInput(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            ExtractError::MalformedInput(_) => "P001",
            ExtractError::SchemaNotRecognized => "S001",
            ExtractError::EmptyGraph => "G001",
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            ExtractError::MalformedInput(_) => Phase::Parse,
            ExtractError::SchemaNotRecognized => Phase::Locate,
            ExtractError::EmptyGraph => Phase::Build,
        }
    }

    /// Human-readable reason, suitable for a UI banner.
    pub fn reason(&self) -> String {
        match self {
            ExtractError::MalformedInput(message) => format!("malformed JSON: {}", message),
            ExtractError::SchemaNotRecognized => "unrecognized schema".into(),
            ExtractError::EmptyGraph => "no nodes parsed".into(),
        }
    }
}
