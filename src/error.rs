use thiserror::Error;

/// Per-candidate generation failure. Recoverable: every variant of this enum
/// resolves to a locally synthesized fallback candidate, never to a pipeline
/// abort. Kept structurally separate from ForgeError so recoverable failures
/// cannot escalate by accident.
#[derive(Debug, Clone)]
pub enum GenerationFailure {
    Timeout {
        elapsed_secs: u64,
    },
    Service {
        message: String,
    },
    MalformedResponse {
        reason: String,
    },
    TaskPanic {
        message: String,
    },
}

impl GenerationFailure {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Short stable label used in fallback metadata and log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::Service { .. } => "service_error",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::TaskPanic { .. } => "task_panic",
        }
    }
}

impl std::fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout { elapsed_secs } => {
                write!(f, "Generation timed out after {}s", elapsed_secs)
            }
            Self::Service { message } => write!(f, "Service error: {}", message),
            Self::MalformedResponse { reason } => {
                write!(f, "Malformed response: {}", reason)
            }
            Self::TaskPanic { message } => write!(f, "Generation task panicked: {}", message),
        }
    }
}

impl std::error::Error for GenerationFailure {}

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("Topic must not be empty")]
    EmptyTopic,

    #[error("Invalid variant count: {requested} (expected 1 to 3)")]
    InvalidVariantCount { requested: u32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Service error: {0}")]
    Service(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ForgeError>;
