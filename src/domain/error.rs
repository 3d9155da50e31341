//! Domain error types.

/// Top-level error type for psmeter.
#[derive(Debug, thiserror::Error)]
pub enum PsmError {
    #[error("input error: {reason}")]
    Input { reason: String },

    #[error("input error at row {row}: {reason}")]
    InputRow { row: usize, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("curves do not share a price grid: {reason}")]
    GridMismatch { reason: String },

    #[error("no survey responses to analyze")]
    NoResponses,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&PsmError> for std::process::ExitCode {
    fn from(err: &PsmError) -> Self {
        let code: u8 = match err {
            PsmError::Io(_) | PsmError::Input { .. } | PsmError::InputRow { .. } => 1,
            PsmError::ConfigParse { .. }
            | PsmError::ConfigMissing { .. }
            | PsmError::ConfigInvalid { .. } => 2,
            PsmError::GridMismatch { .. } | PsmError::NoResponses => 3,
        };
        std::process::ExitCode::from(code)
    }
}
