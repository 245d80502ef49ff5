use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed region record at {origin}:{line}: '{content}'")]
    MalformedRegionRecord {
        origin: String,
        line: usize,
        content: String,
    },

    #[error("Malformed reading at {origin}:{line}: {reason}")]
    MalformedReadingLine {
        origin: String,
        line: usize,
        reason: String,
    },

    #[error("Region {region} has no samples to aggregate")]
    EmptyAccumulation { region: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProcessingError {
    /// Process exit code for this failure: 1 for a bad region table, 2 for a bad
    /// weather line, 3 for anything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            ProcessingError::MalformedRegionRecord { .. } => 1,
            ProcessingError::MalformedReadingLine { .. } => 2,
            _ => 3,
        }
    }
}
