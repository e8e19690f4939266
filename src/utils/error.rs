use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimekitError {
    #[error("Invalid duration unit '{unit}' in '{input}' (expected one of m, h, d, w)")]
    InvalidUnit { input: String, unit: char },

    #[error("Duration '{input}' has no magnitude")]
    EmptyDuration { input: String },

    #[error("Invalid duration magnitude in '{input}': {source}")]
    InvalidMagnitude {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Duration '{input}' is out of range")]
    DurationOutOfRange { input: String },

    #[error("Malformed timestamp '{input}': {reason}")]
    MalformedTimestamp { input: String, reason: String },

    #[error("Invalid query window: {message}")]
    InvalidWindow { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

impl TimekitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TimekitError::InvalidUnit { .. }
            | TimekitError::EmptyDuration { .. }
            | TimekitError::InvalidMagnitude { .. }
            | TimekitError::DurationOutOfRange { .. }
            | TimekitError::MalformedTimestamp { .. }
            | TimekitError::InvalidWindow { .. } => ErrorCategory::Input,
            TimekitError::ConfigError { .. }
            | TimekitError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TimekitError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not read input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TimekitError::InvalidUnit { .. } | TimekitError::EmptyDuration { .. } => {
                "Write durations as <integer><unit>, e.g. 15m, 2h, 3d or 1w"
            }
            TimekitError::InvalidMagnitude { .. } | TimekitError::DurationOutOfRange { .. } => {
                "Use a whole number small enough to fit the calendar range"
            }
            TimekitError::MalformedTimestamp { .. } => {
                "Timestamps must look exactly like 2021-01-02T03:04:05Z"
            }
            TimekitError::InvalidWindow { .. } => "Use a non-negative lookback duration",
            TimekitError::IoError(_) => "Check that the file exists and is readable",
            TimekitError::ConfigError { .. } | TimekitError::InvalidConfigValueError { .. } => {
                "Check the [window] table in the configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TimekitError>;
