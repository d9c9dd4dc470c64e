//! Console error types.

/// Terminal I/O error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Console Error: {} at line {} in {}", message, line, file)]
pub struct ConsoleError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConsoleError {
    /// Create a new ConsoleError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}
