//! Error types for the trebuchet commute simulator.
//!
//! Every error carries the source location where it was raised, captured with
//! `#[track_caller]`. Crate-specific errors convert into [`TrebuchetError`]
//! through [`TrebuchetErrorKind`], so `?` works across the workspace.

mod assembly;
mod config;
mod console;

pub use assembly::{AssemblyError, AssemblyErrorKind};
pub use config::ConfigError;
pub use console::ConsoleError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum TrebuchetErrorKind {
    /// Assembly, arming or firing failed
    #[display("{}", _0)]
    Assembly(AssemblyError),
    /// Terminal input or output failed
    #[display("{}", _0)]
    Console(ConsoleError),
    /// Invalid inventory or runtime configuration
    #[display("{}", _0)]
    Config(ConfigError),
}

/// Trebuchet error with kind discrimination.
#[derive(Debug)]
pub struct TrebuchetError(Box<TrebuchetErrorKind>);

impl TrebuchetError {
    /// Create a new error from a kind.
    pub fn new(kind: TrebuchetErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TrebuchetErrorKind {
        &self.0
    }

    /// Returns the assembly error kind, if this is an assembly error.
    ///
    /// # Examples
    ///
    /// ```
    /// use trebuchet_error::{AssemblyError, AssemblyErrorKind, TrebuchetError};
    ///
    /// let err = TrebuchetError::from(AssemblyError::new(AssemblyErrorKind::Precondition("frame")));
    /// assert_eq!(err.assembly_kind(), Some(&AssemblyErrorKind::Precondition("frame")));
    /// ```
    pub fn assembly_kind(&self) -> Option<&AssemblyErrorKind> {
        match self.kind() {
            TrebuchetErrorKind::Assembly(e) => Some(&e.kind),
            _ => None,
        }
    }
}

impl std::fmt::Display for TrebuchetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Trebuchet Error: {}", self.0)
    }
}

impl std::error::Error for TrebuchetError {}

// Generic From implementation for any type that converts to TrebuchetErrorKind
impl<T> From<T> for TrebuchetError
where
    T: Into<TrebuchetErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for trebuchet operations.
pub type TrebuchetResult<T> = std::result::Result<T, TrebuchetError>;
