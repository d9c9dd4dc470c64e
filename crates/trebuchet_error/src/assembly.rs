//! Assembly error types.

/// Specific failure conditions while building, arming or firing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AssemblyErrorKind {
    /// Not enough beams to build the frame
    #[display("Not enough beams: need {}, found {}", needed, found)]
    InsufficientParts {
        /// Beams required
        needed: usize,
        /// Beams available
        found: usize,
    },
    /// A part is exhausted or absent from the inventory
    #[display("Missing part: {}", _0)]
    MissingPart(String),
    /// The rope is too short for a single attach call
    #[display(
        "Not enough rope left: requested {} meters, {} remaining",
        requested,
        remaining
    )]
    InsufficientRope {
        /// Meters of rope requested
        requested: u32,
        /// Meters of rope left
        remaining: u32,
    },
    /// A step was invoked before the step it depends on
    #[display("Precondition not met: {} is not ready", _0)]
    Precondition(&'static str),
    /// The lever beam cannot reach launch height
    #[display(
        "Lever beam too short: {} meters, needs more than {}",
        length,
        minimum
    )]
    LeverTooShort {
        /// Length of the supplied lever beam
        length: u32,
        /// Length the lever must exceed
        minimum: u32,
    },
    /// Tried to pull an axle from a car that has none left
    #[display("No remaining axles on the {} {}", make, model)]
    NoAxleRemaining {
        /// Car make
        make: String,
        /// Car model
        model: String,
    },
    /// A step was invoked a second time
    #[display("Step already completed: {}", _0)]
    AlreadyCompleted(&'static str),
    /// Passenger names are letters only
    #[display("Invalid passenger name: {:?}", _0)]
    InvalidPassengerName(String),
}

/// Assembly error with location tracking.
///
/// # Examples
///
/// ```
/// use trebuchet_error::{AssemblyError, AssemblyErrorKind};
///
/// let err = AssemblyError::new(AssemblyErrorKind::Precondition("sling"));
/// assert!(format!("{}", err).contains("sling is not ready"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Assembly Error: {} at line {} in {}", kind, line, file)]
pub struct AssemblyError {
    /// The kind of error that occurred
    pub kind: AssemblyErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AssemblyError {
    /// Create a new assembly error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AssemblyErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
