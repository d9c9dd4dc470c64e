//! Passenger names.

use trebuchet_error::{AssemblyError, AssemblyErrorKind};

/// Whether `name` is usable as a passenger name: one or more ASCII letters.
///
/// # Examples
///
/// ```
/// use trebuchet_core::is_valid_name;
///
/// assert!(is_valid_name("Bob"));
/// assert!(!is_valid_name("B0b"));
/// assert!(!is_valid_name(""));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}

/// Whoever is riding in the sling. Stored capitalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}", _0)]
pub struct Passenger(String);

impl Passenger {
    /// Validates and capitalizes a passenger name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPassengerName` unless the name is letters only.
    pub fn parse(name: &str) -> Result<Self, AssemblyError> {
        if !is_valid_name(name) {
            return Err(AssemblyError::new(
                AssemblyErrorKind::InvalidPassengerName(name.to_string()),
            ));
        }

        let mut chars = name.chars();
        let capitalized = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        };
        Ok(Self(capitalized))
    }

    /// The capitalized name.
    pub fn name(&self) -> &str {
        &self.0
    }
}
