//! Error types for frameseq.
//!
//! The absence of a sequence is a normal outcome and is modeled as
//! `Option::None`, not an error. The only failure mode is caller misuse
//! at the input boundary.

/// Error type for frameseq.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type alias using the frameseq Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_input("bad file name");
        assert_eq!(err.to_string(), "Invalid input: bad file name");
    }

    #[test]
    fn test_error_string_into() {
        let err = Error::invalid_input(String::from("oops"));
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
