//! Error types for deck construction.

use thiserror::Error;

/// Result type for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors that can occur while building a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The requested deck configuration is not one of the known variants.
    #[error("invalid deck variant: \"{0}\"")]
    InvalidVariant(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_variant_message() {
        let err = DeckError::InvalidVariant("Tiny Deck".into());
        assert_eq!(err.to_string(), "invalid deck variant: \"Tiny Deck\"");
    }
}
