//! Core error types for incremental JSON decoding.

use thiserror::Error;

/// Decode failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character the current grammar state cannot accept.
    UnexpectedCharacter,
    /// A string was expected but did not open with a quote.
    ExpectedQuote,
    /// Input ended inside a string literal.
    UnterminatedString,
    /// Unrecognized backslash escape in a string.
    InvalidEscape,
    /// Malformed `\uXXXX` escape.
    InvalidUnicodeEscape,
    /// Number text violating the JSON number grammar.
    InvalidNumberFormat,
    /// Digit following a bare `0` integer part.
    LeadingZeroViolation,
    /// Object member without a `:` separator.
    MissingColon,
    /// Comma with no element or member following it.
    TrailingComma,
    /// Comma or close delimiter where a value was required.
    UnexpectedCloseOrComma,
    /// No grammar alternative accepts the first character of a value.
    NoMatchingGrammar,
    /// Input ended before the value completed.
    IncompleteInput,
    /// Value nesting exceeded the configured depth limit.
    RecursionLimitExceeded,
}

/// Terminal decode error.
///
/// The first error aborts the whole decode; there is no partial-tree
/// recovery or skip-and-continue path. `position` is the absolute character
/// offset of the offending input, stamped by the decode driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DecodeError {
    /// Failure category.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
    /// Absolute character offset of the offending input, when known.
    pub position: Option<usize>,
}

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

impl DecodeError {
    /// Creates an error from a kind and message.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            position: None,
        }
    }

    /// Stamps the absolute character offset, keeping the first stamp if the
    /// error already carries one.
    #[must_use]
    pub fn at_offset(mut self, position: usize) -> Self {
        if self.position.is_none() {
            self.message = format!("{} at offset {position}", self.message);
            self.position = Some(position);
        }
        self
    }

    pub fn unexpected_character(c: char) -> Self {
        Self::new(
            ErrorKind::UnexpectedCharacter,
            format!("Unexpected character: '{c}'"),
        )
    }

    pub fn trailing_data(c: char) -> Self {
        Self::new(
            ErrorKind::UnexpectedCharacter,
            format!("Trailing data after value: '{c}'"),
        )
    }

    pub fn expected_quote(c: char) -> Self {
        Self::new(
            ErrorKind::ExpectedQuote,
            format!("Expected '\"' to open a string, found '{c}'"),
        )
    }

    #[must_use]
    pub fn unterminated_string() -> Self {
        Self::new(ErrorKind::UnterminatedString, "Unterminated string")
    }

    pub fn invalid_escape(c: char) -> Self {
        Self::new(
            ErrorKind::InvalidEscape,
            format!("Invalid string escape: '\\{c}'"),
        )
    }

    pub fn invalid_unicode_escape(detail: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidUnicodeEscape,
            format!("Invalid unicode escape: {}", detail.into()),
        )
    }

    pub fn invalid_number_character(c: char) -> Self {
        Self::new(
            ErrorKind::InvalidNumberFormat,
            format!("Unexpected character in number: '{c}'"),
        )
    }

    pub fn invalid_number(text: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidNumberFormat,
            format!("Invalid number: '{}'", text.into()),
        )
    }

    pub fn leading_zero(c: char) -> Self {
        Self::new(
            ErrorKind::LeadingZeroViolation,
            format!("Digit '{c}' after leading zero"),
        )
    }

    pub fn missing_colon(c: char) -> Self {
        Self::new(
            ErrorKind::MissingColon,
            format!("Expected ':' between member name and value, found '{c}'"),
        )
    }

    #[must_use]
    pub fn trailing_comma() -> Self {
        Self::new(
            ErrorKind::TrailingComma,
            "Trailing comma before close delimiter",
        )
    }

    pub fn unexpected_close_or_comma(c: char) -> Self {
        Self::new(
            ErrorKind::UnexpectedCloseOrComma,
            format!("Unexpected '{c}' where a value was required"),
        )
    }

    pub fn no_matching_grammar(c: char) -> Self {
        Self::new(
            ErrorKind::NoMatchingGrammar,
            format!("No JSON value can start with '{c}'"),
        )
    }

    pub fn incomplete_input(what: &str) -> Self {
        Self::new(
            ErrorKind::IncompleteInput,
            format!("Input ended with an incomplete {what}"),
        )
    }

    pub fn recursion_limit(limit: usize) -> Self {
        Self::new(
            ErrorKind::RecursionLimitExceeded,
            format!("Value nesting exceeds the configured limit of {limit}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_offset_stamps_once() {
        let err = DecodeError::unexpected_character('x').at_offset(7);
        assert_eq!(err.position, Some(7));
        assert!(err.message.ends_with("at offset 7"));

        let restamped = err.clone().at_offset(9);
        assert_eq!(restamped.position, Some(7));
        assert_eq!(restamped.message, err.message);
    }

    #[test]
    fn constructors_set_the_matching_kind() {
        assert_eq!(
            DecodeError::leading_zero('1').kind,
            ErrorKind::LeadingZeroViolation
        );
        assert_eq!(
            DecodeError::trailing_comma().kind,
            ErrorKind::TrailingComma
        );
        assert_eq!(
            DecodeError::no_matching_grammar('.').kind,
            ErrorKind::NoMatchingGrammar
        );
    }
}
