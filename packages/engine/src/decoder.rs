//! Decode driver.
//!
//! Feeds a complete code-point sequence to one fresh dispatcher and maps the
//! final machine state to a result. The driver owns the two jobs no machine
//! can do for itself: stripping whitespace around the document (whitespace
//! inside structural contexts belongs to the array and object machines) and
//! deciding what end of input means — a partial number finalizes, anything
//! else still pending is incomplete.

use log::{debug, trace};

use crate::config::DecodeConfig;
use crate::error::{DecodeError, DecodeResult};
use crate::machines::{Machine, ValueMachine, is_json_whitespace};
use crate::outcome::ParseOutcome;
use crate::value::Value;

/// Decodes one JSON text with the default configuration.
///
/// # Errors
///
/// Returns the terminal error of the first rejection, stamped with the
/// absolute character offset. Input that ends before the value completes
/// yields [`crate::ErrorKind::IncompleteInput`] (or
/// [`crate::ErrorKind::UnterminatedString`] inside a string literal).
pub fn decode(input: &str) -> DecodeResult<Value> {
    decode_with(input, DecodeConfig::default())
}

/// Decodes one JSON text.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_with(input: &str, config: DecodeConfig) -> DecodeResult<Value> {
    let chars: Vec<char> = input.chars().collect();

    let Some(start) = chars.iter().position(|c| !is_json_whitespace(*c)) else {
        return Err(DecodeError::incomplete_input("document"));
    };
    let end = match chars.iter().rposition(|c| !is_json_whitespace(*c)) {
        Some(end) => end,
        None => start,
    };
    trace!("decoding {} code points", end - start + 1);

    let mut machine = ValueMachine::new(config);
    let mut pos = start;
    while pos <= end {
        match machine.feed(chars[pos]) {
            ParseOutcome::Pending | ParseOutcome::Partial(_) => pos += 1,
            ParseOutcome::Done(value) => {
                // Whatever follows a grammar-final value cannot belong to
                // it; only trailing whitespace was stripped up front.
                return match (pos + 1..=end).find(|&i| !is_json_whitespace(chars[i])) {
                    None => Ok(value),
                    Some(extra) => {
                        let err = DecodeError::trailing_data(chars[extra]).at_offset(extra);
                        debug!("decode failed: {err}");
                        Err(err)
                    }
                };
            }
            ParseOutcome::Rejected(err) => {
                let err = err.at_offset(pos);
                debug!("decode failed: {err}");
                return Err(err);
            }
        }
    }

    // Input exhausted while Pending or Partial: end of input acts as the
    // delimiter that numbers never get, and as a hard stop for everything
    // else.
    match machine.finish() {
        Ok(value) => Ok(value),
        Err(err) => {
            let err = err.at_offset(end + 1);
            debug!("decode failed: {err}");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn scalar_documents_decode() {
        assert_eq!(decode("null"), Ok(Value::Null));
        assert_eq!(decode("false"), Ok(Value::Bool(false)));
        assert_eq!(decode("0"), Ok(Value::Number(0.0)));
    }

    #[test]
    fn surrounding_whitespace_is_stripped() {
        assert_eq!(decode("  \t\n 42 \r\n"), Ok(Value::Number(42.0)));
    }

    #[test]
    fn empty_input_is_incomplete() {
        assert_eq!(decode("").map_err(|e| e.kind), Err(ErrorKind::IncompleteInput));
        assert_eq!(
            decode("   ").map_err(|e| e.kind),
            Err(ErrorKind::IncompleteInput)
        );
    }

    #[test]
    fn truncated_document_is_incomplete() {
        assert_eq!(
            decode("[1, 2").map_err(|e| e.kind),
            Err(ErrorKind::IncompleteInput)
        );
        assert_eq!(
            decode("tru").map_err(|e| e.kind),
            Err(ErrorKind::IncompleteInput)
        );
    }

    #[test]
    fn unterminated_string_is_reported_as_such() {
        assert_eq!(
            decode("\"abc").map_err(|e| e.kind),
            Err(ErrorKind::UnterminatedString)
        );
    }

    #[test]
    fn trailing_data_is_rejected_with_its_offset() {
        let err = decode("[1] x").expect_err("trailing data");
        assert_eq!(err.kind, ErrorKind::UnexpectedCharacter);
        assert_eq!(err.position, Some(4));
    }

    #[test]
    fn rejections_carry_the_offending_offset() {
        let err = decode("[1,]").expect_err("trailing comma");
        assert_eq!(err.kind, ErrorKind::TrailingComma);
        assert_eq!(err.position, Some(3));
    }
}
