//! JSON string literal decoding with escape sequence handling.

use super::Machine;
use crate::error::DecodeError;
use crate::outcome::ParseOutcome;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringState {
    ExpectOpenQuote,
    InBody,
    InEscape,
    /// Accumulating the four hex digits of a `\uXXXX` escape.
    InUnicodeEscape {
        acc: u32,
        digits: u8,
    },
    Closed,
}

/// Decodes one JSON string literal, quotes included.
///
/// Every intermediate feed reports `Pending`; only the closing quote yields
/// `Done`. Each `\uXXXX` escape produces exactly one code point — surrogate
/// pairs are not composed, and because Rust strings hold Unicode scalar
/// values only, an escape naming a lone surrogate is rejected.
#[derive(Debug)]
pub struct StringMachine {
    state: StringState,
    buf: String,
}

impl StringMachine {
    /// Creates a machine expecting the opening quote.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: StringState::ExpectOpenQuote,
            buf: String::new(),
        }
    }
}

impl Default for StringMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine for StringMachine {
    fn feed(&mut self, c: char) -> ParseOutcome {
        match self.state {
            StringState::ExpectOpenQuote => {
                if c == '"' {
                    self.state = StringState::InBody;
                    ParseOutcome::Pending
                } else {
                    ParseOutcome::Rejected(DecodeError::expected_quote(c))
                }
            }
            StringState::InBody => match c {
                '"' => {
                    self.state = StringState::Closed;
                    ParseOutcome::Done(Value::String(std::mem::take(&mut self.buf)))
                }
                '\\' => {
                    self.state = StringState::InEscape;
                    ParseOutcome::Pending
                }
                other => {
                    self.buf.push(other);
                    ParseOutcome::Pending
                }
            },
            StringState::InEscape => {
                let resolved = match c {
                    '"' => Some('"'),
                    '\\' => Some('\\'),
                    '/' => Some('/'),
                    'b' => Some('\u{0008}'),
                    'f' => Some('\u{000C}'),
                    'n' => Some('\n'),
                    'r' => Some('\r'),
                    't' => Some('\t'),
                    'u' => None,
                    other => {
                        return ParseOutcome::Rejected(DecodeError::invalid_escape(other));
                    }
                };
                match resolved {
                    Some(ch) => {
                        self.buf.push(ch);
                        self.state = StringState::InBody;
                    }
                    None => {
                        self.state = StringState::InUnicodeEscape { acc: 0, digits: 0 };
                    }
                }
                ParseOutcome::Pending
            }
            StringState::InUnicodeEscape { acc, digits } => {
                let Some(digit) = c.to_digit(16) else {
                    return ParseOutcome::Rejected(DecodeError::invalid_unicode_escape(format!(
                        "'{c}' is not a hexadecimal digit"
                    )));
                };
                let acc = acc * 16 + digit;
                if digits == 3 {
                    let Some(ch) = char::from_u32(acc) else {
                        return ParseOutcome::Rejected(DecodeError::invalid_unicode_escape(
                            format!("U+{acc:04X} is not a Unicode scalar value"),
                        ));
                    };
                    self.buf.push(ch);
                    self.state = StringState::InBody;
                } else {
                    self.state = StringState::InUnicodeEscape {
                        acc,
                        digits: digits + 1,
                    };
                }
                ParseOutcome::Pending
            }
            StringState::Closed => ParseOutcome::Rejected(DecodeError::unexpected_character(c)),
        }
    }

    fn finish(&mut self) -> Result<Value, DecodeError> {
        match self.state {
            StringState::ExpectOpenQuote => Err(DecodeError::incomplete_input("string")),
            _ => Err(DecodeError::unterminated_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn feed_all(machine: &mut StringMachine, text: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::Pending;
        for c in text.chars() {
            outcome = machine.feed(c);
            if outcome.is_terminal() {
                break;
            }
        }
        outcome
    }

    #[test]
    fn plain_string_closes_on_quote() {
        let mut machine = StringMachine::new();
        let outcome = feed_all(&mut machine, "\"hello\"");
        assert_eq!(outcome, ParseOutcome::Done(Value::String("hello".into())));
    }

    #[test]
    fn empty_string_is_a_real_value() {
        let mut machine = StringMachine::new();
        let outcome = feed_all(&mut machine, "\"\"");
        assert_eq!(outcome, ParseOutcome::Done(Value::String(String::new())));
    }

    #[test]
    fn standard_escapes_resolve() {
        let mut machine = StringMachine::new();
        let outcome = feed_all(&mut machine, r#""a\"b\\c\/d\ne\tf""#);
        assert_eq!(
            outcome,
            ParseOutcome::Done(Value::String("a\"b\\c/d\ne\tf".into()))
        );
    }

    #[test]
    fn unicode_escape_yields_one_code_point() {
        let mut machine = StringMachine::new();
        let outcome = feed_all(&mut machine, "\"\\u2022\"");
        assert_eq!(outcome, ParseOutcome::Done(Value::String("\u{2022}".into())));
    }

    #[test]
    fn unknown_escape_is_rejected() {
        let mut machine = StringMachine::new();
        match feed_all(&mut machine, r#""\k""#) {
            ParseOutcome::Rejected(err) => assert_eq!(err.kind, ErrorKind::InvalidEscape),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn non_hex_digit_in_unicode_escape_is_rejected() {
        let mut machine = StringMachine::new();
        match feed_all(&mut machine, r#""\u12zq""#) {
            ParseOutcome::Rejected(err) => {
                assert_eq!(err.kind, ErrorKind::InvalidUnicodeEscape);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn lone_surrogate_escape_is_rejected() {
        let mut machine = StringMachine::new();
        match feed_all(&mut machine, r#""\ud800""#) {
            ParseOutcome::Rejected(err) => {
                assert_eq!(err.kind, ErrorKind::InvalidUnicodeEscape);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn missing_open_quote_is_rejected() {
        let mut machine = StringMachine::new();
        match machine.feed('x') {
            ParseOutcome::Rejected(err) => assert_eq!(err.kind, ErrorKind::ExpectedQuote),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_string_fails_to_finish() {
        let mut machine = StringMachine::new();
        feed_all(&mut machine, "\"abc");
        let err = machine.finish().expect_err("open string");
        assert_eq!(err.kind, ErrorKind::UnterminatedString);
    }
}
