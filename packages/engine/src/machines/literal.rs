//! Fixed-literal matching for `true`, `false` and `null`.

use super::Machine;
use crate::error::DecodeError;
use crate::outcome::ParseOutcome;
use crate::value::Value;

/// Matches one fixed literal token character by character.
///
/// Constructed with the target literal and the value it produces; the only
/// state is the cursor into the unconsumed remainder of the literal.
#[derive(Debug)]
pub struct LiteralMachine {
    remaining: &'static str,
    value: Value,
}

impl LiteralMachine {
    /// Creates a matcher for `literal` producing `value` on success.
    #[must_use]
    pub fn new(literal: &'static str, value: Value) -> Self {
        Self {
            remaining: literal,
            value,
        }
    }
}

impl Machine for LiteralMachine {
    fn feed(&mut self, c: char) -> ParseOutcome {
        match self.remaining.chars().next() {
            Some(expected) if expected == c => {
                self.remaining = &self.remaining[expected.len_utf8()..];
                if self.remaining.is_empty() {
                    ParseOutcome::Done(self.value.clone())
                } else {
                    ParseOutcome::Pending
                }
            }
            _ => ParseOutcome::Rejected(DecodeError::unexpected_character(c)),
        }
    }

    fn finish(&mut self) -> Result<Value, DecodeError> {
        Err(DecodeError::incomplete_input("literal"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn matches_the_literal_one_character_at_a_time() {
        let mut machine = LiteralMachine::new("true", Value::Bool(true));
        assert_eq!(machine.feed('t'), ParseOutcome::Pending);
        assert_eq!(machine.feed('r'), ParseOutcome::Pending);
        assert_eq!(machine.feed('u'), ParseOutcome::Pending);
        assert_eq!(machine.feed('e'), ParseOutcome::Done(Value::Bool(true)));
    }

    #[test]
    fn rejects_on_first_mismatch() {
        let mut machine = LiteralMachine::new("null", Value::Null);
        assert_eq!(machine.feed('n'), ParseOutcome::Pending);
        match machine.feed('o') {
            ParseOutcome::Rejected(err) => {
                assert_eq!(err.kind, ErrorKind::UnexpectedCharacter);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn truncated_literal_fails_to_finish() {
        let mut machine = LiteralMachine::new("false", Value::Bool(false));
        assert_eq!(machine.feed('f'), ParseOutcome::Pending);
        assert_eq!(machine.feed('a'), ParseOutcome::Pending);
        let err = machine.finish().expect_err("truncated literal");
        assert_eq!(err.kind, ErrorKind::IncompleteInput);
    }
}
