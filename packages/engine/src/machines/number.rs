//! JSON number decoding.
//!
//! Numbers are the one grammar rule without a terminating character, so this
//! machine can never decide on its own that it is finished. Every accepted
//! digit yields `Partial` with the number parsed so far; the caller stops
//! feeding when it sees a structural delimiter (or end of input) and accepts
//! the last partial value as final.

use super::Machine;
use crate::error::DecodeError;
use crate::outcome::ParseOutcome;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Start,
    /// Leading minus consumed, integer part not started.
    Minus,
    /// Integer part is a bare `0`; any further digit violates the
    /// leading-zero rule.
    IntZero,
    /// Integer part started with a nonzero digit.
    IntDigits,
    /// Decimal point consumed, no fraction digit yet.
    FractionDot,
    FractionDigits,
    /// `e` or `E` consumed, neither sign nor digit yet.
    ExponentMark,
    ExponentSign,
    ExponentDigits,
}

impl NumberState {
    /// States in which the accumulated text is a complete JSON number.
    fn has_value(self) -> bool {
        matches!(
            self,
            NumberState::IntZero
                | NumberState::IntDigits
                | NumberState::FractionDigits
                | NumberState::ExponentDigits
        )
    }
}

/// Decodes one JSON number per the grammar
/// `-? int ('.' frac)? (('e'|'E') ('+'|'-')? exp)?`.
#[derive(Debug)]
pub struct NumberMachine {
    state: NumberState,
    buf: String,
}

impl NumberMachine {
    /// Creates a machine expecting the sign or first digit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: NumberState::Start,
            buf: String::new(),
        }
    }

    /// Interprets the accumulated digits immediately, as a partial outcome.
    fn partial(&self) -> ParseOutcome {
        match self.buf.parse::<f64>() {
            Ok(n) => ParseOutcome::Partial(Value::Number(n)),
            Err(_) => ParseOutcome::Rejected(DecodeError::invalid_number(self.buf.clone())),
        }
    }

    fn accept(&mut self, c: char, next: NumberState) -> ParseOutcome {
        self.buf.push(c);
        self.state = next;
        if next.has_value() {
            self.partial()
        } else {
            ParseOutcome::Pending
        }
    }
}

impl Default for NumberMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine for NumberMachine {
    fn feed(&mut self, c: char) -> ParseOutcome {
        match (self.state, c) {
            (NumberState::Start, '-') => self.accept(c, NumberState::Minus),
            (NumberState::Start | NumberState::Minus, '0') => self.accept(c, NumberState::IntZero),
            (NumberState::Start | NumberState::Minus, '1'..='9') => {
                self.accept(c, NumberState::IntDigits)
            }
            (NumberState::IntZero, '0'..='9') => {
                ParseOutcome::Rejected(DecodeError::leading_zero(c))
            }
            (NumberState::IntDigits, '0'..='9') => self.accept(c, NumberState::IntDigits),
            (NumberState::IntZero | NumberState::IntDigits, '.') => {
                self.accept(c, NumberState::FractionDot)
            }
            (NumberState::IntZero | NumberState::IntDigits, 'e' | 'E') => {
                self.accept(c, NumberState::ExponentMark)
            }
            (NumberState::FractionDot | NumberState::FractionDigits, '0'..='9') => {
                self.accept(c, NumberState::FractionDigits)
            }
            (NumberState::FractionDigits, 'e' | 'E') => self.accept(c, NumberState::ExponentMark),
            (NumberState::ExponentMark, '+' | '-') => self.accept(c, NumberState::ExponentSign),
            (
                NumberState::ExponentMark | NumberState::ExponentSign | NumberState::ExponentDigits,
                '0'..='9',
            ) => self.accept(c, NumberState::ExponentDigits),
            _ => ParseOutcome::Rejected(DecodeError::invalid_number_character(c)),
        }
    }

    fn finish(&mut self) -> Result<Value, DecodeError> {
        if self.state == NumberState::Start {
            return Err(DecodeError::incomplete_input("number"));
        }
        if !self.state.has_value() {
            return Err(DecodeError::invalid_number(self.buf.clone()));
        }
        self.buf
            .parse::<f64>()
            .map(Value::Number)
            .map_err(|_| DecodeError::invalid_number(self.buf.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn reject_kind(outcome: ParseOutcome) -> ErrorKind {
        match outcome {
            ParseOutcome::Rejected(err) => err.kind,
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn partials_track_the_digits_seen_so_far() {
        let mut machine = NumberMachine::new();
        assert_eq!(machine.feed('1'), ParseOutcome::Partial(Value::Number(1.0)));
        assert_eq!(machine.feed('2'), ParseOutcome::Partial(Value::Number(12.0)));
        assert_eq!(machine.feed('.'), ParseOutcome::Pending);
        assert_eq!(machine.feed('4'), ParseOutcome::Partial(Value::Number(12.4)));
        assert_eq!(
            machine.feed('5'),
            ParseOutcome::Partial(Value::Number(12.45))
        );
        assert_eq!(machine.finish(), Ok(Value::Number(12.45)));
    }

    #[test]
    fn bare_zero_finishes_as_zero() {
        let mut machine = NumberMachine::new();
        assert_eq!(machine.feed('0'), ParseOutcome::Partial(Value::Number(0.0)));
        assert_eq!(machine.finish(), Ok(Value::Number(0.0)));
    }

    #[test]
    fn digit_after_leading_zero_is_rejected() {
        let mut machine = NumberMachine::new();
        machine.feed('0');
        assert_eq!(reject_kind(machine.feed('1')), ErrorKind::LeadingZeroViolation);
    }

    #[test]
    fn negative_numbers_carry_the_sign() {
        let mut machine = NumberMachine::new();
        assert_eq!(machine.feed('-'), ParseOutcome::Pending);
        assert_eq!(
            machine.feed('3'),
            ParseOutcome::Partial(Value::Number(-3.0))
        );
        assert_eq!(machine.finish(), Ok(Value::Number(-3.0)));
    }

    #[test]
    fn exponent_accepts_either_sign() {
        let mut machine = NumberMachine::new();
        for c in "2E+3".chars() {
            machine.feed(c);
        }
        assert_eq!(machine.finish(), Ok(Value::Number(2000.0)));

        let mut machine = NumberMachine::new();
        for c in "25e-1".chars() {
            machine.feed(c);
        }
        assert_eq!(machine.finish(), Ok(Value::Number(2.5)));
    }

    #[test]
    fn fraction_in_exponent_is_rejected() {
        let mut machine = NumberMachine::new();
        for c in "1e-0".chars() {
            machine.feed(c);
        }
        assert_eq!(reject_kind(machine.feed('.')), ErrorKind::InvalidNumberFormat);
    }

    #[test]
    fn double_decimal_point_is_rejected() {
        let mut machine = NumberMachine::new();
        for c in "1.5".chars() {
            machine.feed(c);
        }
        assert_eq!(reject_kind(machine.feed('.')), ErrorKind::InvalidNumberFormat);
    }

    #[test]
    fn dangling_exponent_fails_to_finish() {
        let mut machine = NumberMachine::new();
        for c in "0.01e".chars() {
            machine.feed(c);
        }
        let err = machine.finish().expect_err("dangling exponent");
        assert_eq!(err.kind, ErrorKind::InvalidNumberFormat);
    }

    #[test]
    fn bare_minus_fails_to_finish() {
        let mut machine = NumberMachine::new();
        machine.feed('-');
        let err = machine.finish().expect_err("bare minus");
        assert_eq!(err.kind, ErrorKind::InvalidNumberFormat);
    }

    #[test]
    fn leading_dot_is_rejected_immediately() {
        let mut machine = NumberMachine::new();
        assert_eq!(reject_kind(machine.feed('.')), ErrorKind::InvalidNumberFormat);
    }
}
