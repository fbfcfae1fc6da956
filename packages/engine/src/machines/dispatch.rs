//! Grammar dispatch: one machine per alternative, narrowed on the first
//! code point.

use log::trace;

use super::{
    ArrayMachine, LiteralMachine, Machine, NumberMachine, ObjectMachine, StringMachine,
};
use crate::config::DecodeConfig;
use crate::error::DecodeError;
use crate::outcome::ParseOutcome;
use crate::value::Value;

#[derive(Debug)]
enum DispatchState {
    /// No input seen yet; all grammar alternatives are still possible.
    Start,
    /// A single alternative survived the first code point; everything else
    /// is forwarded to it verbatim.
    Forward(Box<dyn Machine>),
}

/// Decodes one arbitrary JSON value.
///
/// On the first fed code point every grammar alternative is instantiated and
/// fed the same character; alternatives that reject are discarded and the
/// first acceptor in enumeration order (number, object, array, string,
/// `null`, `false`, `true`) becomes the survivor. The JSON grammar keeps the
/// alternatives distinguishable by first character, so at most one accepts;
/// the fixed order is the deterministic tie-break. Subsequent input goes
/// exclusively to the survivor and its outcomes are echoed as this machine's
/// own.
#[derive(Debug)]
pub struct ValueMachine {
    state: DispatchState,
    config: DecodeConfig,
    depth: usize,
}

impl ValueMachine {
    /// Creates a top-level dispatcher.
    #[must_use]
    pub fn new(config: DecodeConfig) -> Self {
        Self::with_depth(config, 0)
    }

    /// Creates a dispatcher nested `depth` levels inside composite values.
    #[must_use]
    pub(crate) fn with_depth(config: DecodeConfig, depth: usize) -> Self {
        Self {
            state: DispatchState::Start,
            config,
            depth,
        }
    }

    fn alternatives(&self) -> Vec<Box<dyn Machine>> {
        vec![
            Box::new(NumberMachine::new()),
            Box::new(ObjectMachine::new(self.config, self.depth)),
            Box::new(ArrayMachine::new(self.config, self.depth)),
            Box::new(StringMachine::new()),
            Box::new(LiteralMachine::new("null", Value::Null)),
            Box::new(LiteralMachine::new("false", Value::Bool(false))),
            Box::new(LiteralMachine::new("true", Value::Bool(true))),
        ]
    }
}

impl Machine for ValueMachine {
    fn feed(&mut self, c: char) -> ParseOutcome {
        if let DispatchState::Forward(survivor) = &mut self.state {
            return survivor.feed(c);
        }
        if self.depth >= self.config.max_depth {
            return ParseOutcome::Rejected(DecodeError::recursion_limit(self.config.max_depth));
        }
        for mut candidate in self.alternatives() {
            match candidate.feed(c) {
                ParseOutcome::Rejected(_) => {}
                outcome => {
                    trace!("value dispatch narrowed on {c:?} at depth {}", self.depth);
                    self.state = DispatchState::Forward(candidate);
                    return outcome;
                }
            }
        }
        ParseOutcome::Rejected(DecodeError::no_matching_grammar(c))
    }

    fn finish(&mut self) -> Result<Value, DecodeError> {
        match &mut self.state {
            DispatchState::Start => Err(DecodeError::incomplete_input("value")),
            DispatchState::Forward(survivor) => survivor.finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn feed_all(machine: &mut ValueMachine, text: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::Pending;
        for c in text.chars() {
            outcome = machine.feed(c);
            if outcome.is_terminal() {
                break;
            }
        }
        outcome
    }

    fn machine() -> ValueMachine {
        ValueMachine::new(DecodeConfig::default())
    }

    #[test]
    fn first_character_selects_the_survivor() {
        let mut m = machine();
        assert_eq!(feed_all(&mut m, "null"), ParseOutcome::Done(Value::Null));

        let mut m = machine();
        assert_eq!(
            feed_all(&mut m, "false"),
            ParseOutcome::Done(Value::Bool(false))
        );

        let mut m = machine();
        assert_eq!(
            feed_all(&mut m, "\"s\""),
            ParseOutcome::Done(Value::String("s".into()))
        );

        let mut m = machine();
        assert_eq!(
            m.feed('7'),
            ParseOutcome::Partial(Value::Number(7.0))
        );
    }

    #[test]
    fn no_alternative_accepting_rejects_the_value() {
        let mut m = machine();
        match m.feed('.') {
            ParseOutcome::Rejected(err) => assert_eq!(err.kind, ErrorKind::NoMatchingGrammar),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn survivor_errors_are_echoed() {
        let mut m = machine();
        match feed_all(&mut m, "nuXl") {
            ParseOutcome::Rejected(err) => {
                assert_eq!(err.kind, ErrorKind::UnexpectedCharacter);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn depth_guard_rejects_at_the_limit() {
        let config = DecodeConfig { max_depth: 2 };
        let mut m = ValueMachine::new(config);
        // Depths: the outer array's elements dispatch at 1, the inner
        // array's elements at 2, which trips the limit.
        match feed_all(&mut m, "[[1]]") {
            ParseOutcome::Rejected(err) => {
                assert_eq!(err.kind, ErrorKind::RecursionLimitExceeded);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn depth_guard_allows_nesting_below_the_limit() {
        let config = DecodeConfig { max_depth: 2 };
        let mut m = ValueMachine::new(config);
        assert_eq!(
            feed_all(&mut m, "[[]]"),
            ParseOutcome::Done(Value::Array(vec![Value::Array(vec![])]))
        );
    }
}
