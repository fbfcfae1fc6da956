//! Tagged result of feeding one code point to a machine.

use crate::error::DecodeError;
use crate::value::Value;

/// Outcome of one `feed` call.
///
/// `Pending` and `Partial` are distinct variants rather than sentinel values,
/// so legitimate decoded results such as `null`, `false`, `0`, `""`, `[]` and
/// `{}` can never be mistaken for "no result yet".
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The machine consumed the input but has no value yet.
    Pending,
    /// A provisional value that may still change with more input.
    ///
    /// Only number parsing produces this: JSON numbers carry no terminator,
    /// so every accepted digit re-interprets the digits seen so far.
    Partial(Value),
    /// The machine reached a grammar-final state and must not be fed again.
    Done(Value),
    /// The input is invalid for this machine; the machine is permanently dead.
    Rejected(DecodeError),
}

impl ParseOutcome {
    /// Whether the machine that reported this outcome may be fed again.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, ParseOutcome::Done(_) | ParseOutcome::Rejected(_))
    }
}
