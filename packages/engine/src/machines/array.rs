//! JSON array decoding.
//!
//! Each element is decoded by a fresh [`ValueMachine`]. Because numbers have
//! no terminating character, the array must inspect `,`, `]` and whitespace
//! before forwarding them: when the current element's latest outcome is a
//! partial number, those characters finalize the element instead of reaching
//! the child. An element that is still `Pending` (a string, a nested
//! composite) receives every character verbatim and handles its own nesting.

use super::{Machine, ValueMachine, is_json_whitespace};
use crate::config::DecodeConfig;
use crate::error::DecodeError;
use crate::outcome::ParseOutcome;
use crate::value::Value;

#[derive(Debug)]
enum ArrayState {
    ExpectOpenBracket,
    /// Right after `[`: an element or an immediate close may follow.
    ExpectFirstElementOrClose,
    /// After a comma: an element must follow.
    ExpectElement,
    InElement {
        child: Box<ValueMachine>,
        /// Latest partial value from the child, present only while the
        /// element is a number in progress.
        last_partial: Option<Value>,
    },
    ExpectCommaOrClose,
    Closed,
}

/// Decodes one JSON array.
#[derive(Debug)]
pub struct ArrayMachine {
    state: ArrayState,
    elements: Vec<Value>,
    config: DecodeConfig,
    depth: usize,
}

impl ArrayMachine {
    /// Creates a machine expecting `[`, nested `depth` dispatchers deep.
    #[must_use]
    pub fn new(config: DecodeConfig, depth: usize) -> Self {
        Self {
            state: ArrayState::ExpectOpenBracket,
            elements: Vec::new(),
            config,
            depth,
        }
    }

    /// Spawns the per-element dispatcher and feeds it the first character.
    fn start_element(&mut self, c: char) -> ParseOutcome {
        let mut child = ValueMachine::with_depth(self.config, self.depth + 1);
        match child.feed(c) {
            ParseOutcome::Pending => {
                self.state = ArrayState::InElement {
                    child: Box::new(child),
                    last_partial: None,
                };
                ParseOutcome::Pending
            }
            ParseOutcome::Partial(value) => {
                self.state = ArrayState::InElement {
                    child: Box::new(child),
                    last_partial: Some(value),
                };
                ParseOutcome::Pending
            }
            ParseOutcome::Done(value) => {
                self.elements.push(value);
                self.state = ArrayState::ExpectCommaOrClose;
                ParseOutcome::Pending
            }
            ParseOutcome::Rejected(err) => ParseOutcome::Rejected(err),
        }
    }

    fn close(&mut self) -> ParseOutcome {
        self.state = ArrayState::Closed;
        ParseOutcome::Done(Value::Array(std::mem::take(&mut self.elements)))
    }
}

impl Machine for ArrayMachine {
    fn feed(&mut self, c: char) -> ParseOutcome {
        let state = std::mem::replace(&mut self.state, ArrayState::Closed);
        match state {
            ArrayState::ExpectOpenBracket => {
                if c == '[' {
                    self.state = ArrayState::ExpectFirstElementOrClose;
                    ParseOutcome::Pending
                } else {
                    ParseOutcome::Rejected(DecodeError::unexpected_character(c))
                }
            }
            ArrayState::ExpectFirstElementOrClose => {
                if is_json_whitespace(c) {
                    self.state = ArrayState::ExpectFirstElementOrClose;
                    ParseOutcome::Pending
                } else if c == ']' {
                    self.close()
                } else if c == ',' {
                    ParseOutcome::Rejected(DecodeError::unexpected_close_or_comma(c))
                } else {
                    self.start_element(c)
                }
            }
            ArrayState::ExpectElement => {
                if is_json_whitespace(c) {
                    self.state = ArrayState::ExpectElement;
                    ParseOutcome::Pending
                } else if c == ']' {
                    ParseOutcome::Rejected(DecodeError::trailing_comma())
                } else if c == ',' {
                    ParseOutcome::Rejected(DecodeError::unexpected_close_or_comma(c))
                } else {
                    self.start_element(c)
                }
            }
            ArrayState::InElement {
                mut child,
                mut last_partial,
            } => {
                // Delimiter inspection happens before the child sees the
                // character: a partial number is finalized by `,`, `]` or
                // whitespace, never fed them.
                if last_partial.is_some() && (c == ',' || c == ']' || is_json_whitespace(c)) {
                    if let Some(value) = last_partial.take() {
                        self.elements.push(value);
                    }
                    return match c {
                        ',' => {
                            self.state = ArrayState::ExpectElement;
                            ParseOutcome::Pending
                        }
                        ']' => self.close(),
                        _ => {
                            self.state = ArrayState::ExpectCommaOrClose;
                            ParseOutcome::Pending
                        }
                    };
                }
                match child.feed(c) {
                    ParseOutcome::Pending => {
                        self.state = ArrayState::InElement {
                            child,
                            last_partial: None,
                        };
                        ParseOutcome::Pending
                    }
                    ParseOutcome::Partial(value) => {
                        self.state = ArrayState::InElement {
                            child,
                            last_partial: Some(value),
                        };
                        ParseOutcome::Pending
                    }
                    ParseOutcome::Done(value) => {
                        self.elements.push(value);
                        self.state = ArrayState::ExpectCommaOrClose;
                        ParseOutcome::Pending
                    }
                    ParseOutcome::Rejected(err) => ParseOutcome::Rejected(err),
                }
            }
            ArrayState::ExpectCommaOrClose => {
                if is_json_whitespace(c) {
                    self.state = ArrayState::ExpectCommaOrClose;
                    ParseOutcome::Pending
                } else if c == ',' {
                    self.state = ArrayState::ExpectElement;
                    ParseOutcome::Pending
                } else if c == ']' {
                    self.close()
                } else {
                    ParseOutcome::Rejected(DecodeError::unexpected_character(c))
                }
            }
            ArrayState::Closed => ParseOutcome::Rejected(DecodeError::unexpected_character(c)),
        }
    }

    fn finish(&mut self) -> Result<Value, DecodeError> {
        Err(DecodeError::incomplete_input("array"))
    }
}
