//! JSON object decoding.
//!
//! Each member is `ws* string ws* ':' ws* value`. Keys come from a
//! [`StringMachine`], values from a fresh [`ValueMachine`], with the same
//! delimiter-inspection rule as arrays: `,` and `}` finalize a partial
//! number and are only forwarded to children that have no value yet.
//! Duplicate keys follow last-write-wins.

use super::{Machine, StringMachine, ValueMachine, is_json_whitespace};
use crate::config::DecodeConfig;
use crate::error::DecodeError;
use crate::outcome::ParseOutcome;
use crate::value::{ObjectMap, Value};

#[derive(Debug)]
enum ObjectState {
    ExpectOpenBrace,
    /// Right after `{`: a member or an immediate close may follow.
    ExpectKeyOrClose,
    /// After a comma: a member must follow.
    ExpectKey,
    InKey {
        key_machine: StringMachine,
    },
    ExpectColon {
        key: String,
    },
    ExpectValue {
        key: String,
    },
    InValue {
        key: String,
        child: Box<ValueMachine>,
        /// Latest partial value from the child, present only while the
        /// member value is a number in progress.
        last_partial: Option<Value>,
    },
    ExpectCommaOrClose,
    Closed,
}

/// Decodes one JSON object.
#[derive(Debug)]
pub struct ObjectMachine {
    state: ObjectState,
    members: ObjectMap,
    config: DecodeConfig,
    depth: usize,
}

impl ObjectMachine {
    /// Creates a machine expecting `{`, nested `depth` dispatchers deep.
    #[must_use]
    pub fn new(config: DecodeConfig, depth: usize) -> Self {
        Self {
            state: ObjectState::ExpectOpenBrace,
            members: ObjectMap::new(),
            config,
            depth,
        }
    }

    /// Spawns the key machine and feeds it the first character, which must
    /// open a string.
    fn start_key(&mut self, c: char) -> ParseOutcome {
        let mut key_machine = StringMachine::new();
        match key_machine.feed(c) {
            ParseOutcome::Pending => {
                self.state = ObjectState::InKey { key_machine };
                ParseOutcome::Pending
            }
            ParseOutcome::Rejected(err) => ParseOutcome::Rejected(err),
            // A string cannot complete on its opening character.
            ParseOutcome::Done(_) | ParseOutcome::Partial(_) => {
                ParseOutcome::Rejected(DecodeError::expected_quote(c))
            }
        }
    }

    /// Spawns the per-member-value dispatcher and feeds it the first
    /// character.
    fn start_value(&mut self, key: String, c: char) -> ParseOutcome {
        let mut child = ValueMachine::with_depth(self.config, self.depth + 1);
        match child.feed(c) {
            ParseOutcome::Pending => {
                self.state = ObjectState::InValue {
                    key,
                    child: Box::new(child),
                    last_partial: None,
                };
                ParseOutcome::Pending
            }
            ParseOutcome::Partial(value) => {
                self.state = ObjectState::InValue {
                    key,
                    child: Box::new(child),
                    last_partial: Some(value),
                };
                ParseOutcome::Pending
            }
            ParseOutcome::Done(value) => {
                self.members.insert(key, value);
                self.state = ObjectState::ExpectCommaOrClose;
                ParseOutcome::Pending
            }
            ParseOutcome::Rejected(err) => ParseOutcome::Rejected(err),
        }
    }

    fn close(&mut self) -> ParseOutcome {
        self.state = ObjectState::Closed;
        ParseOutcome::Done(Value::Object(std::mem::take(&mut self.members)))
    }
}

impl Machine for ObjectMachine {
    fn feed(&mut self, c: char) -> ParseOutcome {
        let state = std::mem::replace(&mut self.state, ObjectState::Closed);
        match state {
            ObjectState::ExpectOpenBrace => {
                if c == '{' {
                    self.state = ObjectState::ExpectKeyOrClose;
                    ParseOutcome::Pending
                } else {
                    ParseOutcome::Rejected(DecodeError::unexpected_character(c))
                }
            }
            ObjectState::ExpectKeyOrClose => {
                if is_json_whitespace(c) {
                    self.state = ObjectState::ExpectKeyOrClose;
                    ParseOutcome::Pending
                } else if c == '}' {
                    self.close()
                } else if c == ',' {
                    ParseOutcome::Rejected(DecodeError::unexpected_close_or_comma(c))
                } else {
                    self.start_key(c)
                }
            }
            ObjectState::ExpectKey => {
                if is_json_whitespace(c) {
                    self.state = ObjectState::ExpectKey;
                    ParseOutcome::Pending
                } else if c == '}' {
                    ParseOutcome::Rejected(DecodeError::trailing_comma())
                } else if c == ',' {
                    ParseOutcome::Rejected(DecodeError::unexpected_close_or_comma(c))
                } else {
                    self.start_key(c)
                }
            }
            ObjectState::InKey { mut key_machine } => match key_machine.feed(c) {
                ParseOutcome::Pending => {
                    self.state = ObjectState::InKey { key_machine };
                    ParseOutcome::Pending
                }
                ParseOutcome::Done(Value::String(key)) => {
                    self.state = ObjectState::ExpectColon { key };
                    ParseOutcome::Pending
                }
                ParseOutcome::Rejected(err) => ParseOutcome::Rejected(err),
                // A string machine only ever completes with a string.
                ParseOutcome::Done(_) | ParseOutcome::Partial(_) => {
                    ParseOutcome::Rejected(DecodeError::expected_quote(c))
                }
            },
            ObjectState::ExpectColon { key } => {
                if is_json_whitespace(c) {
                    self.state = ObjectState::ExpectColon { key };
                    ParseOutcome::Pending
                } else if c == ':' {
                    self.state = ObjectState::ExpectValue { key };
                    ParseOutcome::Pending
                } else {
                    ParseOutcome::Rejected(DecodeError::missing_colon(c))
                }
            }
            ObjectState::ExpectValue { key } => {
                if is_json_whitespace(c) {
                    self.state = ObjectState::ExpectValue { key };
                    ParseOutcome::Pending
                } else {
                    self.start_value(key, c)
                }
            }
            ObjectState::InValue {
                key,
                mut child,
                mut last_partial,
            } => {
                // Same delimiter inspection as arrays: a partial number is
                // finalized by `,`, `}` or whitespace, never fed them.
                if last_partial.is_some() && (c == ',' || c == '}' || is_json_whitespace(c)) {
                    if let Some(value) = last_partial.take() {
                        self.members.insert(key, value);
                    }
                    return match c {
                        ',' => {
                            self.state = ObjectState::ExpectKey;
                            ParseOutcome::Pending
                        }
                        '}' => self.close(),
                        _ => {
                            self.state = ObjectState::ExpectCommaOrClose;
                            ParseOutcome::Pending
                        }
                    };
                }
                match child.feed(c) {
                    ParseOutcome::Pending => {
                        self.state = ObjectState::InValue {
                            key,
                            child,
                            last_partial: None,
                        };
                        ParseOutcome::Pending
                    }
                    ParseOutcome::Partial(value) => {
                        self.state = ObjectState::InValue {
                            key,
                            child,
                            last_partial: Some(value),
                        };
                        ParseOutcome::Pending
                    }
                    ParseOutcome::Done(value) => {
                        self.members.insert(key, value);
                        self.state = ObjectState::ExpectCommaOrClose;
                        ParseOutcome::Pending
                    }
                    ParseOutcome::Rejected(err) => ParseOutcome::Rejected(err),
                }
            }
            ObjectState::ExpectCommaOrClose => {
                if is_json_whitespace(c) {
                    self.state = ObjectState::ExpectCommaOrClose;
                    ParseOutcome::Pending
                } else if c == ',' {
                    self.state = ObjectState::ExpectKey;
                    ParseOutcome::Pending
                } else if c == '}' {
                    self.close()
                } else {
                    ParseOutcome::Rejected(DecodeError::unexpected_character(c))
                }
            }
            ObjectState::Closed => ParseOutcome::Rejected(DecodeError::unexpected_character(c)),
        }
    }

    fn finish(&mut self) -> Result<Value, DecodeError> {
        Err(DecodeError::incomplete_input("object"))
    }
}
