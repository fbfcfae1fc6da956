//! # Drip JSON Decoding Engine
//!
//! Character-at-a-time JSON decoder built from cooperating, per-grammar-rule
//! incremental state machines. Instead of a lexer feeding a recursive-descent
//! parser, every grammar rule (literal, string, number, array, object) is a
//! suspendable state holder with a `feed(char) -> ParseOutcome` contract, and
//! the [`machines::ValueMachine`] dispatcher composes them into the full JSON
//! grammar by running all alternatives in parallel on the first code point and
//! narrowing to the single survivor.
//!
//! ## Usage
//!
//! ```rust
//! use drip_engine::{decode, Value};
//!
//! let value = decode("{ \"one\" : 1 }").expect("valid JSON");
//! assert_eq!(value.get("one").and_then(Value::as_f64), Some(1.0));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod convert;
pub mod decoder;
pub mod error;
pub mod machines;
pub mod outcome;
pub mod value;

pub use self::{
    config::DecodeConfig,
    decoder::{decode, decode_with},
    error::{DecodeError, DecodeResult, ErrorKind},
    outcome::ParseOutcome,
    value::{ObjectMap, Value},
};
