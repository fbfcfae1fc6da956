//! # Drip Public API
//!
//! Character-at-a-time JSON decoder with composable incremental state
//! machines. Decoding consumes the input one Unicode scalar value at a time:
//! each grammar rule is its own suspendable state machine, and a dispatcher
//! narrows all grammar alternatives to a single survivor on the first code
//! point of every value.
//!
//! ## Usage
//!
//! ```rust
//! use drip::{Decoder, Value, decode};
//!
//! let value = decode("[ [\"nested array\"], 1]").expect("valid JSON");
//! assert_eq!(value.as_array().map(<[Value]>::len), Some(2));
//!
//! let bounded = Decoder::new().max_depth(16).decode("{\"a\": [1, 2]}");
//! assert!(bounded.is_ok());
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::Decoder;

// Re-export the engine surface: the decoded value domain, error types,
// per-feed outcomes and the machines themselves for callers that drive
// decoding incrementally.
pub use drip_engine::{
    DecodeConfig, DecodeError, DecodeResult, ErrorKind, ObjectMap, ParseOutcome, Value, decode,
    decode_with, machines,
};
