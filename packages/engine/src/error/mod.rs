//! Decode error handling.
//!
//! A decode fails on the first rejection: every error is local, fatal and
//! non-recoverable, and the engine never prints — callers receive a single
//! [`DecodeError`] carrying the error kind and, where the driver can supply
//! it, the absolute character offset.

mod types;

pub use types::{DecodeError, DecodeResult, ErrorKind};
