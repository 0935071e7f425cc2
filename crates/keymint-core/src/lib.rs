//! Keymint Core — shared error taxonomy and entropy abstraction.
//!
//! This crate defines the error type and the entropy-source trait that all
//! other keymint crates depend on. It contains no algorithm code.

pub mod entropy;
pub mod error;
