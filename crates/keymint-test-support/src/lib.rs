//! Shared test doubles for the keymint crates.

mod entropy;

pub use entropy::{FailingEntropy, SequenceEntropy};
