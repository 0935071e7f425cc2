//! Keymint — uniform sampling and collision-free identifier allocation.
//!
//! Combines the entropy abstraction from `keymint-core` with the radix
//! codec from `keymint-numconv` to mint database keys and short codes,
//! either unchecked (128-bit, collision probability astronomically
//! small) or validated against a caller-supplied uniqueness oracle.

pub mod allocator;
pub mod sampler;
