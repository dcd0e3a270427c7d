//! Squeeze signal evaluation.

pub mod engine;

pub use engine::*;
