//! Helpers shared across indicator modules.

pub mod math;
