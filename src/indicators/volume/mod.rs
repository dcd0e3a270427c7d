//! Volume indicators: moving-average surge

pub mod surge;

pub use surge::*;
