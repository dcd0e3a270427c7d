//! Core application primitives (scanner, scheduler, snapshot store, HTTP)

pub mod http;
pub mod scanner;
pub mod scheduler;
pub mod store;

pub use http::*;
pub use scanner::*;
pub use scheduler::*;
pub use store::*;
