//! Interpreter module
//!
//! Command-line interpretation over the flat file system.

pub mod errors;
pub mod expansion;
pub mod interpreter;
pub mod types;

pub use errors::*;
pub use expansion::*;
pub use interpreter::Interpreter;
pub use types::*;
