//! Expansion
//!
//! Text preprocessing applied by the host before a line is interpreted.

pub mod variable;

pub use variable::{expand_env_vars, process_env};
