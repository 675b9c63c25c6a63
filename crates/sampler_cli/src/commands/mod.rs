//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod bench;
pub mod check;
pub mod histogram;
