//! CLI command implementations.

pub mod common;
pub mod program;
pub mod route;
pub mod validate;
pub mod version;
