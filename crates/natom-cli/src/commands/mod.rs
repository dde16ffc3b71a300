//! CLI command implementations.

pub mod common;
pub mod devices;
pub mod show;
pub mod validate;
pub mod version;
