//! Shared command handler helpers

pub mod outcome;
pub mod prompt;

pub use outcome::require_success;
