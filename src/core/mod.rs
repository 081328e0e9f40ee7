//! Shared types: errors, envelope configuration, and amount normalization.

mod amount;
mod config;
mod error;

pub use amount::*;
pub use config::*;
pub use error::*;
