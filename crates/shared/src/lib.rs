//! Shared types for Copra.
//!
//! Currency codes and monetary display formatting used by both the core
//! computation crate and the reporter binary. No business logic lives here.

pub mod types;

pub use types::money::{format_grouped, Currency};
