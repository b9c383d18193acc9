//! Shared domain types.

pub mod money;

pub use money::{format_grouped, Currency};
