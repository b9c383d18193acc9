//! Core business logic for Copra.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Double-entry account book and trial balance derivation
//! - `reports` - Financial statements and printable/exportable rendering
//! - `snapshot` - The JSON input boundary supplied by the data-access layer
//!
//! Every computation is a pure fold over an immutable input snapshot: calling
//! the same function twice with the same inputs returns structurally equal
//! output. Nothing in this crate performs I/O or holds state between calls.

pub mod ledger;
pub mod reports;
pub mod snapshot;
