//! Prelude module for mayan_date crate.
//!
//! Re-exports the derive_more derives used across the crate.

pub use derive_more::Display;
