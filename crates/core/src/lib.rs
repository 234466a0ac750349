//! `shelfwise-core` — domain foundation building blocks.
//!
//! This crate contains the **pure domain** error model shared by the catalog
//! crates (no IO, no logging setup).

pub mod error;

pub use error::{DomainError, DomainResult};
