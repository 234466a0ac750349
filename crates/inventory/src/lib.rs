//! Inventory domain module: nightly catalog updates.
//!
//! This crate contains the day-advance rules for a shop's catalog,
//! implemented purely as deterministic domain logic (no IO, no storage).
//! Catalog seeding and day reports sit alongside as collaborators of the
//! engine.

pub mod catalog;
pub mod category;
pub mod item;
pub mod quality;
pub mod report;
pub mod shop;

pub use catalog::Catalog;
pub use category::Category;
pub use item::Item;
pub use quality::{MAX_QUALITY, MIN_QUALITY};
pub use report::DayReport;
pub use shop::Shop;
