//! Day reports: point-in-time snapshots of the catalog.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Catalog snapshot after `day` day-advances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    pub day: u32,
    /// Calendar date of this day, counted from the start date of day 0.
    pub date: NaiveDate,
    pub items: Vec<Item>,
}

impl DayReport {
    pub fn new(day: u32, start_date: NaiveDate, items: Vec<Item>) -> Self {
        let date = start_date
            .checked_add_days(Days::new(u64::from(day)))
            .unwrap_or(NaiveDate::MAX);
        Self { day, date, items }
    }
}

impl core::fmt::Display for DayReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "-------- day {} ({}) --------", self.day, self.date)?;
        writeln!(f, "name, sellIn, quality")?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}
