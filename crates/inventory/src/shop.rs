//! The update engine: advances every catalog entry by one simulated day.

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::category::Category;
use crate::item::Item;
use crate::report::DayReport;

/// Post-decrement sell-in below this value means the item has expired.
pub const EXPIRED: i32 = 0;

/// Event passes gain triple value when fewer than this many days remain.
pub const TRIPLE_VALUE_TIME: i32 = 6;

/// Event passes gain double value when fewer than this many days remain.
pub const DOUBLE_VALUE_TIME: i32 = 11;

const NORMAL_RATE: u32 = 1;
const DOUBLE_RATE: u32 = 2;
const TRIPLE_RATE: u32 = 3;

/// Enhanced items degrade at this multiple of the default rate.
pub const ENHANCED_MULTIPLIER: u32 = 2;

/// Update engine owning the catalog.
///
/// Membership is fixed for the engine's lifetime; `advance_day` only mutates
/// the items it was built with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shop {
    items: Vec<Item>,
    day: u32,
}

impl Shop {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items, day: 0 }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Number of days advanced since construction.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Advance every item by exactly one simulated day, in catalog order.
    ///
    /// Sell-in is decremented first; the quality rule then looks at the new
    /// value. Legendary items are skipped entirely.
    pub fn advance_day(&mut self) -> &[Item] {
        for item in &mut self.items {
            let category = item.category();
            match category {
                Category::Legendary => continue,
                Category::Aged => update_aged(item),
                Category::EventPass => update_event_pass(item),
                Category::Enhanced => update_enhanced(item),
                Category::Default => update_default(item),
            }
            trace!(
                name = item.name(),
                %category,
                sell_in = item.sell_in(),
                quality = item.quality(),
                "item updated"
            );
        }

        self.day += 1;
        debug!(day = self.day, items = self.items.len(), "catalog advanced one day");
        &self.items
    }

    /// Snapshot of the catalog as of the current day.
    ///
    /// `start_date` is the calendar date of day 0.
    pub fn report(&self, start_date: NaiveDate) -> DayReport {
        DayReport::new(self.day, start_date, self.items.clone())
    }
}

fn update_aged(item: &mut Item) {
    item.decrease_sell_in();
    if item.sell_in() < EXPIRED {
        item.bump_quality(DOUBLE_RATE);
    } else {
        item.bump_quality(NORMAL_RATE);
    }
}

fn update_event_pass(item: &mut Item) {
    item.decrease_sell_in();
    let sell_in = item.sell_in();
    if sell_in < EXPIRED {
        item.zero_quality();
    } else if sell_in < TRIPLE_VALUE_TIME {
        item.bump_quality(TRIPLE_RATE);
    } else if sell_in < DOUBLE_VALUE_TIME {
        item.bump_quality(DOUBLE_RATE);
    } else {
        item.bump_quality(NORMAL_RATE);
    }
}

fn update_default(item: &mut Item) {
    item.decrease_sell_in();
    item.drop_quality(default_rate(item.sell_in()));
}

fn update_enhanced(item: &mut Item) {
    item.decrease_sell_in();
    item.drop_quality(default_rate(item.sell_in()) * ENHANCED_MULTIPLIER);
}

fn default_rate(sell_in: i32) -> u32 {
    if sell_in < EXPIRED {
        DOUBLE_RATE
    } else {
        NORMAL_RATE
    }
}
