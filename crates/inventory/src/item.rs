use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::quality;

/// One catalog entry.
///
/// The name is fixed at construction and only drives classification. The
/// engine mutates `sell_in` and `quality` in place once per simulated day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    #[serde(rename = "sellIn")]
    sell_in: i32,
    quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days remaining before expiry. Negative once the item is past its date.
    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn category(&self) -> Category {
        Category::classify(&self.name)
    }

    /// Count one day off the sell-by. Saturates at `i32::MIN`.
    pub(crate) fn decrease_sell_in(&mut self) {
        self.sell_in = self.sell_in.saturating_sub(1);
    }

    /// Raise quality by `steps` unit increments, each skipped at the ceiling.
    pub(crate) fn bump_quality(&mut self, steps: u32) {
        quality::raise(&mut self.quality, steps);
    }

    /// Lower quality by `steps` unit decrements, each skipped at the floor.
    pub(crate) fn drop_quality(&mut self, steps: u32) {
        quality::lower(&mut self.quality, steps);
    }

    pub(crate) fn zero_quality(&mut self) {
        self.quality = quality::MIN_QUALITY;
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
