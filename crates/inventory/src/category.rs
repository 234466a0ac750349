const LEGENDARY_PATTERN: &str = "sulfuras";
const AGED_PATTERN: &str = "brie";
const EVENT_PASS_PATTERN: &str = "backstage pass";
const ENHANCED_PATTERN: &str = "conjured";

/// Update rule family an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Never changes: sell-by and quality stay fixed.
    Legendary,
    /// Gains quality with age, twice as fast once expired.
    Aged,
    /// Gains quality faster as the event approaches, worthless afterwards.
    EventPass,
    /// Loses quality at twice the default rate.
    Enhanced,
    Default,
}

impl Category {
    /// Classify an item by a case-insensitive substring match on its name.
    ///
    /// Patterns are tried in priority order, so a name matching several of
    /// them resolves to the first: legendary, aged, event pass, enhanced.
    /// Anything else (including the empty name) is `Default`.
    pub fn classify(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains(LEGENDARY_PATTERN) {
            Self::Legendary
        } else if name.contains(AGED_PATTERN) {
            Self::Aged
        } else if name.contains(EVENT_PASS_PATTERN) {
            Self::EventPass
        } else if name.contains(ENHANCED_PATTERN) {
            Self::Enhanced
        } else {
            Self::Default
        }
    }

    pub fn is_legendary(self) -> bool {
        self == Self::Legendary
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::Legendary => "legendary",
            Self::Aged => "aged",
            Self::EventPass => "event_pass",
            Self::Enhanced => "enhanced",
            Self::Default => "default",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_standard_names() {
        assert_eq!(Category::classify("Sulfuras, Hand of Ragnaros"), Category::Legendary);
        assert_eq!(Category::classify("Aged Brie"), Category::Aged);
        assert_eq!(
            Category::classify("Backstage passes to a TAFKAL80ETC concert"),
            Category::EventPass
        );
        assert_eq!(Category::classify("Conjured Mana Cake"), Category::Enhanced);
        assert_eq!(Category::classify("+5 Dexterity Vest"), Category::Default);
    }

    #[test]
    fn match_ignores_case() {
        assert_eq!(Category::classify("SULFURAS"), Category::Legendary);
        assert_eq!(Category::classify("aged bRiE"), Category::Aged);
        assert_eq!(Category::classify("BACKSTAGE PASS"), Category::EventPass);
        assert_eq!(Category::classify("conJURED"), Category::Enhanced);
    }

    #[test]
    fn legendary_wins_over_every_other_pattern() {
        assert_eq!(
            Category::classify("Conjured Backstage pass of Brie and Sulfuras"),
            Category::Legendary
        );
        assert_eq!(Category::classify("Conjured Brie"), Category::Aged);
        assert_eq!(Category::classify("Conjured backstage pass"), Category::EventPass);
    }

    #[test]
    fn unmatched_and_empty_names_are_default() {
        assert_eq!(Category::classify(""), Category::Default);
        assert_eq!(Category::classify("normal"), Category::Default);
        // "backstage" alone is not an event pass.
        assert_eq!(Category::classify("Backstage"), Category::Default);
    }
}
