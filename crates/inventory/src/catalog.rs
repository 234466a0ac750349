//! Catalog loading: builds the initial item sequence handed to the engine.
//!
//! The engine accepts any input. Preconditions on starting values live here,
//! at the seam where catalogs enter the system.

use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::info;

use shelfwise_core::{DomainError, DomainResult};

use crate::item::Item;
use crate::quality::{self, MAX_QUALITY, MIN_QUALITY};
use crate::shop::Shop;

/// Ordered set of items a shop opens with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// The shop's standard opening stock.
    pub fn seed() -> Self {
        Self::new(vec![
            Item::new("+5 Dexterity Vest", 10, 20),
            Item::new("Aged Brie", 2, 0),
            Item::new("Elixir of the Mongoose", 5, 7),
            Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
            Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
            Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
            Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
            Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
            Item::new("Conjured Mana Cake", 3, 6),
        ])
    }

    /// Parse a JSON array of `{"name", "sellIn", "quality"}` objects.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        info!(items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn from_reader(reader: impl Read) -> DomainResult<Self> {
        let catalog: Self = serde_json::from_reader(reader)?;
        info!(items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check starting values.
    ///
    /// Non-legendary items must start with quality inside
    /// `[MIN_QUALITY, MAX_QUALITY]`. Legendary items carry whatever quality
    /// they were given.
    pub fn validate(&self) -> DomainResult<()> {
        for (index, item) in self.items.iter().enumerate() {
            if item.category().is_legendary() {
                continue;
            }
            if !quality::in_bounds(item.quality()) {
                return Err(DomainError::validation(format!(
                    "item {index} ({:?}) has quality {}, expected {MIN_QUALITY}..={MAX_QUALITY}",
                    item.name(),
                    item.quality()
                )));
            }
        }
        Ok(())
    }

    /// Validate, then hand the items to a fresh engine.
    pub fn into_shop(self) -> DomainResult<Shop> {
        self.validate()?;
        Ok(Shop::new(self.items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn seed_covers_every_category() {
        let seed = Catalog::seed();
        assert_eq!(seed.len(), 9);
        for category in [
            Category::Legendary,
            Category::Aged,
            Category::EventPass,
            Category::Enhanced,
            Category::Default,
        ] {
            assert!(
                seed.items().iter().any(|i| i.category() == category),
                "missing {category}"
            );
        }
        assert!(seed.validate().is_ok());
    }

    #[test]
    fn parses_json_array() {
        let catalog = Catalog::from_json(
            r#"[{"name": "Aged Brie", "sellIn": 2, "quality": 0},
                {"name": "normal", "sellIn": -1, "quality": 50}]"#,
        )
        .unwrap();
        assert_eq!(
            catalog.items(),
            &[Item::new("Aged Brie", 2, 0), Item::new("normal", -1, 50)]
        );
    }

    #[test]
    fn reads_from_reader() {
        let json = br#"[{"name": "Conjured Mana Cake", "sellIn": 3, "quality": 6}]"#;
        let catalog = Catalog::from_reader(&json[..]).unwrap();
        assert_eq!(catalog.items(), &[Item::new("Conjured Mana Cake", 3, 6)]);
    }

    #[test]
    fn minimum_sell_in_from_json_advances() {
        let catalog =
            Catalog::from_json(r#"[{"name": "Aged Brie", "sellIn": -2147483648, "quality": 20}]"#)
                .unwrap();
        let mut shop = catalog.into_shop().unwrap();
        let item = &shop.advance_day()[0];
        assert_eq!((item.sell_in(), item.quality()), (i32::MIN, 22));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = Catalog::from_json(r#"[{"name": "normal", "sellIn": "soon"}]"#).unwrap_err();
        assert!(matches!(err, DomainError::Malformed(_)));

        let err = Catalog::from_json("{}").unwrap_err();
        assert!(matches!(err, DomainError::Malformed(_)));
    }

    #[test]
    fn out_of_range_quality_fails_validation() {
        let catalog = Catalog::new(vec![Item::new("normal", 3, 10), Item::new("Aged Brie", 3, 51)]);
        let err = catalog.into_shop().unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("item 1 (\"Aged Brie\") has quality 51, expected 0..=50")
        );

        let negative = Catalog::new(vec![Item::new("normal", 3, -1)]);
        assert!(matches!(negative.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn legendary_quality_is_accepted_as_is() {
        let catalog = Catalog::new(vec![Item::new("Sulfuras, Hand of Ragnaros", 0, 80)]);
        let shop = catalog.into_shop().unwrap();
        assert_eq!(shop.items()[0].quality(), 80);
    }

    #[test]
    fn empty_catalog_builds_empty_shop() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        let mut shop = catalog.into_shop().unwrap();
        assert!(shop.advance_day().is_empty());
    }
}
