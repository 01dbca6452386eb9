use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// The outer key of the unified table: which source collection a row came from.
///
/// Variants are declared in block order, so iterating them yields
/// `MatchInfo`, `HomeStat`, `AwayStat`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    strum_macros::Display,
)]
pub enum Category {
    MatchInfo,
    HomeStat,
    AwayStat,
}

impl Category {
    /// The key naming this collection in the input document.
    pub fn key(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_block_order() {
        let order: Vec<Category> = Category::iter().collect();
        assert_eq!(
            order,
            vec![Category::MatchInfo, Category::HomeStat, Category::AwayStat]
        );
    }

    #[test]
    fn test_key_round_trips_through_from_str() {
        for category in Category::iter() {
            assert_eq!(category.key().parse::<Category>().unwrap(), category);
            assert_eq!(category.to_string(), category.key());
        }
    }
}
