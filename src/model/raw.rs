use itertools::izip;
use serde::Serialize;
use serde_json::Value;

use crate::model::Category;

/// The nested input document: three parallel collections, one row per match.
///
/// Rows are kept as raw JSON; flattening happens in [`crate::reshape`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawRecord {
    #[serde(rename = "MatchInfo")]
    match_info: Vec<Value>,
    #[serde(rename = "HomeStat")]
    home_stat: Vec<Value>,
    #[serde(rename = "AwayStat")]
    away_stat: Vec<Value>,
}

/// One match viewed across the three collections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixture<'a> {
    pub position: usize,
    pub match_info: &'a Value,
    pub home_stat: &'a Value,
    pub away_stat: &'a Value,
}

impl RawRecord {
    /// Build a record from in-memory rows. Collection lengths are not checked here;
    /// use [`crate::loader::from_value`] to enforce parallel collections.
    pub fn new(match_info: Vec<Value>, home_stat: Vec<Value>, away_stat: Vec<Value>) -> Self {
        Self {
            match_info,
            home_stat,
            away_stat,
        }
    }

    pub fn rows(&self, category: Category) -> &[Value] {
        match category {
            Category::MatchInfo => &self.match_info,
            Category::HomeStat => &self.home_stat,
            Category::AwayStat => &self.away_stat,
        }
    }

    /// Whether every collection holds the same number of rows.
    pub fn is_parallel(&self) -> bool {
        self.match_info.len() == self.home_stat.len()
            && self.match_info.len() == self.away_stat.len()
    }

    /// Zip the three collections into per-match views, stopping at the shortest.
    pub fn fixtures(&self) -> impl Iterator<Item = Fixture<'_>> {
        izip!(&self.match_info, &self.home_stat, &self.away_stat)
            .enumerate()
            .map(|(position, (match_info, home_stat, away_stat))| Fixture {
                position,
                match_info,
                home_stat,
                away_stat,
            })
    }
}
