//! Last-N match extraction over a [`UnifiedTable`].

use tracing::{debug, instrument};

use crate::error::{LookbackError, Result};
use crate::model::{
    team_id, Category, LookupResult, Row, StatRow, StatTable, UnifiedTable, AWAY_TEAM, HOME_TEAM,
};

mod window;

pub use window::*;

/// Extracts the recent-match statistics for both sides of a fixture.
///
/// The extractor only reads the table, so one table can back any number of
/// extractors and queries.
///
/// # Examples
///
/// ```
/// use pitch_lookback::{reshape, LastNExtractor, RawRecord};
/// use serde_json::json;
///
/// let raw = RawRecord::new(
///     vec![
///         json!({"HomeTeam": "A", "AwayTeam": "B"}),
///         json!({"HomeTeam": "B", "AwayTeam": "A"}),
///     ],
///     vec![json!({"Goals": 1}), json!({"Goals": 0})],
///     vec![json!({"Goals": 2}), json!({"Goals": 3})],
/// );
/// let table = reshape(&raw)?;
/// let result = LastNExtractor::new(&table, 1).last_n_at(0)?;
/// assert_eq!(result.home_data.len(), 2);
/// assert_eq!(result.away_data.len(), 1);
/// # Ok::<(), pitch_lookback::LookbackError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LastNExtractor<'t> {
    table: &'t UnifiedTable,
    config: LookbackConfig,
}

impl<'t> LastNExtractor<'t> {
    /// Use the default asymmetric policies with a window of `n` matches.
    pub fn new(table: &'t UnifiedTable, n: usize) -> Self {
        Self::with_config(table, LookbackConfig::new(n))
    }

    pub fn with_config(table: &'t UnifiedTable, config: LookbackConfig) -> Self {
        Self { table, config }
    }

    pub fn config(&self) -> LookbackConfig {
        self.config
    }

    /// Gather the HomeStat rows of the home team's candidate matches and the
    /// AwayStat rows of the away team's candidate matches.
    ///
    /// `target` must expose `HomeTeam` and `AwayTeam`. Teams that never appear
    /// in MatchInfo produce empty tables. Columns with any missing value in a
    /// result table are dropped from it.
    #[instrument(skip_all, fields(n = self.config.n))]
    pub fn last_n(&self, target: &Row) -> Result<LookupResult> {
        let home_team = team_id(target, HOME_TEAM, None)?;
        let away_team = team_id(target, AWAY_TEAM, None)?;

        let home_positions = self.candidates(home_team, self.config.home)?;
        let away_positions = self.candidates(away_team, self.config.away)?;
        debug!(
            home_team,
            away_team,
            home_candidates = home_positions.len(),
            away_candidates = away_positions.len(),
            "selected candidate matches"
        );

        Ok(LookupResult {
            home_data: self.project(&home_positions, Category::HomeStat),
            away_data: self.project(&away_positions, Category::AwayStat),
        })
    }

    /// Run [`last_n`](Self::last_n) on the MatchInfo row at `position`.
    pub fn last_n_at(&self, position: usize) -> Result<LookupResult> {
        let target = self
            .table
            .match_info(position)
            .ok_or(LookbackError::UnknownPosition { position })?;
        self.last_n(target)
    }

    /// Positions of the MatchInfo rows where `team` plays either role, cut by `policy`.
    pub fn candidates(&self, team: &str, policy: WindowPolicy) -> Result<Vec<usize>> {
        let mut hits = Vec::new();
        for tagged in self.table.category(Category::MatchInfo) {
            let home = team_id(&tagged.row, HOME_TEAM, Some(tagged.position))?;
            let away = team_id(&tagged.row, AWAY_TEAM, Some(tagged.position))?;
            if home == team || away == team {
                hits.push(tagged.position);
            }
        }
        Ok(policy.apply(hits, self.config.n))
    }

    fn project(&self, positions: &[usize], category: Category) -> StatTable {
        let rows = self
            .table
            .at_positions(positions)
            .filter(|r| r.category == category)
            .map(|r| StatRow {
                position: r.position,
                values: r.row.clone(),
            })
            .collect();
        let mut table = StatTable::new(self.table.columns(category).to_vec(), rows);
        let dropped = table.prune_missing_columns();
        debug!(
            %category,
            rows = table.len(),
            dropped_columns = dropped,
            "projected statistics"
        );
        table
    }
}
