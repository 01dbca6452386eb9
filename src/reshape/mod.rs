//! Turns the nested input document into a [`UnifiedTable`].

use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::{team_id, Category, RawRecord, UnifiedTable, AWAY_TEAM, HOME_TEAM};

mod dedup;
mod flatten;

/// Flatten, deduplicate and tag each collection, then concatenate them as
/// MatchInfo, HomeStat, AwayStat.
///
/// Collections are handled independently: each keeps its own column set and
/// its own post-dedup positions. Every MatchInfo row must carry string
/// `HomeTeam` and `AwayTeam` fields.
#[instrument(skip_all, fields(matches = raw.rows(Category::MatchInfo).len()))]
pub fn reshape(raw: &RawRecord) -> Result<UnifiedTable> {
    let mut table = UnifiedTable::default();
    for category in Category::iter() {
        let (columns, rows) = flatten::flatten_rows(category, raw.rows(category))?;
        let flattened = rows.len();
        let rows = dedup::drop_duplicates(rows)?;

        if category == Category::MatchInfo {
            for (position, row) in &rows {
                team_id(row, HOME_TEAM, Some(*position))?;
                team_id(row, AWAY_TEAM, Some(*position))?;
            }
        }

        debug!(
            %category,
            rows = rows.len(),
            duplicates = flattened - rows.len(),
            columns = columns.len(),
            "reshaped collection"
        );
        table.push_block(category, columns, rows);
    }
    Ok(table)
}
