use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::{LookbackError, Result};
use crate::model::Category;

pub const HOME_TEAM: &str = "HomeTeam";
pub const AWAY_TEAM: &str = "AwayTeam";

/// A flattened row: qualified column name to cell. `Null` marks a missing value.
pub type Row = IndexMap<String, Value>;

/// A row addressed by `(category, position)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedRow {
    pub category: Category,
    pub position: usize,
    pub row: Row,
}

/// The reshaped match data: a flat sequence of tagged rows laid out as
/// the MatchInfo block, then HomeStat, then AwayStat.
///
/// Each `(category, position)` pair occurs at most once. Positions are the
/// original indices within the source collection and may have gaps where
/// duplicates were removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnifiedTable {
    rows: Vec<TaggedRow>,
    columns: IndexMap<Category, Vec<String>>,
}

impl UnifiedTable {
    pub(crate) fn push_block(
        &mut self,
        category: Category,
        columns: Vec<String>,
        rows: impl IntoIterator<Item = (usize, Row)>,
    ) {
        self.rows
            .extend(rows.into_iter().map(|(position, row)| TaggedRow {
                category,
                position,
                row,
            }));
        self.columns.insert(category, columns);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[TaggedRow] {
        &self.rows
    }

    /// All rows of one category, in position order.
    pub fn category(&self, category: Category) -> impl Iterator<Item = &TaggedRow> + '_ {
        self.rows.iter().filter(move |r| r.category == category)
    }

    /// The column names of one category, in first-appearance order.
    pub fn columns(&self, category: Category) -> &[String] {
        self.columns.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, category: Category, position: usize) -> Option<&TaggedRow> {
        self.category(category).find(|r| r.position == position)
    }

    pub fn match_info(&self, position: usize) -> Option<&Row> {
        self.get(Category::MatchInfo, position).map(|r| &r.row)
    }

    /// Rows of every category whose position is in `positions`, in table order.
    pub fn at_positions<'a>(
        &'a self,
        positions: &'a [usize],
    ) -> impl Iterator<Item = &'a TaggedRow> + 'a {
        self.rows
            .iter()
            .filter(move |r| positions.contains(&r.position))
    }
}

/// Read a team identifier from a MatchInfo-shaped row.
///
/// `position` only feeds the error context; pass `None` for a free-standing row.
pub(crate) fn team_id<'a>(
    row: &'a Row,
    field: &'static str,
    position: Option<usize>,
) -> Result<&'a str> {
    match row.get(field) {
        None | Some(Value::Null) => Err(LookbackError::MissingField {
            category: Category::MatchInfo,
            position,
            field,
        }),
        Some(Value::String(team)) => Ok(team.as_str()),
        Some(other) => Err(LookbackError::InvalidTeam {
            field,
            value: other.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map.into_iter().collect(),
            _ => unreachable!(),
        }
    }

    fn table() -> UnifiedTable {
        let mut table = UnifiedTable::default();
        table.push_block(
            Category::MatchInfo,
            vec![HOME_TEAM.to_string(), AWAY_TEAM.to_string()],
            vec![
                (0, row(json!({"HomeTeam": "A", "AwayTeam": "B"}))),
                (2, row(json!({"HomeTeam": "B", "AwayTeam": "A"}))),
            ],
        );
        table.push_block(
            Category::HomeStat,
            vec!["Goals".to_string()],
            vec![(0, row(json!({"Goals": 1}))), (1, row(json!({"Goals": 2})))],
        );
        table.push_block(Category::AwayStat, vec![], vec![]);
        table
    }

    #[test]
    fn test_lookup_by_category_and_position() {
        let table = table();
        assert_eq!(table.len(), 4);
        assert_eq!(table.category(Category::MatchInfo).count(), 2);
        assert!(table.get(Category::MatchInfo, 1).is_none());
        assert_eq!(table.match_info(2).unwrap()["HomeTeam"], "B");
        assert_eq!(table.columns(Category::HomeStat), ["Goals".to_string()]);
        assert!(table.columns(Category::AwayStat).is_empty());
    }

    #[test]
    fn test_at_positions_spans_categories() {
        let table = table();
        let hits: Vec<(Category, usize)> = table
            .at_positions(&[0])
            .map(|r| (r.category, r.position))
            .collect();
        assert_eq!(
            hits,
            vec![(Category::MatchInfo, 0), (Category::HomeStat, 0)]
        );
    }

    #[test]
    fn test_team_id_errors() {
        let missing = row(json!({"HomeTeam": "A"}));
        assert!(matches!(
            team_id(&missing, AWAY_TEAM, Some(3)),
            Err(LookbackError::MissingField {
                position: Some(3),
                field: AWAY_TEAM,
                ..
            })
        ));

        let null = row(json!({"HomeTeam": null}));
        assert!(matches!(
            team_id(&null, HOME_TEAM, None),
            Err(LookbackError::MissingField { .. })
        ));

        let numeric = row(json!({"HomeTeam": 7}));
        assert!(matches!(
            team_id(&numeric, HOME_TEAM, None),
            Err(LookbackError::InvalidTeam { .. })
        ));
    }
}
