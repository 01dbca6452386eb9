use serde::Serialize;
use serde_json::Value;

use crate::model::Row;

/// A statistics row keyed by position alone; the category has been dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRow {
    pub position: usize,
    pub values: Row,
}

/// A single-category statistics table produced by a lookback query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatTable {
    columns: Vec<String>,
    rows: Vec<StatRow>,
}

/// The statistics of the last matches played by each side of a fixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LookupResult {
    /// HomeStat rows gathered from the home team's candidate matches.
    pub home_data: StatTable,
    /// AwayStat rows gathered from the away team's candidate matches.
    pub away_data: StatTable,
}

impl StatTable {
    pub fn new(columns: Vec<String>, rows: Vec<StatRow>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[StatRow] {
        &self.rows
    }

    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().map(|r| r.position)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Row> {
        self.rows
            .iter()
            .find(|r| r.position == position)
            .map(|r| &r.values)
    }

    /// Every cell of one column, in row order. Absent cells read as `Null`.
    pub fn column<'a>(&'a self, name: &'a str) -> Option<impl Iterator<Item = &'a Value> + 'a> {
        if !self.columns.iter().any(|c| c == name) {
            return None;
        }
        Some(
            self.rows
                .iter()
                .map(move |r| r.values.get(name).unwrap_or(&Value::Null)),
        )
    }

    pub fn has_missing(&self) -> bool {
        self.columns.iter().any(|c| self.column_has_missing(c))
    }

    /// Drop every column holding a missing value in any row. Rows are never dropped.
    ///
    /// Returns the number of columns removed.
    pub fn prune_missing_columns(&mut self) -> usize {
        let (keep, drop): (Vec<String>, Vec<String>) = std::mem::take(&mut self.columns)
            .into_iter()
            .partition(|c| !self.column_has_missing(c));
        for row in &mut self.rows {
            for column in &drop {
                row.values.shift_remove(column);
            }
        }
        self.columns = keep;
        drop.len()
    }

    fn column_has_missing(&self, column: &str) -> bool {
        self.rows
            .iter()
            .any(|r| r.values.get(column).is_none_or(Value::is_null))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn stat_row(position: usize, value: Value) -> StatRow {
        let Value::Object(map) = value else {
            unreachable!()
        };
        StatRow {
            position,
            values: map.into_iter().collect(),
        }
    }

    #[test]
    fn test_prune_drops_columns_not_rows() {
        let mut table = StatTable::new(
            vec!["Goals".into(), "Shots".into(), "Corners".into()],
            vec![
                stat_row(0, json!({"Goals": 1, "Shots": 9, "Corners": null})),
                stat_row(3, json!({"Goals": 0, "Shots": 4})),
                stat_row(5, json!({"Goals": 2, "Shots": null, "Corners": 6})),
            ],
        );
        assert!(table.has_missing());

        let dropped = table.prune_missing_columns();

        assert_eq!(dropped, 2);
        assert_eq!(table.columns(), ["Goals".to_string()]);
        assert_eq!(table.positions().collect::<Vec<_>>(), vec![0, 3, 5]);
        assert!(!table.has_missing());
        assert_eq!(table.get(5).unwrap().len(), 1);
        assert!(table.get(3).unwrap().get("Shots").is_none());
    }

    #[test]
    fn test_prune_on_empty_table_keeps_columns() {
        let mut table = StatTable::new(vec!["Goals".into()], vec![]);
        assert_eq!(table.prune_missing_columns(), 0);
        assert_eq!(table.columns().len(), 1);
        assert!(table.is_empty());
    }

    #[test]
    fn test_column_reads_in_row_order() {
        let table = StatTable::new(
            vec!["Goals".into()],
            vec![stat_row(1, json!({"Goals": 2})), stat_row(4, json!({"Goals": 0}))],
        );
        let goals: Vec<&Value> = table.column("Goals").unwrap().collect();
        assert_eq!(goals, vec![&json!(2), &json!(0)]);
        assert!(table.column("Shots").is_none());
    }
}
