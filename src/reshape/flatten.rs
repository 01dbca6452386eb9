use indexmap::IndexSet;
use serde_json::{Map, Value};

use crate::error::{LookbackError, Result};
use crate::model::{Category, Row};

/// Flatten one category's raw rows into a rectangular block.
///
/// Nested objects expand into `parent.child` columns. Columns are ordered by
/// first appearance and every row carries every column, `Null` where absent.
pub(crate) fn flatten_rows(category: Category, raw: &[Value]) -> Result<(Vec<String>, Vec<Row>)> {
    let flat = raw
        .iter()
        .enumerate()
        .map(|(position, value)| flatten_row(category, position, value))
        .collect::<Result<Vec<Row>>>()?;

    let columns: IndexSet<&String> = flat.iter().flat_map(|row| row.keys()).collect();
    let columns: Vec<String> = columns.into_iter().cloned().collect();

    let rows: Vec<Row> = flat
        .into_iter()
        .map(|mut row| {
            columns
                .iter()
                .map(|c| (c.clone(), row.swap_remove(c).unwrap_or(Value::Null)))
                .collect::<Row>()
        })
        .collect();
    Ok((columns, rows))
}

fn flatten_row(category: Category, position: usize, value: &Value) -> Result<Row> {
    let Value::Object(map) = value else {
        return Err(LookbackError::MalformedRow {
            category,
            position,
            reason: "row is not an object",
        });
    };
    let mut row = Row::new();
    flatten_into(None, map, &mut row);
    Ok(row)
}

fn flatten_into(prefix: Option<&str>, map: &Map<String, Value>, out: &mut Row) {
    for (key, value) in map {
        let name = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(inner) => flatten_into(Some(name.as_str()), inner, out),
            leaf => {
                out.insert(name, leaf.clone());
            }
        }
    }
}
