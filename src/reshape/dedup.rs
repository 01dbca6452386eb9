use std::collections::HashSet;

use crate::error::Result;
use crate::model::Row;

/// Drop rows identical to an earlier row, keeping each survivor's original index.
///
/// Rows must already share one column order; they are compared by their JSON encoding,
/// so numbers only match when written the same way (`1` and `1.0` stay distinct).
pub(crate) fn drop_duplicates(rows: Vec<Row>) -> Result<Vec<(usize, Row)>> {
    let mut seen = HashSet::with_capacity(rows.len());
    let mut kept = Vec::with_capacity(rows.len());
    for (position, row) in rows.into_iter().enumerate() {
        if seen.insert(serde_json::to_string(&row)?) {
            kept.push((position, row));
        }
    }
    Ok(kept)
}
