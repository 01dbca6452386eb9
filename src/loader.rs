//! Reading the `{MatchInfo, HomeStat, AwayStat}` document into a [`RawRecord`].

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::error::{LookbackError, Result};
use crate::model::{Category, RawRecord};

#[instrument]
pub fn from_path(path: &Path) -> Result<RawRecord> {
    let json = std::fs::read_to_string(path).map_err(|source| LookbackError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json_str(&json)
}

pub fn from_json_str(json: &str) -> Result<RawRecord> {
    from_value(serde_json::from_str(json)?)
}

/// Split a parsed document into its three collections.
///
/// Each collection must be present and be an array, and all three must have
/// the same length so that row `i` of each describes the same match.
#[instrument(skip_all)]
pub fn from_value(value: Value) -> Result<RawRecord> {
    let mut document = match value {
        Value::Object(document) => document,
        other => {
            return Err(LookbackError::MalformedDocument {
                kind: json_kind(&other),
            })
        }
    };

    let match_info = take_collection(&mut document, Category::MatchInfo)?;
    let home_stat = take_collection(&mut document, Category::HomeStat)?;
    let away_stat = take_collection(&mut document, Category::AwayStat)?;

    let raw = RawRecord::new(match_info, home_stat, away_stat);
    if !raw.is_parallel() {
        return Err(LookbackError::LengthMismatch {
            match_info: raw.rows(Category::MatchInfo).len(),
            home_stat: raw.rows(Category::HomeStat).len(),
            away_stat: raw.rows(Category::AwayStat).len(),
        });
    }
    debug!(
        matches = raw.rows(Category::MatchInfo).len(),
        "loaded match record"
    );
    Ok(raw)
}

fn take_collection(document: &mut Map<String, Value>, category: Category) -> Result<Vec<Value>> {
    match document.remove(category.key()) {
        Some(Value::Array(rows)) => Ok(rows),
        Some(_) => Err(LookbackError::NotASequence { category }),
        None => Err(LookbackError::MissingCategory { category }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
