use std::path::PathBuf;

use crate::model::Category;

/// All errors that can occur while loading, reshaping or querying match data.
#[derive(thiserror::Error, Debug)]
pub enum LookbackError {
    /// The input document is not a JSON object.
    #[error("expected a JSON object with MatchInfo, HomeStat and AwayStat, got {kind}")]
    MalformedDocument { kind: &'static str },

    /// One of `MatchInfo`, `HomeStat` or `AwayStat` is absent from the record.
    #[error("missing required collection {category}")]
    MissingCategory { category: Category },

    /// A named collection exists but is not an array of rows.
    #[error("collection {category} is not an array")]
    NotASequence { category: Category },

    /// A row could not be flattened into scalar columns.
    #[error("malformed row {position} in {category}: {reason}")]
    MalformedRow {
        category: Category,
        position: usize,
        reason: &'static str,
    },

    /// A row lacks a field the operation strictly requires.
    ///
    /// `position` is `None` when the row is a free-standing target row.
    #[error("{category} row {} is missing field {field}", display_position(.position))]
    MissingField {
        category: Category,
        position: Option<usize>,
        field: &'static str,
    },

    /// A team identifier is present but is not a string.
    #[error("team field {field} must be a string, got {value}")]
    InvalidTeam {
        field: &'static str,
        value: serde_json::Value,
    },

    /// The three collections do not line up one row per match.
    #[error(
        "collections are not parallel: MatchInfo={match_info}, HomeStat={home_stat}, AwayStat={away_stat}"
    )]
    LengthMismatch {
        match_info: usize,
        home_stat: usize,
        away_stat: usize,
    },

    /// No MatchInfo row exists at the requested position.
    #[error("no MatchInfo row at position {position}")]
    UnknownPosition { position: usize },

    /// Failed to read the input document.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input document is not valid JSON.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

fn display_position(position: &Option<usize>) -> String {
    position.map_or_else(|| "<target>".to_string(), |p| p.to_string())
}

pub type Result<T> = std::result::Result<T, LookbackError>;
