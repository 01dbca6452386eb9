use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// Default lookback window size.
pub const DEFAULT_WINDOW: usize = 5;

/// How a team's position-ordered candidate matches are cut down to a window.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum WindowPolicy {
    /// Keep every candidate; the window size is ignored.
    #[default]
    Unwindowed,
    /// Skip the first candidate, then keep up to `n`. `n == 0` keeps nothing.
    SkipFirst,
}

impl WindowPolicy {
    pub fn apply(self, candidates: Vec<usize>, n: usize) -> Vec<usize> {
        match self {
            WindowPolicy::Unwindowed => candidates,
            WindowPolicy::SkipFirst => candidates.into_iter().skip(1).take(n).collect(),
        }
    }
}

/// Window size plus the candidate policy used for each side of the fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbackConfig {
    pub n: usize,
    pub home: WindowPolicy,
    pub away: WindowPolicy,
}

impl LookbackConfig {
    /// The historical asymmetric setup: the home side is unwindowed and the
    /// away side skips its first hit.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            home: WindowPolicy::Unwindowed,
            away: WindowPolicy::SkipFirst,
        }
    }

    /// Apply the skip-first window to both sides.
    pub fn symmetric(n: usize) -> Self {
        Self {
            n,
            home: WindowPolicy::SkipFirst,
            away: WindowPolicy::SkipFirst,
        }
    }
}

impl Default for LookbackConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
