use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Similarity cut used when nothing else is configured.
pub const DEFAULT_THRESHOLD: f64 = 0.85;

/// CSS class applied to highlighted runs by default.
pub const DEFAULT_HIGHLIGHT_CLASS: &str = "suggest-diff-added";

/// Rejected threshold value (outside `[0, 1]` or NaN).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("similarity threshold must be within [0, 1], got {0}")]
pub struct InvalidThreshold(pub f64);

/// Minimum similarity (exclusive) for two candidates to be linked.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(value: f64) -> Option<Self> {
        if (0.0..=1.0).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl TryFrom<f64> for Threshold {
    type Error = InvalidThreshold;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidThreshold(value))
    }
}

impl From<Threshold> for f64 {
    fn from(t: Threshold) -> f64 {
        t.0
    }
}

/// Unit the diff operates on when deriving canonical forms and highlights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Char,
    Word,
}

/// How highlighted runs are marked up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightStyle {
    pub class: String,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            class: DEFAULT_HIGHLIGHT_CLASS.to_string(),
        }
    }
}

/// Knobs for one comparison run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    pub threshold: Threshold,
    pub granularity: Granularity,
    pub highlight: HighlightStyle,
}

/// A connected group of near-duplicate candidates. Members are ascending
/// candidate indices and there are always at least two of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub members: Vec<usize>,
}

impl Pool {
    pub fn first(&self) -> Option<usize> {
        self.members.first().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members.binary_search(&index).is_ok()
    }
}

/// One member's rendering inside a pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedMember {
    pub index: usize,
    pub html: String,
    pub highlight_runs: Vec<String>,
}

/// A pool together with everything derived from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolReport {
    pub id: String,
    pub members: Vec<usize>,
    pub canonical: String,
    pub rendered: Vec<RenderedMember>,
}

/// Full outcome of comparing a candidate list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub threshold: f64,
    pub granularity: Granularity,
    pub candidates: Vec<CandidateOutcome>,
    pub pools: Vec<PoolReport>,
    /// Row-major upper triangle, `i < j`.
    pub similarities: Vec<PairScore>,
}

/// Per-input result, same order as the input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateOutcome {
    pub original: String,
    pub output: String,
    pub pool: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    pub left: usize,
    pub right: usize,
    pub score: f64,
}
