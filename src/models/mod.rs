use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, collections::BTreeMap, fmt::Display};

pub mod snapshot;

pub use snapshot::{IngestionPhase, IngestionState, RecommendationLookup, RecommendationSnapshot};

/// Opaque token naming one piece of content; compared by exact string equality
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ContentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ContentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Maximum number of ranked entries one source row can contribute
pub const MAX_RECOMMENDATIONS: usize = 5;

/// One ranked suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationEntry {
    pub content_id: ContentId,
    pub score: f64,
}

impl RecommendationEntry {
    pub fn new(content_id: impl Into<ContentId>, score: f64) -> Self {
        Self {
            content_id: content_id.into(),
            score,
        }
    }
}

/// Entries sorted by descending score, index 0 is the top pick
pub type RecommendationList = Vec<RecommendationEntry>;

/// Recommendation lists for a single source, keyed by the content they were computed for
pub type RecommendationMap = BTreeMap<ContentId, RecommendationList>;

/// Which export produced a list, and therefore which score table ranks it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    Collaborative,
    ContentBased,
}

impl SourceKind {
    /// Score assigned to the entry found in "Recommendation {position}" (1-based)
    pub fn score_for(&self, position: usize) -> Option<f64> {
        let table: &[f64; MAX_RECOMMENDATIONS] = match self {
            SourceKind::Collaborative => &[5.0, 4.8, 4.6, 4.4, 4.2],
            SourceKind::ContentBased => &[0.95, 0.90, 0.85, 0.80, 0.75],
        };
        position.checked_sub(1).and_then(|i| table.get(i)).copied()
    }
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Collaborative => write!(f, "collaborative"),
            SourceKind::ContentBased => write!(f, "content-based"),
        }
    }
}
