use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::ContentId;

/// Deduplicated set of every content id seen across both sources
///
/// Enumeration order is the ids' sort order, so the result does not depend on which
/// source pipeline finished first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IdentifierRegistry {
    ids: BTreeSet<ContentId>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure union of the existing set and the incoming ids
    pub fn merge<I>(mut self, incoming: I) -> Self
    where
        I: IntoIterator<Item = ContentId>,
    {
        self.extend(incoming);
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn into_vec(self) -> Vec<ContentId> {
        self.ids.into_iter().collect()
    }
}

impl Extend<ContentId> for IdentifierRegistry {
    fn extend<T: IntoIterator<Item = ContentId>>(&mut self, iter: T) {
        self.ids.extend(iter);
    }
}

impl FromIterator<ContentId> for IdentifierRegistry {
    fn from_iter<T: IntoIterator<Item = ContentId>>(iter: T) -> Self {
        Self::new().merge(iter)
    }
}
