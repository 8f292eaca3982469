//! Model catalog types
//!
//! The catalog is an ordered list of entries, each carrying an enabled flag.
//! Disabling an entry keeps it in the catalog but removes it from the run.

use super::ids::ModelId;
use serde::{Deserialize, Serialize};

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Identifier passed to the exporter
    pub id: ModelId,

    /// Whether the entry takes part in a run
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Free-form remark shown by `list`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ModelEntry {
    /// Creates an enabled entry with no note
    pub fn new(id: ModelId) -> Self {
        Self {
            id,
            enabled: true,
            note: None,
        }
    }

    /// Marks the entry as disabled
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Attaches a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

fn default_enabled() -> bool {
    true
}

/// Ordered model catalog
///
/// Order is processing order. Duplicates are allowed and simply repeat work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelList(Vec<ModelEntry>);

impl ModelList {
    /// Creates a list from entries
    pub fn new(entries: Vec<ModelEntry>) -> Self {
        Self(entries)
    }

    /// Creates a list where every identifier is enabled
    pub fn from_ids(ids: impl IntoIterator<Item = ModelId>) -> Self {
        Self(ids.into_iter().map(ModelEntry::new).collect())
    }

    /// All entries, enabled or not
    pub fn entries(&self) -> &[ModelEntry] {
        &self.0
    }

    /// Enabled identifiers in catalog order
    pub fn active(&self) -> impl Iterator<Item = &ModelId> {
        self.0.iter().filter(|e| e.enabled).map(|e| &e.id)
    }

    /// Number of enabled entries
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the catalog has no entries at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
