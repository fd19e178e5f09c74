//! Instance records and the inventory they form.
//!
//! Pure types only: no I/O, no async.

use serde::Serialize;

/// One VM as reported by the inventory source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceRecord {
    /// Instance name, unique within its zone.
    pub name: String,
    /// Short zone name, e.g. `us-central1-a`.
    pub zone: String,
    /// Lifecycle status as reported by the API (`RUNNING`, `TERMINATED`, ...).
    /// Display-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl InstanceRecord {
    /// Build a record, normalizing `zone` to its last path segment.
    #[must_use]
    pub fn new(name: impl Into<String>, zone: &str) -> Self {
        Self {
            name: name.into(),
            zone: short_zone(zone).to_string(),
            status: None,
        }
    }

    /// Attach a display status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Ordered records from one fetch. Order is display order only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory(Vec<InstanceRecord>);

impl Inventory {
    #[must_use]
    pub fn new(records: Vec<InstanceRecord>) -> Self {
        Self(records)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&InstanceRecord> {
        self.0.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[InstanceRecord] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InstanceRecord> {
        self.0.iter()
    }
}

impl FromIterator<InstanceRecord> for Inventory {
    fn from_iter<I: IntoIterator<Item = InstanceRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a InstanceRecord;
    type IntoIter = std::slice::Iter<'a, InstanceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Reduce a possibly fully-qualified zone to its short name.
///
/// `https://www.googleapis.com/compute/v1/projects/p/zones/us-central1-a`
/// and `zones/us-central1-a` both become `us-central1-a`. Trailing slashes
/// are ignored.
#[must_use]
pub fn short_zone(zone: &str) -> &str {
    let trimmed = zone.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
