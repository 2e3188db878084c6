//! Course entity: the record stored in the catalog

use std::fmt;

/// A single course record.
///
/// `id` is the unique key. The catalog compares ids lexicographically and
/// trusts them as given: normalization (uppercasing, trimming) is the
/// loader's job and happens before a `Course` reaches the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Normalized course identifier, e.g., "CS300"
    pub id: String,
    /// Free-text title, e.g., "Data Structures"
    pub title: String,
    /// Prerequisite course ids in input order. Entries are not validated
    /// against the catalog and duplicates are preserved.
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            prerequisites,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.id, self.title)
    }
}
