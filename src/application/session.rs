//! Session context for one interactive run.
//!
//! Replaces free-standing "catalog + dataLoaded flag" state with a single
//! value handed to whichever command handler runs.

use std::path::Path;

use tracing::instrument;

use crate::application::error::ApplicationResult;
use crate::application::loader::{self, LoadSummary};
use crate::domain::{Course, CourseCatalog};

#[derive(Debug, Default)]
pub struct Session {
    catalog: CourseCatalog,
    loaded: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)load the catalog from `path`.
    ///
    /// On failure the catalog has already been cleared by the loader and
    /// the session is marked not-loaded.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&mut self, path: &Path) -> ApplicationResult<LoadSummary> {
        let result = loader::load_catalog(path, &mut self.catalog);
        self.loaded = result.is_ok();
        result
    }

    /// Guard for list/lookup operations: data loaded and catalog non-empty.
    pub fn is_ready(&self) -> bool {
        self.loaded && !self.catalog.is_empty()
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// Lookup with the prerequisites of the hit resolved against the
    /// catalog. Unresolvable prerequisite ids come back as `Unknown`.
    pub fn course_info(&self, id: &str) -> Option<(&Course, Vec<Resolved<'_>>)> {
        let course = self.catalog.get(id)?;
        let resolved = course
            .prerequisites
            .iter()
            .map(|pre_id| match self.catalog.get(pre_id) {
                Some(pre) => Resolved::Known(pre),
                None => Resolved::Unknown(pre_id),
            })
            .collect();
        Some((course, resolved))
    }
}

/// A prerequisite id resolved (or not) against the catalog.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved<'a> {
    Known(&'a Course),
    /// Id referenced by a course but absent from the catalog
    Unknown(&'a str),
}
