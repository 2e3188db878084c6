//! Catalog loader: line-oriented CSV into the course catalog.
//!
//! Expected format per line:
//!   COURSE_ID,COURSE_TITLE,PREREQ_1,PREREQ_2,...
//! Example:
//!   CS200,Intro to CS
//!   CS300,Data Structures,CS200
//!
//! Normalization happens here, not in the catalog: ids and prerequisites
//! are trimmed and uppercased, titles trimmed, empty prerequisite fields
//! dropped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{Course, CourseCatalog};

/// Outcome of a load: how many courses went in and which lines were skipped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub inserted: usize,
    pub skipped: Vec<SkippedLine>,
}

/// A malformed input line (fewer than two fields) that was not inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input file
    pub line_number: usize,
    pub content: String,
}

/// Load courses from `path` into `catalog`, replacing its prior contents.
///
/// The catalog is cleared before the open is attempted, so a failed reload
/// leaves it empty rather than merged with stale data. This mirrors the
/// reference behavior and is intentional.
///
/// Blank lines are skipped silently; lines with fewer than two fields are
/// skipped with a warning and recorded in the summary. Only an unreadable
/// file is an error.
#[instrument(level = "debug", skip(catalog))]
pub fn load_catalog(path: &Path, catalog: &mut CourseCatalog) -> ApplicationResult<LoadSummary> {
    catalog.clear();

    let file =
        File::open(path).map_err(|_| ApplicationError::FileNotFound(path.to_path_buf()))?;
    let reader = BufReader::new(file);

    let mut summary = LoadSummary::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ApplicationError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line) {
            Some(course) => {
                catalog.insert(course);
                summary.inserted += 1;
            }
            None => {
                warn!(line_number = idx + 1, line = %line, "skipping malformed line");
                summary.skipped.push(SkippedLine {
                    line_number: idx + 1,
                    content: line,
                });
            }
        }
    }

    debug!(
        inserted = summary.inserted,
        skipped = summary.skipped.len(),
        "catalog loaded"
    );
    Ok(summary)
}

/// Parse one non-blank CSV line into a normalized course.
///
/// Returns `None` when the line has fewer than two fields. Fields beyond
/// the title are prerequisites; empty ones are dropped, duplicates kept.
pub fn parse_line(line: &str) -> Option<Course> {
    let fields = line.split(',').map(str::trim).collect_vec();
    if fields.len() < 2 {
        return None;
    }

    let prerequisites = fields[2..]
        .iter()
        .filter(|f| !f.is_empty())
        .map(|f| f.to_uppercase())
        .collect();

    Some(Course::new(
        fields[0].to_uppercase(),
        fields[1],
        prerequisites,
    ))
}
