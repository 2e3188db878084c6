//! Domain layer: entities and the ordered course index
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod catalog;
pub mod course;

pub use catalog::{CourseCatalog, InOrderIter};
pub use course::Course;
