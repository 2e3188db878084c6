//! Application layer: use cases above the catalog core

pub mod error;
pub mod loader;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use loader::{load_catalog, LoadSummary, SkippedLine};
pub use session::{Resolved, Session};
