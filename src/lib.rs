//! rsplan: interactive course planner.
//!
//! Layered crate: `domain` holds the course entity and the arena-backed
//! ordered catalog (the BST core), `application` the loading and session
//! use-cases, `cli` the argument parsing, dispatch, and interactive shell.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{load_catalog, LoadSummary, Session};
pub use domain::{Course, CourseCatalog};
