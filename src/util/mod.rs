//! Shared helpers (test tracing setup)

pub mod testing;
