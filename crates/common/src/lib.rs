//! Shared process setup for the UNL report binaries.

pub mod logging;
