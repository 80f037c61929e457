//! Staged extraction pipeline.
//!
//! Stage traits, typed artifacts, observers and the runner that composes
//! them.

pub mod artifacts;
pub mod observer;
pub mod runner;
pub mod traits;
