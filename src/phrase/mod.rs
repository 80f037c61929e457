//! Phrase extraction components
//!
//! This module provides candidate phrase generation at stopword and
//! punctuation boundaries.

pub mod candidates;
