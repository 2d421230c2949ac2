//! Core trait abstractions.

pub mod fetcher;
pub mod searcher;
pub mod source;
