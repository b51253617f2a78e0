//! Batch fetcher for kanji dictionary entries and their images.
//!
//! Reads a list of kanji, looks each one up against the remote search API,
//! downloads the images attached to the first kanji record, and writes the
//! results and the ids that could not be fetched as JSON manifests.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
