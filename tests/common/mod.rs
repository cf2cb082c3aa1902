//! Shared test utilities for integration tests.
//!
//! Import from integration test files as:
//! ```ignore
//! mod common;
//! ```

use coedit_core::{ingest::write_corpus, properties::ArticleRecord};
use std::path::PathBuf;
use tempfile::TempDir;

/// Initialize tracing for tests, respecting RUST_LOG env var.
///
/// Safe to call multiple times, subsequent calls are no-ops.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

#[allow(dead_code)]
pub fn article(
    title: &str,
    journal: &str,
    special_issue: &str,
    editors: &[&str],
    authors: &[&str],
) -> ArticleRecord {
    ArticleRecord {
        title: title.to_string(),
        journal: journal.to_string(),
        special_issue: special_issue.to_string(),
        editors: editors.iter().map(|name| name.to_string()).collect(),
        authors: authors.iter().map(|name| name.to_string()).collect(),
        ..Default::default()
    }
}

/// Two corpora as a scraper would leave them, one per journal.
///
/// In `energies.json` Alice edits Bob and Carol edits her own special issue. In
/// `sustainability.json` Bob edits Alice (closing a reciprocal pair with the first file) and a
/// four-person co-author group appears.
#[allow(dead_code)]
pub fn create_test_corpora(temp_dir: &TempDir) -> (PathBuf, PathBuf) {
    init_logging();
    let energies = temp_dir.path().join("energies.json");
    let sustainability = temp_dir.path().join("sustainability.json");

    write_corpus(
        &energies,
        &[
            article("Wind", "Energies", "Offshore", &["Alice"], &["Bob"]),
            article("Hydro", "Energies", "Rivers", &["Carol"], &["Carol", "Dan"]),
        ],
    )
    .unwrap();
    write_corpus(
        &sustainability,
        &[
            article("Soil", "Sustainability", "Land", &["Bob"], &["Alice", "Erin"]),
            article("Water", "Sustainability", "Land", &["Bob"], &["Erin", "Frank", "Gus"]),
        ],
    )
    .unwrap();

    (energies, sustainability)
}
