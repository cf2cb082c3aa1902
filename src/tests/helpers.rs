//! Shared test utilities for graph and analysis testing

use crate::{graph::CollabGraph, properties::ArticleRecord};

/// Initialize logging for tests
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Helper function to create an article record with the fields the graph cares about
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

/// Two special issues in which alice and bob edit each other's work, carol edits her own
/// special issue, and three co-author groups of different sizes appear.
pub fn create_test_corpus() -> Vec<ArticleRecord> {
    init_logging();
    vec![
        // alice edits bob (SI-1)
        article("Wind", "Energies", "SI-1", &["Alice"], &["Bob", "Dan"]),
        // bob edits alice (SI-2)
        article("Solar", "Energies", "SI-2", &["Bob"], &["Alice", "Erin", "Frank"]),
        // carol both edits and authors in SI-3, twice
        article("Hydro", "Energies", "SI-3", &["Carol"], &["Carol", "Gina"]),
        article("Tidal", "Energies", "SI-3", &["Carol"], &["Carol"]),
        // isolated co-author pair
        article("Soil", "Land", "SI-4", &["Hank"], &["Ivan", "Judy"]),
    ]
}

pub fn create_test_graph() -> CollabGraph {
    CollabGraph::from_records(&create_test_corpus())
}
