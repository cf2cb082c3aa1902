//! End-to-end runs: corpus files on disk through ingestion, graph construction, detection,
//! scoring, clustering and the renderer view.

mod common;

use coedit_core::{
    analysis::analyze,
    cluster::find_coauthor_clusters,
    config::{AnalysisConfig, TomlConfigProvider},
    detect::{detect_suspicious_patterns, DetectionConfig},
    graph::{CollabGraph, GraphBuilder},
    ingest::{load_paths, parse_corpus, SourceProblem},
    properties::{RelationKind, Venue},
    score::{score_suspicion, ScoreWeights},
    view::SuspicionTier,
};
use common::{article, create_test_corpora};
use tempfile::tempdir;
use test_log::test;

#[test]
fn test_files_to_report() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let (energies, sustainability) = create_test_corpora(&dir);

    let ingested = load_paths(&[energies, sustainability]);
    assert!(ingested.is_clean());
    assert_eq!(ingested.records.len(), 4);

    let analysis = analyze(&ingested.records, &AnalysisConfig::default());
    let report = &analysis.report;

    assert_eq!(report.suspicions.self_overlap.len(), 1);
    assert_eq!(report.suspicions.self_overlap[0].person, "carol");
    assert_eq!(
        report.suspicions.self_overlap[0].issue,
        Venue::new("Energies", "Rivers")
    );

    assert_eq!(report.suspicions.reciprocal.len(), 1);
    let pair = &report.suspicions.reciprocal[0];
    assert_eq!((pair.person_a.as_str(), pair.person_b.as_str()), ("alice", "bob"));
    assert_eq!(pair.issues_a_edited_b, vec![Venue::new("Energies", "Offshore")]);
    assert_eq!(
        pair.issues_b_edited_a,
        vec![Venue::new("Sustainability", "Land")]
    );

    assert_eq!(report.scores["carol"], 3);
    assert_eq!(report.scores["alice"], 2);
    assert_eq!(report.scores["bob"], 2);

    // alice-erin and erin-frank-gus chain into one group
    assert_eq!(report.clusters.len(), 1);
    assert_eq!(
        report.clusters[0].members(),
        ["alice", "erin", "frank", "gus"]
    );

    let view = analysis.view(&AnalysisConfig::default().view);
    let carol = view.nodes.iter().find(|n| n.id == "carol").unwrap();
    assert_eq!(carol.tier, SuspicionTier::Warning);
    let dan = view.nodes.iter().find(|n| n.id == "dan").unwrap();
    assert_eq!(dan.tier, SuspicionTier::Neutral);
    assert_eq!(view.edges.len(), analysis.graph.relation_count());
    Ok(())
}

#[test]
fn test_bad_sources_do_not_stop_the_run() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let (energies, _) = create_test_corpora(&dir);
    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{\"not\": \"an array\"}")?;
    let missing = dir.path().join("missing.json");

    let ingested = load_paths(&[missing, energies, broken]);
    assert_eq!(ingested.records.len(), 2);
    assert_eq!(ingested.loaded_sources, 1);
    let problems = ingested
        .diagnostics
        .iter()
        .map(|d| d.problem)
        .collect::<Vec<_>>();
    assert_eq!(
        problems,
        vec![SourceProblem::Unavailable, SourceProblem::Malformed]
    );

    let analysis = analyze(&ingested.records, &AnalysisConfig::default());
    assert_eq!(analysis.report.articles, 2);
    assert!(analysis.report.suspicions.reciprocal.is_empty());
    Ok(())
}

#[test]
fn test_nothing_loadable_gives_empty_analysis() {
    let dir = tempdir().unwrap();
    let ingested = load_paths(&[dir.path().join("a.json"), dir.path().join("b.json")]);
    assert!(ingested.records.is_empty());
    assert_eq!(ingested.diagnostics.len(), 2);

    let analysis = analyze(&ingested.records, &AnalysisConfig::default());
    assert!(analysis.graph.is_empty());
    assert!(analysis.report.suspicions.is_empty());
    assert!(analysis.report.scores.is_empty());
    assert!(analysis.report.clusters.is_empty());
}

#[test]
fn test_corpus_fields_and_extra_keys() {
    let records = parse_corpus(
        r#"[{"title": "Wind", "link": "https://example.org/1", "journal": "Energies",
            "year": "2023", "special_issue": "Offshore", "editors": ["Alice"],
            "authors": ["Bob"], "scraped_by": "someone"}]"#,
    )
    .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].link, "https://example.org/1");
    assert_eq!(records[0].year, "2023");
    assert_eq!(records[0].venue(), Venue::new("Energies", "Offshore"));
}

#[test]
fn test_name_normalization_merges_spellings() {
    let graph = CollabGraph::from_records(&[
        article("One", "J", "S", &[" Alice Smith "], &["BOB"]),
        article("Two", "J", "T", &["alice smith"], &["Bob"]),
    ]);
    assert_eq!(graph.person_count(), 2);
    let alice = graph.person("ALICE SMITH").unwrap();
    assert_eq!(alice.editor_count, 2);
    let edge = graph.relationship("alice smith", "bob").unwrap();
    assert_eq!(edge.issues, vec![Venue::new("J", "S"), Venue::new("J", "T")]);
    assert_eq!(edge.titles, vec!["One".to_string(), "Two".to_string()]);
}

#[test]
fn test_duplicate_records_double_counts_but_not_suspicions() {
    let record = article("Own", "J", "S", &["Pat"], &["Pat", "Quinn"]);
    let single = CollabGraph::from_records(std::slice::from_ref(&record));
    let doubled = CollabGraph::from_records(&[record.clone(), record]);

    assert_eq!(single.relation_count(), doubled.relation_count());
    assert_eq!(doubled.person("pat").unwrap().editor_count, 2);
    // pat -> quinn is both editorial and co-author, one contribution each per record
    assert_eq!(
        single.relationship("pat", "quinn").unwrap().contributions(),
        2
    );
    assert_eq!(
        doubled.relationship("pat", "quinn").unwrap().contributions(),
        4
    );

    // one entry per (person, venue), however many records repeat it
    let suspicions = detect_suspicious_patterns(&doubled, &DetectionConfig::default());
    assert_eq!(suspicions.self_overlap.len(), 1);
    let scores = score_suspicion(&suspicions, &ScoreWeights::default());
    assert_eq!(scores["pat"], 3);
}

#[test]
fn test_incremental_builder_matches_batch() {
    let records = vec![
        article("One", "J", "S", &["A"], &["B", "C"]),
        article("Two", "J", "T", &["B"], &["A"]),
    ];
    let mut builder = GraphBuilder::new();
    for record in records.iter() {
        builder.add_record(record);
    }
    assert_eq!(builder.record_count(), 2);
    let incremental = builder.finish();
    let batch = CollabGraph::from_records(&records);

    assert_eq!(incremental.stats(), batch.stats());
    assert_eq!(incremental.display_contents(), batch.display_contents());
    assert!(incremental
        .relationship("a", "b")
        .unwrap()
        .has(RelationKind::EditorToAuthor));
}

#[test]
fn test_config_file_drives_analysis() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let (energies, sustainability) = create_test_corpora(&dir);
    let config_path = dir.path().join("coedit.toml");
    std::fs::write(
        &config_path,
        r#"
[scoring]
self_overlap = 10
reciprocal = 1

[clusters]
min_size = 5

[detection]
dedupe_reciprocal = false
"#,
    )?;

    let config = TomlConfigProvider::new(config_path).get_config()?;
    let ingested = load_paths(&[energies, sustainability]);
    let analysis = analyze(&ingested.records, &config);

    assert_eq!(analysis.report.scores["carol"], 10);
    // both orderings reported, so each person is counted twice
    assert_eq!(analysis.report.suspicions.reciprocal.len(), 2);
    assert_eq!(analysis.report.scores["alice"], 2);
    assert!(analysis.report.clusters.is_empty());
    assert_eq!(find_coauthor_clusters(&analysis.graph, 4).len(), 1);
    Ok(())
}
