//! One call from records to a finished report.
//!
//! [analyze] runs the whole pipeline over an in-memory corpus: build the graph, detect the two
//! suspicious patterns, score them and find co-author clusters. The result keeps the graph
//! around so callers can still export it or turn it into a [NetworkView].

use crate::{
    cluster::{find_coauthor_clusters, Cluster},
    config::AnalysisConfig,
    detect::{detect_suspicious_patterns, Suspicions},
    error::CoeditError,
    graph::{CollabGraph, GraphBuilder, GraphStats},
    properties::{ArticleRecord, Venue},
    score::{ranked, score_suspicion},
    view::{NetworkView, ViewConfig},
};
use serde::Serialize;
use std::{collections::BTreeMap, fmt::Write};

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Records fed to the graph, duplicates included
    pub articles: usize,
    pub stats: GraphStats,
    pub suspicions: Suspicions,
    pub scores: BTreeMap<String, u32>,
    pub min_cluster_size: usize,
    pub clusters: Vec<Cluster>,
}

impl AnalysisReport {
    /// Plain text rendering for terminals.
    pub fn to_text(&self) -> Result<String, CoeditError> {
        let mut out = String::new();
        writeln!(out, "Loaded {} articles.", self.articles)?;
        writeln!(
            out,
            "Constructed graph with {} people, {} relations ({} editor->author, {} co-author).",
            self.stats.people, self.stats.relations, self.stats.editorial, self.stats.coauthor
        )?;

        writeln!(out, "\n--- Self Overlaps (editor=author in same issue) ---")?;
        for entry in self.suspicions.self_overlap.iter() {
            writeln!(out, "   [!] {} in issue: {}", entry.person, entry.issue)?;
        }

        writeln!(out, "\n--- Reciprocal Overlaps (mutual editing) ---")?;
        for entry in self.suspicions.reciprocal.iter() {
            writeln!(out, "   [!] {} <--> {}", entry.person_a, entry.person_b)?;
            writeln!(
                out,
                "       {} edited {} in: {}",
                entry.person_a,
                entry.person_b,
                join_venues(&entry.issues_a_edited_b)
            )?;
            writeln!(
                out,
                "       {} edited {} in: {}",
                entry.person_b,
                entry.person_a,
                join_venues(&entry.issues_b_edited_a)
            )?;
        }

        writeln!(out, "\n--- Suspicion Scores ---")?;
        for (person, score) in ranked(&self.scores) {
            writeln!(out, "   {person}: {score}")?;
        }

        if self.clusters.is_empty() {
            writeln!(
                out,
                "\nNo co-author clusters with {} or more members found.",
                self.min_cluster_size
            )?;
        } else {
            writeln!(out, "\n--- Potential Co-Author Clusters ---")?;
            for cluster in self.clusters.iter() {
                writeln!(
                    out,
                    "   Cluster size {}: {}",
                    cluster.len(),
                    cluster.members().join(", ")
                )?;
            }
        }
        Ok(out)
    }

    pub fn to_json(&self) -> Result<String, CoeditError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn join_venues(venues: &[Venue]) -> String {
    venues
        .iter()
        .map(|venue| venue.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub graph: CollabGraph,
    pub report: AnalysisReport,
}

impl Analysis {
    pub fn view(&self, config: &ViewConfig) -> NetworkView {
        NetworkView::build(&self.graph, &self.report.scores, config)
    }
}

pub fn analyze(records: &[ArticleRecord], config: &AnalysisConfig) -> Analysis {
    let mut builder = GraphBuilder::new();
    builder.add_records(records);
    let graph = builder.finish();

    let suspicions = detect_suspicious_patterns(&graph, &config.detection);
    let scores = score_suspicion(&suspicions, &config.scoring);
    let clusters = find_coauthor_clusters(&graph, config.clusters.min_size);
    tracing::info!(
        "[Analysis] {} articles, {} people flagged, {} clusters",
        records.len(),
        scores.len(),
        clusters.len()
    );

    let report = AnalysisReport {
        articles: records.len(),
        stats: graph.stats(),
        suspicions,
        scores,
        min_cluster_size: config.clusters.min_size,
        clusters,
    };
    Analysis { graph, report }
}
