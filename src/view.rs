//! Input for the network renderer.
//!
//! The renderer itself lives outside this crate. What it receives is a [NetworkView]: every
//! person with a colour tier derived from their suspicion score and a tooltip, and every edge
//! with a kind label, a metadata tooltip and arrowheads. Co-author relations already exist as
//! two directed edges, so drawing each edge with a single `to` arrow renders them symmetric.

use crate::{graph::CollabGraph, properties::RelationKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuspicionTier {
    Neutral,
    Warning,
    Critical,
}

impl SuspicionTier {
    /// 0 is neutral, anything from 1 up to `critical_threshold` is a warning, the rest critical.
    pub fn from_score(score: u32, critical_threshold: u32) -> SuspicionTier {
        if score == 0 {
            SuspicionTier::Neutral
        } else if score < critical_threshold {
            SuspicionTier::Warning
        } else {
            SuspicionTier::Critical
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SuspicionTier::Neutral => "#00ff00",
            SuspicionTier::Warning => "#ff9900",
            SuspicionTier::Critical => "#ff0000",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub critical_threshold: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            critical_threshold: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: String,
    pub label: String,
    pub score: u32,
    pub tier: SuspicionTier,
    pub color: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeView {
    pub from: String,
    pub to: String,
    pub label: String,
    pub title: String,
    pub arrows: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkView {
    pub directed: bool,
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

impl NetworkView {
    pub fn build(
        graph: &CollabGraph,
        scores: &BTreeMap<String, u32>,
        config: &ViewConfig,
    ) -> NetworkView {
        let nodes = graph
            .people()
            .map(|person| {
                let score = scores.get(&person.name).copied().unwrap_or_default();
                let tier = SuspicionTier::from_score(score, config.critical_threshold);
                NodeView {
                    id: person.name.clone(),
                    label: person.name.clone(),
                    score,
                    tier,
                    color: tier.color().to_string(),
                    title: format!("Suspicion: {score}"),
                }
            })
            .collect();

        let edges = graph
            .relations()
            .map(|relation| {
                let kinds = relation.relationship.kinds;
                // editorial wins the label when an edge carries both kinds
                let label = if kinds.contains(RelationKind::EditorToAuthor) {
                    "editor->author".to_string()
                } else if kinds.contains(RelationKind::CoAuthor) {
                    "co_author".to_string()
                } else {
                    kinds.to_string()
                };
                let issues = relation
                    .relationship
                    .issues
                    .iter()
                    .map(|venue| venue.as_str())
                    .collect::<Vec<_>>();
                EdgeView {
                    from: relation.source.to_string(),
                    to: relation.sink.to_string(),
                    label,
                    title: format!("{}, {issues:?}", relation.relationship.kinds_label()),
                    arrows: "to".to_string(),
                }
            })
            .collect();

        NetworkView {
            directed: true,
            nodes,
            edges,
        }
    }
}
