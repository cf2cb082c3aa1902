//! Co-authorship communities.
//!
//! Co-author edges are pulled out of the [CollabGraph], direction is dropped (every co-author
//! relation is stored both ways, so nothing is lost), and the connected components of what
//! remains are the clusters. Components below the configured size are trivial and dropped.

use crate::{graph::CollabGraph, properties::RelationKind};
use petgraph::{
    graphmap::UnGraphMap,
    visit::{depth_first_search, DfsEvent},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Smallest component reported by default. Pairs are the trivial case.
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 3;

/// A group of people transitively connected by co-authorship, members in name order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cluster(pub Vec<String>);

impl Cluster {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn members(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.binary_search_by(|member| member.as_str().cmp(name)).is_ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    pub min_size: usize,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        ClusterConfig {
            min_size: DEFAULT_MIN_CLUSTER_SIZE,
        }
    }
}

/// The undirected co-authorship graph: one edge per co-authoring pair, whatever other kinds the
/// underlying directed edges carry.
pub fn coauthor_graph(graph: &CollabGraph) -> UnGraphMap<&str, ()> {
    let directed = graph.as_subgraph(RelationKind::CoAuthor);
    UnGraphMap::from_edges(directed.all_edges().map(|(source, sink, _)| (source, sink)))
}

/// Every connected component of the co-authorship graph, including pairs.
pub fn coauthor_components(graph: &CollabGraph) -> Vec<BTreeSet<&str>> {
    let undirected = coauthor_graph(graph);
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut components = Vec::new();
    for start in undirected.nodes() {
        if seen.contains(start) {
            continue;
        }
        let mut component = BTreeSet::new();
        depth_first_search(&undirected, Some(start), |event| {
            if let DfsEvent::Discover(name, _) = event {
                component.insert(name);
            }
        });
        seen.extend(component.iter().copied());
        components.push(component);
    }
    components
}

/// Components with at least `min_size` members, largest first and then by first member.
pub fn find_coauthor_clusters(graph: &CollabGraph, min_size: usize) -> Vec<Cluster> {
    let mut clusters = coauthor_components(graph)
        .into_iter()
        .filter(|component| component.len() >= min_size)
        .map(|component| Cluster(component.into_iter().map(str::to_string).collect()))
        .collect::<Vec<_>>();
    clusters.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.0.cmp(&b.0)));
    tracing::info!(
        "[Cluster] {} co-author clusters of {} or more",
        clusters.len(),
        min_size
    );
    clusters
}
