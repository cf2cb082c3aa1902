//! The read-only collaboration graph produced by [super::GraphBuilder].

use crate::properties::{normalize_name, Person, RelationKind, Relationship};
use petgraph::{graph::NodeIndex, graphmap::DiGraphMap, Directed};
use serde::Serialize;
use std::collections::BTreeMap;

pub type PersonGraph = petgraph::Graph<Person, Relationship, Directed>;

/// Edges of one [RelationKind], keyed by normalized name. Edge weights are the venue counts.
pub type KindSubGraph<'a> = DiGraphMap<&'a str, usize>;

/// An immutable snapshot of people and their relationships. Obtain one from
/// [super::GraphBuilder::finish] or [CollabGraph::from_records].
#[derive(Debug, Clone, Default)]
pub struct CollabGraph {
    pub(super) graph: PersonGraph,
    pub(super) index: BTreeMap<String, NodeIndex>,
}

/// Borrowed view of one directed edge
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RelationRef<'a> {
    pub source: &'a str,
    pub sink: &'a str,
    #[serde(flatten)]
    pub relationship: &'a Relationship,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub people: usize,
    pub relations: usize,
    /// Edges carrying [RelationKind::EditorToAuthor]
    pub editorial: usize,
    /// Edges carrying [RelationKind::CoAuthor]; each co-authorship counts once per direction
    pub coauthor: usize,
}

/// Serializable form of the whole graph
#[derive(Debug, Serialize)]
pub struct GraphExport<'a> {
    pub people: Vec<&'a Person>,
    pub relations: Vec<RelationRef<'a>>,
}

impl CollabGraph {
    pub fn person_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn relation_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Look up a person. The name is normalized first, so any spelling that normalizes to the
    /// same key finds the same node.
    pub fn person(&self, name: &str) -> Option<&Person> {
        self.index
            .get(&normalize_name(name))
            .map(|idx| &self.graph[*idx])
    }

    /// People in name order
    pub fn people(&self) -> impl Iterator<Item = &Person> + '_ {
        self.index.values().map(move |idx| &self.graph[*idx])
    }

    pub fn relationship(&self, source: &str, sink: &str) -> Option<&Relationship> {
        let source_idx = self.index.get(&normalize_name(source))?;
        let sink_idx = self.index.get(&normalize_name(sink))?;
        self.graph
            .find_edge(*source_idx, *sink_idx)
            .map(|edge_idx| &self.graph[edge_idx])
    }

    /// All edges in creation order
    pub fn relations(&self) -> impl Iterator<Item = RelationRef<'_>> + '_ {
        self.graph.raw_edges().iter().map(move |edge| RelationRef {
            source: &self.graph[edge.source()].name,
            sink: &self.graph[edge.target()].name,
            relationship: &edge.weight,
        })
    }

    /// Edges whose kind set includes `kind`, whatever else they carry
    pub fn relations_of_kind(
        &self,
        kind: RelationKind,
    ) -> impl Iterator<Item = RelationRef<'_>> + '_ {
        self.relations()
            .filter(move |relation| relation.relationship.has(kind))
    }

    /// The subgraph induced by the edges of one kind, over exactly those edges' endpoints.
    pub fn as_subgraph(&self, kind: RelationKind) -> KindSubGraph<'_> {
        KindSubGraph::from_edges(self.relations_of_kind(kind).map(|relation| {
            (
                relation.source,
                relation.sink,
                relation.relationship.contributions(),
            )
        }))
    }

    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            people: self.person_count(),
            relations: self.relation_count(),
            ..Default::default()
        };
        for relation in self.relations() {
            if relation.relationship.kinds.is_editorial() {
                stats.editorial += 1;
            }
            if relation.relationship.kinds.is_coauthorship() {
                stats.coauthor += 1;
            }
        }
        stats
    }

    pub fn export(&self) -> GraphExport<'_> {
        GraphExport {
            people: self.people().collect(),
            relations: self.relations().collect(),
        }
    }

    /// Aligned, human readable edge listing for debugging and verbose CLI output.
    pub fn display_contents(&self) -> String {
        let edge_tuple = self
            .relations()
            .map(|relation| {
                (
                    relation.source,
                    relation.sink,
                    format!(
                        "{} x{}",
                        relation.relationship.kinds,
                        relation.relationship.contributions()
                    ),
                )
            })
            .collect::<Vec<(&str, &str, String)>>();
        let source_max_len = edge_tuple
            .iter()
            .map(|elem| elem.0.chars().count())
            .max()
            .unwrap_or_default();
        let sink_max_len = edge_tuple
            .iter()
            .map(|elem| elem.1.chars().count())
            .max()
            .unwrap_or_default();
        let edge_display = edge_tuple
            .iter()
            .map(|(source, sink, kinds)| {
                format!("{source:>source_max_len$} -> {sink:<sink_max_len$}: {kinds}")
            })
            .collect::<Vec<String>>()
            .join("\n- ");

        format!(
            "people:\n- {},\nrelations:\n- {}",
            self.people()
                .map(|p| format!(
                    "{} (editor {}, author {})",
                    p.name, p.editor_count, p.author_count
                ))
                .collect::<Vec<String>>()
                .join(",\n- "),
            edge_display
        )
    }
}
