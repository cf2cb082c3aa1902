use crate::properties::{ArticleRecord, Person, RelationKind, Relationship, Venue};
use petgraph::graph::NodeIndex;
use std::collections::BTreeMap;

use super::collab::{CollabGraph, PersonGraph};

/// [GraphBuilder] folds article records into a collaboration graph one record at a time and hands
/// back an immutable [CollabGraph] once every record is in. Nodes and edges are only ever added
/// or extended, never removed.
///
/// Per record:
/// 1. every editor and author name is normalized and gets a node, bumping `editor_count` or
///    `author_count` for each listing;
/// 2. every (editor, author) pair gets an `editor -> author` edge tagged
///    [RelationKind::EditorToAuthor];
/// 3. every unordered pair of distinct authors gets edges in both directions tagged
///    [RelationKind::CoAuthor].
///
/// When an edge for the ordered pair already exists, the kind joins its kind set and the record's
/// venue and title are appended, so the metadata lists grow by one per contributing record.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: PersonGraph,
    index: BTreeMap<String, NodeIndex>,
    records: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records folded in so far
    pub fn record_count(&self) -> usize {
        self.records
    }

    fn person_index(&mut self, name: &str) -> NodeIndex {
        if let Some(idx) = self.index.get(name) {
            return *idx;
        }
        let idx = self.graph.add_node(Person::new(name));
        self.index.insert(name.to_string(), idx);
        idx
    }

    fn relate(
        &mut self,
        source: NodeIndex,
        sink: NodeIndex,
        kind: RelationKind,
        venue: &Venue,
        title: &str,
    ) {
        match self.graph.find_edge(source, sink) {
            Some(edge_idx) => {
                self.graph[edge_idx].record(kind, venue.clone(), title.to_string());
            }
            None => {
                self.graph.add_edge(
                    source,
                    sink,
                    Relationship::new(kind, venue.clone(), title.to_string()),
                );
            }
        }
    }

    pub fn add_record(&mut self, record: &ArticleRecord) -> &mut Self {
        let venue = record.venue();
        let editors = record
            .normalized_editors()
            .iter()
            .map(|name| {
                let idx = self.person_index(name);
                self.graph[idx].editor_count += 1;
                idx
            })
            .collect::<Vec<_>>();
        let authors = record
            .normalized_authors()
            .iter()
            .map(|name| {
                let idx = self.person_index(name);
                self.graph[idx].author_count += 1;
                idx
            })
            .collect::<Vec<_>>();

        // Self-loops are kept here: an editor of their own article is exactly what overlap
        // detection looks for.
        for editor in editors.iter() {
            for author in authors.iter() {
                self.relate(
                    *editor,
                    *author,
                    RelationKind::EditorToAuthor,
                    &venue,
                    &record.title,
                );
            }
        }

        for (i, first) in authors.iter().enumerate() {
            for second in authors[i + 1..].iter() {
                if first == second {
                    tracing::debug!(
                        "[Graph] '{}' listed twice as author of '{}'",
                        self.graph[*first].name,
                        record.title
                    );
                    continue;
                }
                self.relate(*first, *second, RelationKind::CoAuthor, &venue, &record.title);
                self.relate(*second, *first, RelationKind::CoAuthor, &venue, &record.title);
            }
        }

        self.records += 1;
        self
    }

    pub fn add_records<'a, I>(&mut self, records: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a ArticleRecord>,
    {
        for record in records {
            self.add_record(record);
        }
        self
    }

    pub fn finish(self) -> CollabGraph {
        tracing::info!(
            "[Graph] Constructed graph with {} people, {} relations from {} records",
            self.graph.node_count(),
            self.graph.edge_count(),
            self.records
        );
        CollabGraph {
            graph: self.graph,
            index: self.index,
        }
    }
}

impl CollabGraph {
    pub fn from_records(records: &[ArticleRecord]) -> CollabGraph {
        let mut builder = GraphBuilder::new();
        builder.add_records(records);
        builder.finish()
    }
}
