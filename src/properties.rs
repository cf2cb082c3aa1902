//! [crate::properties] contains the basic building blocks of the collaboration graph: the
//! people (nodes), their relationships (edges), and the article records both are derived from.

pub use enumset::EnumSet;
use enumset::*;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    ops::{Deref, DerefMut},
};

/// Reduce a raw name string to the identity key of a [Person]. Distinct people sharing a
/// normalized name collapse into one node.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A publication venue: one special issue of one journal. Only ever compared by literal string
/// equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Venue(String);

impl Venue {
    pub fn new(journal: &str, special_issue: &str) -> Venue {
        Venue(format!("{journal} :: {special_issue}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Venue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Venue {
    fn from(src: &str) -> Self {
        Venue(src.to_string())
    }
}

/// One article as produced by the scraper. Every field is optional in the source JSON; missing
/// fields take their empty default and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleRecord {
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub link: String,
    pub journal: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub year: String,
    pub special_issue: String,
    pub editors: Vec<String>,
    pub authors: Vec<String>,
}

impl ArticleRecord {
    pub fn venue(&self) -> Venue {
        Venue::new(&self.journal, &self.special_issue)
    }

    pub fn normalized_editors(&self) -> Vec<String> {
        self.editors.iter().map(|name| normalize_name(name)).collect()
    }

    pub fn normalized_authors(&self) -> Vec<String> {
        self.authors.iter().map(|name| normalize_name(name)).collect()
    }
}

/// A node of the collaboration graph, keyed by normalized name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    /// Number of article records listing this person as an editor
    pub editor_count: u32,
    /// Number of article records listing this person as an author
    pub author_count: u32,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Person {
        Person {
            name: name.into(),
            editor_count: 0,
            author_count: 0,
        }
    }
}

/// [RelationKind] enumerates the kinds of person to person relationship an edge can carry. A
/// single edge holds an [EnumSet] of these, so one ordered pair can be both at once.
#[derive(Debug, Serialize, Deserialize, PartialOrd, Ord, Hash, EnumSetType)]
#[enumset(serialize_repr = "list")]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Source edited an article the sink authored. Directed, never mirrored.
    EditorToAuthor,
    /// Source and sink wrote an article together. Always stored in both directions.
    CoAuthor,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::EditorToAuthor => "editor_to_author",
            RelationKind::CoAuthor => "co_author",
        }
    }
}

impl Display for RelationKind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationKindSet(pub EnumSet<RelationKind>);

impl RelationKindSet {
    pub fn is_editorial(&self) -> bool {
        self.0.contains(RelationKind::EditorToAuthor)
    }

    pub fn is_coauthorship(&self) -> bool {
        self.0.contains(RelationKind::CoAuthor)
    }
}

impl Deref for RelationKindSet {
    type Target = EnumSet<RelationKind>;
    fn deref(&self) -> &EnumSet<RelationKind> {
        &self.0
    }
}

impl DerefMut for RelationKindSet {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<RelationKind> for RelationKindSet {
    fn from(kind: RelationKind) -> Self {
        RelationKindSet(EnumSet::only(kind))
    }
}

impl From<EnumSet<RelationKind>> for RelationKindSet {
    fn from(kinds: EnumSet<RelationKind>) -> Self {
        RelationKindSet(kinds)
    }
}

/// Comma separated kind names, e.g. `editor_to_author,co_author`.
impl Display for RelationKindSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names = self.0.iter().map(|kind| kind.as_str()).collect::<Vec<_>>();
        write!(f, "{}", names.join(","))
    }
}

/// [Relationship] is the edge payload of the collaboration graph. Each article record that
/// touches the ordered pair appends one venue and one title, so `issues` and `titles` always
/// have the same length and keep duplicates. `origins` runs parallel to both and records which
/// kind of relation each contribution came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub kinds: RelationKindSet,
    pub issues: Vec<Venue>,
    pub titles: Vec<String>,
    #[serde(default)]
    pub origins: Vec<RelationKind>,
}

impl Relationship {
    pub fn new(kind: RelationKind, venue: Venue, title: String) -> Relationship {
        Relationship {
            kinds: kind.into(),
            issues: vec![venue],
            titles: vec![title],
            origins: vec![kind],
        }
    }

    /// Fold one more contributing record into this edge. The kind is added only if missing; the
    /// venue and title are always appended.
    pub fn record(&mut self, kind: RelationKind, venue: Venue, title: String) {
        self.kinds.insert(kind);
        self.issues.push(venue);
        self.titles.push(title);
        self.origins.push(kind);
    }

    /// Kinds in the order they were first attached to this edge. Falls back to the kind set
    /// order when no origins were recorded.
    pub fn attached_kinds(&self) -> Vec<RelationKind> {
        let mut attached = Vec::with_capacity(self.kinds.len());
        for kind in self.origins.iter().copied().chain(self.kinds.iter()) {
            if !attached.contains(&kind) {
                attached.push(kind);
            }
        }
        attached
    }

    /// Comma separated kind names in attachment order, e.g. `co_author,editor_to_author`.
    pub fn kinds_label(&self) -> String {
        self.attached_kinds()
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn has(&self, kind: RelationKind) -> bool {
        self.kinds.contains(kind)
    }

    pub fn contributions(&self) -> usize {
        self.issues.len()
    }

    /// Venues contributed by records of one relation kind only
    pub fn issues_of(&self, kind: RelationKind) -> impl Iterator<Item = &Venue> + '_ {
        self.issues
            .iter()
            .zip(self.origins.iter())
            .filter(move |(_, origin)| **origin == kind)
            .map(|(venue, _)| venue)
    }
}
