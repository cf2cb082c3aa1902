//! Suspicious pattern detection over the editor-to-author edges of a [CollabGraph].
//!
//! Two patterns are looked for:
//! - **self overlap**: one person holds both the editor and the author role at the same venue;
//! - **reciprocal overlap**: A edited something B authored and B edited something A authored,
//!   at any venues.
//!
//! Co-author edges play no part here. Output is ordered (by person then venue, and by pair), so
//! repeated runs over the same graph give identical results.

use crate::{
    graph::CollabGraph,
    properties::{RelationKind, Relationship, Venue},
};
use enumset::{EnumSet, EnumSetType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Hash, EnumSetType)]
pub enum Role {
    Editor,
    Author,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SelfOverlap {
    pub person: String,
    pub issue: Venue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReciprocalOverlap {
    #[serde(rename = "personA")]
    pub person_a: String,
    #[serde(rename = "personB")]
    pub person_b: String,
    /// Venues of the records in which A edited B's work, one entry per record
    #[serde(rename = "issues_A_ed_B")]
    pub issues_a_edited_b: Vec<Venue>,
    /// Venues of the records in which B edited A's work, one entry per record
    #[serde(rename = "issues_B_ed_A")]
    pub issues_b_edited_a: Vec<Venue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suspicions {
    pub self_overlap: Vec<SelfOverlap>,
    pub reciprocal: Vec<ReciprocalOverlap>,
}

impl Suspicions {
    pub fn is_empty(&self) -> bool {
        self.self_overlap.is_empty() && self.reciprocal.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Report each mutually-editing pair once (A < B by name) instead of once per ordering.
    pub dedupe_reciprocal: bool,
    /// Only count venues that reached an edge through an editor listing. When false, every venue
    /// of an editor-to-author edge counts, including venues the same pair shares as co-authors.
    pub editorial_venues_only: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        DetectionConfig {
            dedupe_reciprocal: true,
            editorial_venues_only: false,
        }
    }
}

fn editorial_issues(relationship: &Relationship, editorial_only: bool) -> Vec<&Venue> {
    if editorial_only {
        relationship.issues_of(RelationKind::EditorToAuthor).collect()
    } else {
        relationship.issues.iter().collect()
    }
}

/// person -> venue -> roles held there, from editor-to-author edges only
pub fn person_venue_roles(
    graph: &CollabGraph,
    editorial_only: bool,
) -> BTreeMap<&str, BTreeMap<&Venue, EnumSet<Role>>> {
    let mut roles: BTreeMap<&str, BTreeMap<&Venue, EnumSet<Role>>> = BTreeMap::new();
    for relation in graph.relations_of_kind(RelationKind::EditorToAuthor) {
        for venue in editorial_issues(relation.relationship, editorial_only) {
            roles
                .entry(relation.source)
                .or_default()
                .entry(venue)
                .or_default()
                .insert(Role::Editor);
            roles
                .entry(relation.sink)
                .or_default()
                .entry(venue)
                .or_default()
                .insert(Role::Author);
        }
    }
    roles
}

/// One entry per distinct (person, venue) in which the person both edited and authored.
pub fn find_self_overlaps(graph: &CollabGraph, editorial_only: bool) -> Vec<SelfOverlap> {
    person_venue_roles(graph, editorial_only)
        .into_iter()
        .flat_map(|(person, venues)| {
            venues
                .into_iter()
                .filter(|(_, roles)| roles.contains(Role::Editor) && roles.contains(Role::Author))
                .map(move |(venue, _)| SelfOverlap {
                    person: person.to_string(),
                    issue: venue.clone(),
                })
        })
        .collect()
}

pub fn find_reciprocal_overlaps(
    graph: &CollabGraph,
    config: &DetectionConfig,
) -> Vec<ReciprocalOverlap> {
    let mut editor_author: BTreeMap<(&str, &str), Vec<&Venue>> = BTreeMap::new();
    for relation in graph.relations_of_kind(RelationKind::EditorToAuthor) {
        editor_author
            .entry((relation.source, relation.sink))
            .or_default()
            .extend(editorial_issues(
                relation.relationship,
                config.editorial_venues_only,
            ));
    }

    let mut reported: BTreeSet<(&str, &str)> = BTreeSet::new();
    let mut found = Vec::new();
    for ((a, b), issues_ab) in editor_author.iter() {
        // a self-loop is a self overlap, not a pair
        if a == b {
            continue;
        }
        let Some(issues_ba) = editor_author.get(&(*b, *a)) else {
            continue;
        };
        if config.dedupe_reciprocal && !reported.insert(if a < b { (*a, *b) } else { (*b, *a) }) {
            continue;
        }
        found.push(ReciprocalOverlap {
            person_a: a.to_string(),
            person_b: b.to_string(),
            issues_a_edited_b: issues_ab.iter().map(|v| (*v).clone()).collect(),
            issues_b_edited_a: issues_ba.iter().map(|v| (*v).clone()).collect(),
        });
    }
    found
}

pub fn detect_suspicious_patterns(graph: &CollabGraph, config: &DetectionConfig) -> Suspicions {
    let suspicions = Suspicions {
        self_overlap: find_self_overlaps(graph, config.editorial_venues_only),
        reciprocal: find_reciprocal_overlaps(graph, config),
    };
    tracing::info!(
        "[Detect] {} self overlaps, {} reciprocal overlaps",
        suspicions.self_overlap.len(),
        suspicions.reciprocal.len()
    );
    suspicions
}
