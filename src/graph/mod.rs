//! Graph module: the person/relationship graph built from article records.
//!
//! # Module Organization
//!
//! - [`builder`]: [`GraphBuilder`], the only stage that mutates a graph
//! - [`collab`]: [`CollabGraph`], the immutable snapshot every analysis reads
//!
//! ```rust
//! use coedit_core::{graph::CollabGraph, properties::{ArticleRecord, RelationKind}};
//!
//! let record = ArticleRecord {
//!     title: "Wind".to_string(),
//!     journal: "Energies".to_string(),
//!     special_issue: "Offshore".to_string(),
//!     editors: vec!["Alice".to_string()],
//!     authors: vec!["Bob".to_string(), "Carol".to_string()],
//!     ..Default::default()
//! };
//! let graph = CollabGraph::from_records(&[record]);
//! assert!(graph.relationship("alice", "bob").unwrap().has(RelationKind::EditorToAuthor));
//! assert!(graph.relationship("carol", "bob").unwrap().has(RelationKind::CoAuthor));
//! ```

mod builder;
mod collab;


pub use builder::GraphBuilder;
pub use collab::{CollabGraph, GraphExport, GraphStats, KindSubGraph, PersonGraph, RelationRef};
