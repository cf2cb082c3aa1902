//! # coedit-core
//!
//! A Rust library for spotting editor/author overlap and co-authorship communities in
//! bibliographic records.
//!
//! ## Overview
//!
//! Article records (title, venue, editors, authors) are turned into a directed graph of people.
//! Every editor of a record points at every author of it, and every pair of co-authors points at
//! each other. Two patterns are then looked for on the editorial edges:
//!
//! - **self overlap**: the same person edits and authors within one special issue
//! - **reciprocal overlap**: two people have each edited the other's work
//!
//! Each pattern adds to a per-person suspicion score, and the co-authorship edges are grouped
//! into connected clusters.
//!
//! ## Architecture
//!
//! - **[`properties`]**: records, people, venues and relationship kinds
//! - **[`ingest`]**: loading and merging corpus files, with per-source diagnostics
//! - **[`graph`]**: [`graph::GraphBuilder`] and the immutable [`graph::CollabGraph`]
//! - **[`detect`]**, **[`score`]**, **[`cluster`]**: the analyses
//! - **[`view`]**: the node/edge model handed to a network renderer
//! - **[`analysis`]**: the whole pipeline in one call
//! - **[`config`]**: TOML configuration for all of the above
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coedit_core::{analysis::analyze, config::AnalysisConfig, ingest::load_paths};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ingested = load_paths(&["energies.json", "sustainability.json"]);
//!     for diagnostic in ingested.diagnostics.iter() {
//!         eprintln!("{diagnostic}");
//!     }
//!
//!     let analysis = analyze(&ingested.records, &AnalysisConfig::default());
//!     print!("{}", analysis.report.to_text()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **default**: the library
//! - **bin**: the `coedit` command line tool

pub mod analysis;
pub mod cluster;
pub mod config;
pub mod detect;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod properties;
pub mod score;
#[cfg(test)]
mod tests;
pub mod view;

pub use error::*;
