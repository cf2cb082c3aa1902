//! Record ingestion: reading article records from one or more sources and concatenating them.
//!
//! A source that cannot be read, or whose content cannot be parsed, is reported as a
//! [SourceDiagnostic] and skipped. Nothing in here fails the whole load; with no usable source
//! the result is simply empty.

use crate::{error::CoeditError, properties::ArticleRecord};
use std::{
    fmt::{Display, Formatter},
    fs::{read, write},
    path::{Path, PathBuf},
};

/// Anything that can hand over a batch of article records.
pub trait RecordSource {
    /// Human readable name used in diagnostics and logs
    fn label(&self) -> String;

    fn load(&self) -> Result<Vec<ArticleRecord>, CoeditError>;
}

/// A persisted corpus file: a JSON array of [ArticleRecord]s.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<ArticleRecord>, CoeditError> {
        if !self.path.exists() {
            return Err(CoeditError::NotFound(format!(
                "File not found -> {}",
                self.path.display()
            )));
        }
        // invalid UTF-8 surfaces as a parse error, not an io error
        let content = read(&self.path)?;
        Ok(serde_json::from_slice(&content)?)
    }
}

impl RecordSource for Vec<ArticleRecord> {
    fn label(&self) -> String {
        format!("<memory: {} records>", self.len())
    }

    fn load(&self) -> Result<Vec<ArticleRecord>, CoeditError> {
        Ok(self.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceProblem {
    /// The source is missing or could not be read
    Unavailable,
    /// The source was read but its content is not a record array
    Malformed,
}

/// Why a source contributed nothing to an ingestion pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDiagnostic {
    pub source: String,
    pub problem: SourceProblem,
    pub error: CoeditError,
}

impl Display for SourceDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.problem {
            SourceProblem::Unavailable => write!(f, "source unavailable {}: {}", self.source, self.error),
            SourceProblem::Malformed => write!(f, "malformed source {}: {}", self.source, self.error),
        }
    }
}

/// Result of an ingestion pass
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    /// All records of all usable sources, in source order, duplicates kept
    pub records: Vec<ArticleRecord>,
    pub diagnostics: Vec<SourceDiagnostic>,
    /// Number of sources that contributed (possibly zero records)
    pub loaded_sources: usize,
}

impl Ingested {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Load every source exactly once and concatenate the records. Failures are logged and recorded
/// as diagnostics; a failed source contributes nothing, not even a partial record list.
pub fn load_and_merge<S: RecordSource>(sources: &[S]) -> Ingested {
    let mut ingested = Ingested::default();
    for source in sources {
        let label = source.label();
        match source.load() {
            Ok(records) => {
                tracing::debug!("[Ingest] {} records from {}", records.len(), label);
                ingested.records.extend(records);
                ingested.loaded_sources += 1;
            }
            Err(error) => {
                let problem = if error.is_unavailable() {
                    SourceProblem::Unavailable
                } else {
                    SourceProblem::Malformed
                };
                let diagnostic = SourceDiagnostic {
                    source: label,
                    problem,
                    error,
                };
                tracing::warn!("[Ingest] Skipping {}", diagnostic);
                ingested.diagnostics.push(diagnostic);
            }
        }
    }
    tracing::info!(
        "[Ingest] Loaded {} articles from {} of {} sources",
        ingested.records.len(),
        ingested.loaded_sources,
        sources.len()
    );
    ingested
}

/// Convenience wrapper over [load_and_merge] for corpus files on disk.
pub fn load_paths<P: AsRef<Path>>(paths: &[P]) -> Ingested {
    let sources = paths
        .iter()
        .map(|path| JsonFileSource::new(path.as_ref()))
        .collect::<Vec<_>>();
    load_and_merge(&sources)
}

pub fn parse_corpus(content: &str) -> Result<Vec<ArticleRecord>, CoeditError> {
    Ok(serde_json::from_str(content)?)
}

/// Serialize records in the persisted corpus format: a single-line JSON array with non-ASCII
/// characters written literally.
pub fn corpus_to_string(records: &[ArticleRecord]) -> Result<String, CoeditError> {
    Ok(serde_json::to_string(records)?)
}

pub fn write_corpus<P: AsRef<Path>>(path: P, records: &[ArticleRecord]) -> Result<(), CoeditError> {
    tracing::debug!(
        "[Ingest] Writing {} records to {:?}",
        records.len(),
        path.as_ref()
    );
    write(path, corpus_to_string(records)?)?;
    Ok(())
}
