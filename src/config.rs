use crate::{
    cluster::ClusterConfig, detect::DetectionConfig, error::CoeditError, score::ScoreWeights,
    view::ViewConfig,
};
use serde::{Deserialize, Serialize};
use std::{
    fs::{read_to_string, write},
    path::{Path, PathBuf},
};

/// Everything an analysis run can be tuned with. Each section falls back to its defaults when
/// absent from the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Corpus files used when none are given on the command line
    pub sources: Vec<PathBuf>,
    pub detection: DetectionConfig,
    pub scoring: ScoreWeights,
    pub clusters: ClusterConfig,
    pub view: ViewConfig,
}

impl AnalysisConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, CoeditError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, CoeditError> {
        Ok(toml::to_string(self)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfigProvider {
    path: PathBuf,
}

impl TomlConfigProvider {
    pub fn new(path: PathBuf) -> Self {
        TomlConfigProvider { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_config(&self) -> Result<AnalysisConfig, CoeditError> {
        tracing::debug!("Attempting to read config from: {:?}", &self.path);
        if !self.path.exists() {
            tracing::debug!("Config file not found, using defaults.");
            return Ok(AnalysisConfig::default());
        }
        let content = read_to_string(&self.path)?;
        AnalysisConfig::from_toml_str(&content)
    }

    pub fn set_config(&self, config: &AnalysisConfig) -> Result<(), CoeditError> {
        tracing::debug!("Attempting to write config to: {:?}", &self.path);
        write(&self.path, config.to_toml_string()?)?;
        Ok(())
    }
}
