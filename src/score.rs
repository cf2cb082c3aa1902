use crate::detect::Suspicions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Points added per detected pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Added to the implicated person for every self overlap entry
    pub self_overlap: u32,
    /// Added to each of the two people of every reciprocal entry
    pub reciprocal: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            self_overlap: 3,
            reciprocal: 2,
        }
    }
}

/// Sum the weights of every pattern a person appears in. People with no pattern are absent
/// from the map rather than scored zero.
pub fn score_suspicion(suspicions: &Suspicions, weights: &ScoreWeights) -> BTreeMap<String, u32> {
    let mut scores: BTreeMap<String, u32> = BTreeMap::new();
    for entry in suspicions.self_overlap.iter() {
        *scores.entry(entry.person.clone()).or_default() += weights.self_overlap;
    }
    for entry in suspicions.reciprocal.iter() {
        *scores.entry(entry.person_a.clone()).or_default() += weights.reciprocal;
        *scores.entry(entry.person_b.clone()).or_default() += weights.reciprocal;
    }
    scores
}

/// Scores ordered for display: highest first, ties by name.
pub fn ranked(scores: &BTreeMap<String, u32>) -> Vec<(&str, u32)> {
    let mut ranked = scores
        .iter()
        .map(|(person, score)| (person.as_str(), *score))
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
}
