//! Learning plans and the user's progress through them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPathStep {
    pub month: u32,
    pub title: String,
    pub description: String,
    pub resources: Vec<Resource>,
}

/// An ordered plan. Steps are kept sorted by `month` whatever order they were
/// generated in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LearningPathStep>", into = "Vec<LearningPathStep>")]
pub struct LearningPath {
    steps: Vec<LearningPathStep>,
}

impl From<Vec<LearningPathStep>> for LearningPath {
    fn from(mut steps: Vec<LearningPathStep>) -> Self {
        steps.sort_by_key(|s| s.month);
        Self { steps }
    }
}

impl From<LearningPath> for Vec<LearningPathStep> {
    fn from(path: LearningPath) -> Self {
        path.steps
    }
}

impl LearningPath {
    pub fn steps(&self) -> &[LearningPathStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn months(&self) -> BTreeSet<u32> {
        self.steps.iter().map(|s| s.month).collect()
    }

    pub fn contains_month(&self, month: u32) -> bool {
        self.steps.iter().any(|s| s.month == month)
    }

    /// Returns the first month that breaks the "positive and unique" rule.
    pub fn invalid_month(&self) -> Option<u32> {
        let mut seen = BTreeSet::new();
        self.steps
            .iter()
            .map(|s| s.month)
            .find(|&m| m == 0 || !seen.insert(m))
    }

    /// Splits the plan into (completed, pending) steps.
    pub fn partition(
        &self,
        completed: &CompletedSteps,
    ) -> (Vec<&LearningPathStep>, Vec<&LearningPathStep>) {
        self.steps
            .iter()
            .partition(|s| completed.contains(s.month))
    }
}

/// Months the user has ticked off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedSteps(BTreeSet<u32>);

impl CompletedSteps {
    /// Builds the set, dropping months the path does not have.
    pub fn for_path(months: impl IntoIterator<Item = u32>, path: &LearningPath) -> Self {
        Self(
            months
                .into_iter()
                .filter(|m| path.contains_month(*m))
                .collect(),
        )
    }

    pub fn contains(&self, month: u32) -> bool {
        self.0.contains(&month)
    }

    /// Flips `month`; returns whether it is now completed.
    pub fn toggle(&mut self, month: u32) -> bool {
        if self.0.remove(&month) {
            false
        } else {
            self.0.insert(month);
            true
        }
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.0.iter().copied().collect()
    }
}

/// Percentage of the plan completed: round(100 * |C ∩ months(P)| / |P|), 0 for an empty plan.
pub fn progress(completed: &CompletedSteps, path: &LearningPath) -> u8 {
    if path.is_empty() {
        return 0;
    }
    let done = path
        .months()
        .iter()
        .filter(|m| completed.contains(**m))
        .count();
    (100.0 * done as f64 / path.len() as f64).round() as u8
}
