use crate::location::Side;
use crate::river::River;
use serde::Serialize;

/// One boat trip: who went, from where, to where
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crossing {
    pub from: Side,
    pub to: Side,
    /// Species aboard, sorted
    pub passengers: Vec<String>,
}

/// A state on a solution path
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub index: usize,
    pub fingerprint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crossing: Option<Crossing>,
    #[serde(skip)]
    pub river: River,
}

/// Counters collected during a search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// States taken off the frontier and expanded
    pub expanded: usize,
    /// Valid children put on the frontier
    pub generated: usize,
    /// States skipped because their fingerprint was already expanded
    pub duplicates: usize,
    pub pruned_no_navigator: usize,
    pub pruned_death: usize,
    pub max_frontier: usize,
    pub elapsed_ms: u64,
}

/// A minimal sequence of crossings from start to goal
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub steps: Vec<Step>,
    pub stats: SearchStats,
}

impl Solution {
    /// Number of boat trips (one less than the number of states)
    pub fn crossings(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Canonical fingerprints from start to goal inclusive
    pub fn fingerprints(&self) -> Vec<&str> {
        self.steps
            .iter()
            .map(|step| step.fingerprint.as_str())
            .collect()
    }
}

/// What a search ends with
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Solved(Solution),
    NoSolution { stats: SearchStats },
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            Outcome::NoSolution { .. } => None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            Outcome::Solved(solution) => &solution.stats,
            Outcome::NoSolution { stats } => stats,
        }
    }
}
