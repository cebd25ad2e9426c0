//! Outcome types produced by the runner

use crate::client::{OptimizationResult, Strategy};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Successful results of a strategy sweep, in the order they ran
///
/// Strategies whose call failed are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrategySweep {
    results: Vec<(Strategy, OptimizationResult)>,
}

impl StrategySweep {
    pub(crate) fn push(&mut self, strategy: Strategy, result: OptimizationResult) {
        self.results.push((strategy, result));
    }

    pub fn get(&self, strategy: Strategy) -> Option<&OptimizationResult> {
        self.results
            .iter()
            .find(|(s, _)| *s == strategy)
            .map(|(_, result)| result)
    }

    pub fn contains(&self, strategy: Strategy) -> bool {
        self.get(strategy).is_some()
    }

    pub fn strategies(&self) -> Vec<Strategy> {
        self.results.iter().map(|(s, _)| *s).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Strategy, OptimizationResult)> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Counters accumulated while the runner works
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub optimizations_attempted: usize,
    pub optimizations_succeeded: usize,
    pub saves_attempted: usize,
    pub saves_succeeded: usize,
}

/// Final outcome of `run_all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub base_url: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub api_reachable: bool,
    pub stats: RunStats,
    /// Strategies that produced a result in the sweep
    pub sweep_strategies: Vec<Strategy>,
    /// `None` when the run stopped before probing
    pub batch_available: Option<bool>,
    /// The sequence reached its final report
    pub completed: bool,
}
