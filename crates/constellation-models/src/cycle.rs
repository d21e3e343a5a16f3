use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::improvement::Improvement;
use crate::intelligence::IntelligenceSnapshot;
use crate::pattern::Pattern;
use crate::strategy::Strategy;

pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// How many items existed at each stage of a cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CycleSummary {
    pub intelligence_gathered: usize,
    pub patterns_identified: usize,
    pub strategies_generated: usize,
    pub improvements_executed: usize,
}

/// Full record of a single optimization cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CycleReport {
    pub cycle_id: Uuid,
    pub schema_version: u32,
    pub started_at: DateTime<Utc>,
    pub snapshot: IntelligenceSnapshot,
    pub patterns: Vec<Pattern>,
    pub strategies: Vec<Strategy>,
    pub improvements: Vec<Improvement>,
    pub elapsed_ms: u64,
}

impl CycleReport {
    pub fn summary(&self) -> CycleSummary {
        CycleSummary {
            intelligence_gathered: self.snapshot.len(),
            patterns_identified: self.patterns.len(),
            strategies_generated: self.strategies.len(),
            improvements_executed: self.improvements.len(),
        }
    }

    /// True when every applied strategy reported success.
    pub fn all_succeeded(&self) -> bool {
        self.improvements.iter().all(|i| i.success)
    }
}
