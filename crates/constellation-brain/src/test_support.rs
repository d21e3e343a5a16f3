//! Mock stage implementations for exercising the brain without real data
//! sources or side effects.

use std::sync::Mutex;

use async_trait::async_trait;
use constellation_models::improvement::Improvement;
use constellation_models::intelligence::IntelligenceCategory;
use constellation_models::strategy::Strategy;

use crate::collectors::{IntelligenceCollector, Metrics};
use crate::error::BrainError;
use crate::executor::StrategyExecutor;
use crate::learner::Learner;

/// Collector that succeeds with an empty mapping.
pub struct EmptyCollector {
    pub category: IntelligenceCategory,
}

impl EmptyCollector {
    pub fn new(category: IntelligenceCategory) -> Self {
        Self { category }
    }
}

#[async_trait]
impl IntelligenceCollector for EmptyCollector {
    fn category(&self) -> IntelligenceCategory {
        self.category
    }

    async fn collect(&self) -> Result<Metrics, BrainError> {
        Ok(Metrics::new())
    }
}

/// Collector that always errors.
pub struct FailingCollector {
    pub category: IntelligenceCategory,
}

impl FailingCollector {
    pub fn new(category: IntelligenceCategory) -> Self {
        Self { category }
    }
}

#[async_trait]
impl IntelligenceCollector for FailingCollector {
    fn category(&self) -> IntelligenceCategory {
        self.category
    }

    async fn collect(&self) -> Result<Metrics, BrainError> {
        Err(BrainError::Collection {
            category: self.category.to_string(),
            reason: "Mock failure".to_string(),
        })
    }
}

/// Executor that errors on one named strategy and succeeds on the rest.
pub struct FailingExecutor {
    pub fail_on: String,
}

impl FailingExecutor {
    pub fn new(fail_on: &str) -> Self {
        Self {
            fail_on: fail_on.to_string(),
        }
    }
}

#[async_trait]
impl StrategyExecutor for FailingExecutor {
    async fn implement(&self, strategy: &Strategy) -> Result<bool, BrainError> {
        if strategy.description == self.fail_on {
            return Err(BrainError::Execution(format!(
                "Mock failure: {}",
                strategy.description
            )));
        }
        Ok(true)
    }
}

/// Learner that keeps every batch it is handed.
#[derive(Default)]
pub struct RecordingLearner {
    batches: Mutex<Vec<Vec<Improvement>>>,
}

impl RecordingLearner {
    pub fn calls(&self) -> usize {
        self.batches.lock().map(|b| b.len()).unwrap_or(0)
    }

    /// All improvements seen so far, flattened in arrival order.
    pub fn seen(&self) -> Vec<Improvement> {
        self.batches
            .lock()
            .map(|b| b.iter().flatten().cloned().collect())
            .unwrap_or_default()
    }
}

impl Learner for RecordingLearner {
    fn learn(&self, improvements: &[Improvement]) {
        if let Ok(mut batches) = self.batches.lock() {
            batches.push(improvements.to_vec());
        }
    }
}
