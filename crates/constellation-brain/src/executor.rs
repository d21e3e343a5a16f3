use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use constellation_models::improvement::Improvement;
use constellation_models::strategy::Strategy;
use tracing::{info, warn};

use crate::error::BrainError;

/// Applies a strategy to the constellation. Mockable for testing.
#[async_trait]
pub trait StrategyExecutor: Send + Sync {
    /// Returns whether the strategy took effect.
    async fn implement(&self, strategy: &Strategy) -> Result<bool, BrainError>;
}

/// Executor with no real effect; every strategy is reported as applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderExecutor;

#[async_trait]
impl StrategyExecutor for PlaceholderExecutor {
    async fn implement(&self, _strategy: &Strategy) -> Result<bool, BrainError> {
        Ok(true)
    }
}

/// Progress line announced before a strategy is applied.
pub fn execution_line(strategy: &Strategy) -> String {
    format!("Executing: {}", strategy.description)
}

/// Apply each strategy in order and record the outcome.
///
/// Executor errors do not stop the run: the strategy is recorded as failed
/// and execution moves on to the next one.
pub async fn execute_improvements(
    executor: &Arc<dyn StrategyExecutor>,
    strategies: &[Strategy],
) -> Vec<Improvement> {
    let mut improvements = Vec::with_capacity(strategies.len());

    for strategy in strategies {
        info!("{}", execution_line(strategy));

        let success = match executor.implement(strategy).await {
            Ok(success) => success,
            Err(e) => {
                warn!(strategy = %strategy.description, error = %e, "Strategy execution failed");
                false
            }
        };

        improvements.push(Improvement {
            strategy: strategy.description.clone(),
            success,
            timestamp: Utc::now(),
        });
    }

    improvements
}
