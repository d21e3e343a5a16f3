use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use constellation_models::config::BrainConfig;
use constellation_models::cycle::{CycleReport, REPORT_SCHEMA_VERSION};
use tracing::{debug, info};
use uuid::Uuid;

use crate::analyzer::analyze_patterns;
use crate::collectors::{gather_intelligence, IntelligenceCollector, StaticCollector};
use crate::credentials::Credentials;
use crate::error::BrainError;
use crate::executor::{execute_improvements, PlaceholderExecutor, StrategyExecutor};
use crate::learner::{Learner, NoopLearner};
use crate::strategist::generate_strategies;

/// Runs optimization cycles: gather, analyze, generate, execute, learn.
pub struct Brain {
    credentials: Credentials,
    collectors: Vec<Arc<dyn IntelligenceCollector>>,
    executor: Arc<dyn StrategyExecutor>,
    learner: Arc<dyn Learner>,
    config: BrainConfig,
}

impl Brain {
    pub fn new(
        credentials: Credentials,
        collectors: Vec<Arc<dyn IntelligenceCollector>>,
        executor: Arc<dyn StrategyExecutor>,
        learner: Arc<dyn Learner>,
        config: BrainConfig,
    ) -> Self {
        Self {
            credentials,
            collectors,
            executor,
            learner,
            config,
        }
    }

    /// Brain with the four static collectors, the placeholder executor and no learning.
    pub fn with_defaults(credentials: Credentials) -> Self {
        Self::new(
            credentials,
            StaticCollector::all(),
            Arc::new(PlaceholderExecutor),
            Arc::new(NoopLearner),
            BrainConfig::default(),
        )
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn collector_count(&self) -> usize {
        self.collectors.len()
    }

    /// Run one optimization cycle.
    pub async fn think_and_optimize(&self) -> Result<CycleReport, BrainError> {
        let start = Instant::now();
        let cycle_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!(
            %cycle_id,
            authenticated = self.credentials.has_token(),
            "Constellation brain thinking"
        );

        // 1. Gather
        let snapshot = gather_intelligence(&self.collectors).await?;
        debug!(
            %cycle_id,
            categories = ?snapshot.categories().collect::<Vec<_>>(),
            "Intelligence gathered"
        );

        // 2. Analyze
        let patterns = analyze_patterns(&snapshot)?;

        // 3. Generate
        let strategies = generate_strategies(&patterns);

        // 4. Execute
        let improvements = execute_improvements(&self.executor, &strategies).await;

        // 5. Learn
        if self.config.learning.enabled {
            self.learner.learn(&improvements);
        } else {
            debug!(%cycle_id, "Learning disabled, skipping");
        }

        let report = CycleReport {
            cycle_id,
            schema_version: REPORT_SCHEMA_VERSION,
            started_at,
            snapshot,
            patterns,
            strategies,
            improvements,
            elapsed_ms: start.elapsed().as_millis() as u64,
        };

        let summary = report.summary();
        info!(
            %cycle_id,
            intelligence_gathered = summary.intelligence_gathered,
            patterns_identified = summary.patterns_identified,
            strategies_generated = summary.strategies_generated,
            improvements_executed = summary.improvements_executed,
            all_succeeded = report.all_succeeded(),
            elapsed_ms = report.elapsed_ms,
            "Cycle complete"
        );

        Ok(report)
    }
}
