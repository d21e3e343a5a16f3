//! Constellation Brain
//!
//! Central optimization loop for the constellation: gathers intelligence
//! from every system, identifies performance patterns, turns them into
//! strategies, applies them and feeds the outcomes back for learning.
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use constellation::brain::{Brain, Credentials};
//! use constellation::models::{BrainConfig, CycleSummary};
//! ```

pub use constellation_brain as brain;
pub use constellation_models as models;

use std::sync::Arc;

use constellation_brain::{
    Brain, BrainError, Credentials, IntelligenceCollector, NoopLearner, PlaceholderExecutor,
    StaticCollector,
};
use constellation_models::config::BrainConfig;
use constellation_models::cycle::CycleReport;

/// Build a Brain from configuration.
pub fn build_brain(config: &BrainConfig, token: Option<String>) -> Brain {
    let collectors: Vec<Arc<dyn IntelligenceCollector>> = config
        .intelligence
        .enabled_categories()
        .into_iter()
        .map(|category| Arc::new(StaticCollector::new(category)) as Arc<dyn IntelligenceCollector>)
        .collect();

    Brain::new(
        Credentials::new(token),
        collectors,
        Arc::new(PlaceholderExecutor),
        Arc::new(NoopLearner),
        config.clone(),
    )
}

/// Run a single optimization cycle.
pub async fn think(brain: &Brain) -> Result<CycleReport, BrainError> {
    brain.think_and_optimize().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use constellation_models::config::CollectorConfig;
    use constellation_models::intelligence::IntelligenceCategory;

    #[test]
    fn build_from_default_config() {
        let brain = build_brain(&BrainConfig::default(), Some("ghp_abc".to_string()));
        assert_eq!(brain.collector_count(), 4);
        assert!(brain.credentials().has_token());
    }

    #[tokio::test]
    async fn disabled_collectors_are_skipped() {
        let mut config = BrainConfig::default();
        config.intelligence.collectors = vec![
            CollectorConfig {
                category: IntelligenceCategory::AgentPerformance,
                enabled: true,
            },
            CollectorConfig {
                category: IntelligenceCategory::FinancialData,
                enabled: false,
            },
        ];

        let brain = build_brain(&config, None);
        assert_eq!(brain.collector_count(), 1);

        let summary = think(&brain).await.unwrap().summary();
        assert_eq!(summary.intelligence_gathered, 1);
        assert_eq!(summary.patterns_identified, 1);
        assert_eq!(summary.strategies_generated, 1);
        assert_eq!(summary.improvements_executed, 1);
    }

    #[tokio::test]
    async fn no_collectors_means_empty_cycle() {
        let mut config = BrainConfig::default();
        config.intelligence.collectors.clear();

        let report = think(&build_brain(&config, None)).await.unwrap();
        assert_eq!(report.summary().intelligence_gathered, 0);
        assert!(report.patterns.is_empty());
        assert!(report.improvements.is_empty());
    }
}
