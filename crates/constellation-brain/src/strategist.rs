use constellation_models::pattern::{Pattern, PatternCategory};
use constellation_models::strategy::Strategy;
use tracing::debug;

/// Look up the playbook entry for a pattern category.
pub fn strategy_for(category: PatternCategory) -> Option<Strategy> {
    match category {
        PatternCategory::AgentEfficiency => Some(Strategy::new(
            "Allocate more resources to crypto agents",
            "+15% overall performance",
            "Increase crypto agent frequency",
        )),
        PatternCategory::RevenueOptimization => Some(Strategy::new(
            "Optimize scheduling for peak hours",
            "+8% revenue",
            "Adjust workflow schedules",
        )),
        PatternCategory::Unrecognized => None,
    }
}

/// One strategy per recognized pattern, in pattern order.
pub fn generate_strategies(patterns: &[Pattern]) -> Vec<Strategy> {
    patterns
        .iter()
        .filter_map(|pattern| {
            let strategy = strategy_for(pattern.category);
            if strategy.is_none() {
                debug!(pattern = %pattern.description, "No strategy for pattern, skipping");
            }
            strategy
        })
        .collect()
}
