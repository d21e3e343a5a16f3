use constellation_models::intelligence::{IntelligenceCategory, IntelligenceSnapshot};
use constellation_models::pattern::{Pattern, PatternCategory};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::BrainError;

/// Identify performance patterns in a snapshot.
///
/// Emits at most two patterns: agent efficiency when agent performance was
/// gathered with data, then revenue optimization when financial data was.
/// Confidence values are fixed and do not depend on the gathered figures.
pub fn analyze_patterns(snapshot: &IntelligenceSnapshot) -> Result<Vec<Pattern>, BrainError> {
    let mut patterns = Vec::new();

    if snapshot.is_populated(IntelligenceCategory::AgentPerformance) {
        patterns.push(Pattern::new(
            PatternCategory::AgentEfficiency,
            "Crypto agents show highest ROI",
            Decimal::new(85, 2),
        ));
    }

    if snapshot.is_populated(IntelligenceCategory::FinancialData) {
        patterns.push(Pattern::new(
            PatternCategory::RevenueOptimization,
            "Morning hours show better performance",
            Decimal::new(72, 2),
        ));
    }

    if let Some(bad) = patterns.iter().find(|p| !p.has_valid_confidence()) {
        return Err(BrainError::Analysis(format!(
            "confidence {} out of range for {}",
            bad.confidence,
            bad.category.as_str()
        )));
    }

    debug!(count = patterns.len(), "Patterns identified");
    Ok(patterns)
}
