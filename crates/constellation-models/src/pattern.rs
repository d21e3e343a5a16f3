use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What kind of observation a pattern represents.
///
/// Only two categories have strategies attached. Any other label read from
/// JSON lands in `Unrecognized`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    AgentEfficiency,
    RevenueOptimization,
    #[serde(other)]
    Unrecognized,
}

impl PatternCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternCategory::AgentEfficiency => "agent_efficiency",
            PatternCategory::RevenueOptimization => "revenue_optimization",
            PatternCategory::Unrecognized => "unrecognized",
        }
    }
}

/// An observation about constellation performance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pattern {
    pub category: PatternCategory,
    pub description: String,
    /// 0.0 to 1.0.
    pub confidence: Decimal,
}

impl Pattern {
    pub fn new(
        category: PatternCategory,
        description: impl Into<String>,
        confidence: Decimal,
    ) -> Self {
        Self {
            category,
            description: description.into(),
            confidence,
        }
    }

    pub fn has_valid_confidence(&self) -> bool {
        self.confidence >= Decimal::ZERO && self.confidence <= Decimal::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn roundtrip_pattern() {
        let pattern = Pattern::new(
            PatternCategory::AgentEfficiency,
            "Crypto agents show highest ROI",
            dec!(0.85),
        );
        let json = serde_json::to_string(&pattern).unwrap();
        assert!(json.contains("\"agent_efficiency\""));
        let parsed: Pattern = serde_json::from_str(&json).unwrap();
        assert_eq!(pattern, parsed);
    }

    #[test]
    fn unknown_category_deserializes_as_unrecognized() {
        let parsed: Pattern = serde_json::from_str(
            r#"{"category": "latency_spike", "description": "p99 up", "confidence": "0.4"}"#,
        )
        .unwrap();
        assert_eq!(parsed.category, PatternCategory::Unrecognized);
        assert_eq!(parsed.confidence, dec!(0.4));
    }

    #[test]
    fn confidence_bounds() {
        let with = |confidence| Pattern::new(PatternCategory::AgentEfficiency, "", confidence);
        assert!(with(dec!(0)).has_valid_confidence());
        assert!(with(dec!(1)).has_valid_confidence());
        assert!(!with(dec!(1.01)).has_valid_confidence());
        assert!(!with(dec!(-0.1)).has_valid_confidence());
    }
}
