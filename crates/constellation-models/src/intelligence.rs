use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fixed set of intelligence sources gathered on every cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntelligenceCategory {
    AgentPerformance,
    FinancialData,
    MarketIntelligence,
    SystemHealth,
}

impl IntelligenceCategory {
    pub const ALL: [IntelligenceCategory; 4] = [
        IntelligenceCategory::AgentPerformance,
        IntelligenceCategory::FinancialData,
        IntelligenceCategory::MarketIntelligence,
        IntelligenceCategory::SystemHealth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntelligenceCategory::AgentPerformance => "agent_performance",
            IntelligenceCategory::FinancialData => "financial_data",
            IntelligenceCategory::MarketIntelligence => "market_intelligence",
            IntelligenceCategory::SystemHealth => "system_health",
        }
    }
}

impl fmt::Display for IntelligenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Headcount of constellation agents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentMetrics {
    pub total_agents: u32,
    pub active_agents: u32,
}

/// Revenue figures for the constellation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialMetrics {
    pub monthly_revenue: Decimal,
    /// Month-over-month growth as a fraction (0.25 = 25%).
    pub growth_rate: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketData {
    pub trending_technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthMetrics {
    /// Uptime percentage, 0 to 100.
    pub uptime: Decimal,
    pub error_rate: Decimal,
}

/// Everything gathered in one cycle, keyed by source.
///
/// Each entry is a flat JSON object so that analysis can treat every
/// source uniformly. A snapshot is rebuilt from scratch on each cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct IntelligenceSnapshot {
    entries: BTreeMap<IntelligenceCategory, serde_json::Map<String, serde_json::Value>>,
}

impl IntelligenceSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the mapping for a category, replacing any previous one.
    pub fn insert(
        &mut self,
        category: IntelligenceCategory,
        data: serde_json::Map<String, serde_json::Value>,
    ) {
        self.entries.insert(category, data);
    }

    pub fn get(
        &self,
        category: IntelligenceCategory,
    ) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.entries.get(&category)
    }

    /// True when the category was gathered and its mapping has at least one field.
    pub fn is_populated(&self, category: IntelligenceCategory) -> bool {
        self.get(category).is_some_and(|data| !data.is_empty())
    }

    pub fn categories(&self) -> impl Iterator<Item = IntelligenceCategory> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn object(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn category_serialization() {
        assert_eq!(
            serde_json::to_string(&IntelligenceCategory::AgentPerformance).unwrap(),
            "\"agent_performance\""
        );
        assert_eq!(
            serde_json::to_string(&IntelligenceCategory::SystemHealth).unwrap(),
            "\"system_health\""
        );
        for category in IntelligenceCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }

    #[test]
    fn empty_mapping_is_not_populated() {
        let mut snapshot = IntelligenceSnapshot::new();
        snapshot.insert(IntelligenceCategory::FinancialData, serde_json::Map::new());
        snapshot.insert(
            IntelligenceCategory::AgentPerformance,
            object(serde_json::json!({"total_agents": 20})),
        );

        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.is_populated(IntelligenceCategory::AgentPerformance));
        assert!(!snapshot.is_populated(IntelligenceCategory::FinancialData));
        assert!(!snapshot.is_populated(IntelligenceCategory::SystemHealth));
    }

    #[test]
    fn snapshot_serializes_with_category_keys() {
        let health = HealthMetrics {
            uptime: dec!(98.5),
            error_rate: dec!(0.02),
        };
        let mut snapshot = IntelligenceSnapshot::new();
        snapshot.insert(
            IntelligenceCategory::SystemHealth,
            object(serde_json::to_value(&health).unwrap()),
        );

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["system_health"]["uptime"], "98.5");

        let parsed: IntelligenceSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn categories_iterate_in_declaration_order() {
        let mut snapshot = IntelligenceSnapshot::new();
        for category in IntelligenceCategory::ALL.iter().rev() {
            snapshot.insert(*category, serde_json::Map::new());
        }
        let order: Vec<_> = snapshot.categories().collect();
        assert_eq!(order, IntelligenceCategory::ALL.to_vec());
    }
}
