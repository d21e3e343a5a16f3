use std::sync::Arc;

use async_trait::async_trait;
use constellation_models::intelligence::{
    AgentMetrics, FinancialMetrics, HealthMetrics, IntelligenceCategory, IntelligenceSnapshot,
    MarketData,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::error::BrainError;

pub type Metrics = serde_json::Map<String, serde_json::Value>;

/// A source of intelligence for one category. Mockable for testing.
#[async_trait]
pub trait IntelligenceCollector: Send + Sync {
    fn category(&self) -> IntelligenceCategory;

    async fn collect(&self) -> Result<Metrics, BrainError>;
}

/// Collector that reports fixed placeholder figures for its category.
#[derive(Debug, Clone, Copy)]
pub struct StaticCollector {
    category: IntelligenceCategory,
}

impl StaticCollector {
    pub fn new(category: IntelligenceCategory) -> Self {
        Self { category }
    }

    /// One collector per category.
    pub fn all() -> Vec<Arc<dyn IntelligenceCollector>> {
        IntelligenceCategory::ALL
            .into_iter()
            .map(|category| Arc::new(Self::new(category)) as Arc<dyn IntelligenceCollector>)
            .collect()
    }
}

#[async_trait]
impl IntelligenceCollector for StaticCollector {
    fn category(&self) -> IntelligenceCategory {
        self.category
    }

    async fn collect(&self) -> Result<Metrics, BrainError> {
        match self.category {
            IntelligenceCategory::AgentPerformance => to_metrics(&agent_metrics()),
            IntelligenceCategory::FinancialData => to_metrics(&financial_metrics()),
            IntelligenceCategory::MarketIntelligence => to_metrics(&market_data()),
            IntelligenceCategory::SystemHealth => to_metrics(&health_metrics()),
        }
    }
}

pub fn agent_metrics() -> AgentMetrics {
    AgentMetrics {
        total_agents: 20,
        active_agents: 18,
    }
}

pub fn financial_metrics() -> FinancialMetrics {
    FinancialMetrics {
        monthly_revenue: Decimal::from(45_000),
        growth_rate: Decimal::new(25, 2),
    }
}

pub fn market_data() -> MarketData {
    MarketData {
        trending_technologies: vec![
            "AI".to_string(),
            "Crypto".to_string(),
            "Automation".to_string(),
        ],
    }
}

pub fn health_metrics() -> HealthMetrics {
    HealthMetrics {
        uptime: Decimal::new(985, 1),
        error_rate: Decimal::new(2, 2),
    }
}

/// Flatten a typed metrics record into a JSON object.
pub fn to_metrics<T: Serialize>(value: &T) -> Result<Metrics, BrainError> {
    match serde_json::to_value(value)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(BrainError::Collection {
            category: std::any::type_name::<T>().to_string(),
            reason: format!("metrics must serialize to an object, got {other}"),
        }),
    }
}

/// Run each collector in order and assemble a fresh snapshot.
///
/// The first collector error aborts the gather.
pub async fn gather_intelligence(
    collectors: &[Arc<dyn IntelligenceCollector>],
) -> Result<IntelligenceSnapshot, BrainError> {
    let mut snapshot = IntelligenceSnapshot::new();
    for collector in collectors {
        let category = collector.category();
        let metrics = collector.collect().await.map_err(|e| match e {
            BrainError::Collection { .. } => e,
            other => BrainError::Collection {
                category: category.to_string(),
                reason: other.to_string(),
            },
        })?;
        debug!(category = %category, fields = metrics.len(), "Collected intelligence");
        snapshot.insert(category, metrics);
    }
    Ok(snapshot)
}
