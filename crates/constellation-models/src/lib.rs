pub mod config;
pub mod cycle;
pub mod improvement;
pub mod intelligence;
pub mod pattern;
pub mod strategy;

pub use config::{BrainConfig, CollectorConfig, IntelligenceConfig, LearningConfig};
pub use cycle::{CycleReport, CycleSummary};
pub use improvement::Improvement;
pub use intelligence::{
    AgentMetrics, FinancialMetrics, HealthMetrics, IntelligenceCategory, IntelligenceSnapshot,
    MarketData,
};
pub use pattern::{Pattern, PatternCategory};
pub use strategy::Strategy;
