use serde::{Deserialize, Serialize};

use crate::intelligence::IntelligenceCategory;

/// Top-level configuration for the brain.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BrainConfig {
    #[serde(default)]
    pub intelligence: IntelligenceConfig,
    #[serde(default)]
    pub learning: LearningConfig,
}

/// Which intelligence collectors run on each cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntelligenceConfig {
    #[serde(default = "default_collectors")]
    pub collectors: Vec<CollectorConfig>,
}

impl Default for IntelligenceConfig {
    fn default() -> Self {
        Self {
            collectors: default_collectors(),
        }
    }
}

impl IntelligenceConfig {
    /// Categories of the enabled collectors, in configured order.
    pub fn enabled_categories(&self) -> Vec<IntelligenceCategory> {
        self.collectors
            .iter()
            .filter(|c| c.enabled)
            .map(|c| c.category)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectorConfig {
    pub category: IntelligenceCategory,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearningConfig {
    /// Skip the learn stage entirely when false.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_collectors() -> Vec<CollectorConfig> {
    IntelligenceCategory::ALL
        .into_iter()
        .map(|category| CollectorConfig {
            category,
            enabled: true,
        })
        .collect()
}

fn default_true() -> bool {
    true
}
