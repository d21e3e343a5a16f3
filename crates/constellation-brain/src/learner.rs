use constellation_models::improvement::Improvement;

/// Consumes the outcomes of a cycle.
pub trait Learner: Send + Sync {
    fn learn(&self, improvements: &[Improvement]);
}

/// Discards every outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLearner;

impl Learner for NoopLearner {
    fn learn(&self, _improvements: &[Improvement]) {}
}
