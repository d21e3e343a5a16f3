pub mod analyzer;
pub mod brain;
pub mod collectors;
pub mod credentials;
pub mod error;
pub mod executor;
pub mod learner;
pub mod strategist;

pub mod test_support;

pub use brain::Brain;
pub use collectors::{IntelligenceCollector, StaticCollector};
pub use credentials::Credentials;
pub use error::BrainError;
pub use executor::{PlaceholderExecutor, StrategyExecutor};
pub use learner::{Learner, NoopLearner};
