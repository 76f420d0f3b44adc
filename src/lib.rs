pub mod config;
pub mod data;
pub mod delay;
pub mod engine;
pub mod error;
pub mod models;
pub mod time;

pub use config::{EngineConfig, ScoreWeights, SeverityThresholds};
pub use engine::Engine;
pub use error::EngineError;
pub use models::Snapshot;
