pub mod config;
mod sweep;

pub use config::{EngineConfig, IncrementConfig, RenderConfig, SimConfig};
pub use sweep::{LatestForce, SweepLog};
