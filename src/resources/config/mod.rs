pub mod render;
pub mod simulation;

pub use render::RenderConfig;
pub use simulation::{EngineConfig, IncrementConfig, SimConfig};
