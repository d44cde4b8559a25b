mod events;
mod input;
mod liftdrag;
mod render;
mod staging;

pub use events::{SimCommand, SweepCompleted};
pub use input::KeyboardInputPlugin;
pub use liftdrag::LiftDragPlugin;
pub use render::AirframeRenderPlugin;
pub use staging::{SimulationSet, StartupSequencePlugin, StartupStage};
