mod input;
mod physics;
mod render;
mod sweep;

pub use input::{command_for_key, keyboard_input_system, KeyAction, KeyModifiers};
pub use physics::flight_integration_system;
pub use render::{publish_render_transforms_system, sync_airframe_transform_system};
pub use sweep::{apply_commands_system, sweep_frame_system};
