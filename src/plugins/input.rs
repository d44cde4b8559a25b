use bevy::prelude::*;

use crate::plugins::SimulationSet;
use crate::systems::keyboard_input_system;

/// Keyboard bindings for the simulation commands. Needs Bevy's input plugin.
pub struct KeyboardInputPlugin;

impl Plugin for KeyboardInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            keyboard_input_system.in_set(SimulationSet::Input),
        );
    }
}
