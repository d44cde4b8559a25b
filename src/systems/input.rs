use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;

use crate::components::{ControlChannel, SweepRequest};
use crate::plugins::SimCommand;
use crate::resources::{IncrementConfig, SimConfig};

/// Whether a key event is the initial press or an auto-repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub super_key: bool,
}

impl KeyModifiers {
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        super_key: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    pub const CONTROL: Self = Self {
        control: true,
        ..Self::NONE
    };

    pub fn from_keyboard(keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            shift: keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
            control: keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]),
            alt: keyboard.any_pressed([KeyCode::AltLeft, KeyCode::AltRight]),
            super_key: keyboard.any_pressed([KeyCode::SuperLeft, KeyCode::SuperRight]),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// Maps a key event to its command.
///
/// Slice stepping and attitude adjustments fire on press and repeat; sweep
/// requests and the auto-progress toggle fire on press only.
pub fn command_for_key(
    key: KeyCode,
    action: KeyAction,
    modifiers: KeyModifiers,
    increments: &IncrementConfig,
) -> Option<SimCommand> {
    let pressed = action == KeyAction::Press;
    let adjust = |channel, delta| Some(SimCommand::Adjust { channel, delta });

    match key {
        KeyCode::Space if modifiers.is_empty() => {
            Some(SimCommand::Sweep(SweepRequest::StepOneSlice))
        }
        KeyCode::Space if pressed && modifiers.shift => {
            Some(SimCommand::Sweep(SweepRequest::RunFullSweep))
        }
        KeyCode::Space if pressed && modifiers.control => {
            Some(SimCommand::Sweep(SweepRequest::ToggleAutoProgress))
        }
        KeyCode::KeyF if pressed && modifiers.is_empty() => {
            Some(SimCommand::Sweep(SweepRequest::FastSweep))
        }
        KeyCode::KeyF if pressed && modifiers == KeyModifiers::SHIFT => {
            Some(SimCommand::Sweep(SweepRequest::FastSweepAllAngles))
        }
        _ if !modifiers.is_empty() => None,
        KeyCode::ArrowUp => adjust(ControlChannel::AngleOfAttack, increments.angle_of_attack),
        KeyCode::ArrowDown => adjust(ControlChannel::AngleOfAttack, -increments.angle_of_attack),
        KeyCode::KeyO => adjust(ControlChannel::Rudder, increments.control_surface),
        KeyCode::KeyI => adjust(ControlChannel::Rudder, -increments.control_surface),
        KeyCode::KeyK => adjust(ControlChannel::Elevator, increments.control_surface),
        KeyCode::KeyJ => adjust(ControlChannel::Elevator, -increments.control_surface),
        KeyCode::KeyM => adjust(ControlChannel::Aileron, increments.control_surface),
        KeyCode::KeyN => adjust(ControlChannel::Aileron, -increments.control_surface),
        _ => None,
    }
}

/// Turns raw key events into [`SimCommand`]s.
pub fn keyboard_input_system(
    mut key_events: EventReader<KeyboardInput>,
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<SimConfig>,
    mut commands: EventWriter<SimCommand>,
) {
    let modifiers = KeyModifiers::from_keyboard(&keyboard);

    for event in key_events.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }

        let action = if event.repeat {
            KeyAction::Repeat
        } else {
            KeyAction::Press
        };

        let command = command_for_key(event.key_code, action, modifiers, &config.increments);
        if let Some(command) = command {
            commands.send(command);
        }
    }
}
