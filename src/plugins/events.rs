use bevy::prelude::*;

use crate::components::{ControlChannel, ForceSample, SweepRequest};

/// A discrete user intent. Input handling only emits these; the orchestration
/// pass applies them.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum SimCommand {
    Sweep(SweepRequest),
    Adjust { channel: ControlChannel, delta: f32 },
}

/// Sent once per completed sweep.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SweepCompleted {
    pub sample: ForceSample,
}
