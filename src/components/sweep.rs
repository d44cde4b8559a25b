use bevy::prelude::*;

use crate::components::ControlChannel;

/// Pending sweep intent. Auto-progress is tracked separately on the
/// controller since it persists across sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepMode {
    #[default]
    Idle,
    /// Advance the engine by exactly one slice on the next frame.
    Stepping,
    /// Run the current (or a new) sweep to completion on the next frame.
    Sweeping,
}

/// Discrete requests the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweepRequest {
    StepOneSlice,
    RunFullSweep,
    ToggleAutoProgress,
    FastSweep,
    FastSweepAllAngles,
    /// Once-per-frame evaluation.
    FrameTick,
}

/// Work the controller asks of the slicing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineCommand {
    #[default]
    None,
    /// Configure a fresh sweep at the current angle, then advance one slice.
    BeginStep,
    /// Advance the sweep in flight by one slice.
    Step,
    /// Configure a fresh sweep and run it to completion.
    BeginSweep,
    /// Finish the sweep in flight.
    FinishSweep,
    /// Synchronous timed sweep at the current angle.
    FastSweep,
    /// Fast sweep followed by an automatic angle of attack increment.
    AutoSweep,
    /// Fast sweep at every angle of the all-angles schedule.
    FastSweepAllAngles,
}

impl EngineCommand {
    /// Whether this command calls `configure` on the engine.
    pub fn starts_sweep(self) -> bool {
        matches!(
            self,
            Self::BeginStep
                | Self::BeginSweep
                | Self::FastSweep
                | Self::AutoSweep
                | Self::FastSweepAllAngles
        )
    }
}

/// Decides when the slicing engine advances.
///
/// Every transition is a pure function of the current controller, the request
/// and whether the engine is idle (slice index 0). Requests whose
/// preconditions fail are ignored and leave the controller unchanged.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepController {
    pub mode: SweepMode,
    pub auto_progress: bool,
}

impl SweepController {
    pub fn new(initial_sweep: bool) -> Self {
        Self {
            mode: if initial_sweep {
                SweepMode::Sweeping
            } else {
                SweepMode::Idle
            },
            auto_progress: false,
        }
    }

    pub fn transition(self, request: SweepRequest, engine_idle: bool) -> (Self, EngineCommand) {
        match request {
            SweepRequest::StepOneSlice => {
                if self.auto_progress {
                    return (self, EngineCommand::None);
                }
                (
                    Self {
                        mode: SweepMode::Stepping,
                        ..self
                    },
                    EngineCommand::None,
                )
            }
            // A pending step is subsumed: finishing the sweep covers it.
            SweepRequest::RunFullSweep => (
                Self {
                    mode: SweepMode::Sweeping,
                    ..self
                },
                EngineCommand::None,
            ),
            SweepRequest::ToggleAutoProgress => (
                Self {
                    auto_progress: !self.auto_progress,
                    ..self
                },
                EngineCommand::None,
            ),
            SweepRequest::FastSweep => {
                if engine_idle && !self.auto_progress {
                    (self, EngineCommand::FastSweep)
                } else {
                    (self, EngineCommand::None)
                }
            }
            SweepRequest::FastSweepAllAngles => {
                if engine_idle && !self.auto_progress {
                    (self, EngineCommand::FastSweepAllAngles)
                } else {
                    (self, EngineCommand::None)
                }
            }
            SweepRequest::FrameTick => self.tick(engine_idle),
        }
    }

    fn tick(self, engine_idle: bool) -> (Self, EngineCommand) {
        let idle = Self {
            mode: SweepMode::Idle,
            ..self
        };

        if self.auto_progress && engine_idle {
            return (idle, EngineCommand::AutoSweep);
        }

        // A manual sweep left in flight when auto-progress was switched on
        // still follows its own intent.
        match (self.mode, engine_idle) {
            (SweepMode::Idle, _) => (self, EngineCommand::None),
            (SweepMode::Stepping, true) => (idle, EngineCommand::BeginStep),
            (SweepMode::Stepping, false) => (idle, EngineCommand::Step),
            (SweepMode::Sweeping, true) => (idle, EngineCommand::BeginSweep),
            (SweepMode::Sweeping, false) => (idle, EngineCommand::FinishSweep),
        }
    }

    /// Applies `request` in place and returns the resulting engine command.
    pub fn apply(&mut self, request: SweepRequest, engine_idle: bool) -> EngineCommand {
        let (next, command) = self.transition(request, engine_idle);
        if next != *self {
            debug!("Sweep controller {:?} -> {:?} on {:?}", self, next, request);
        }
        *self = next;
        command
    }

    /// Attitude changes are only taken while the engine is idle; the angle of
    /// attack additionally belongs to auto-progress while it is on.
    pub fn accepts_adjustment(&self, channel: ControlChannel, engine_idle: bool) -> bool {
        match channel {
            ControlChannel::AngleOfAttack => engine_idle && !self.auto_progress,
            _ => engine_idle,
        }
    }
}
