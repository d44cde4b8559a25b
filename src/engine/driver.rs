use bevy::prelude::*;
use std::time::{Duration, Instant};

use crate::components::{
    build_frame, AttitudeModel, ControlChannel, EngineCommand, ForceSample, SimulationFrame,
    SimulationProfile,
};
use crate::engine::{ModelHandle, SlicingEngine};

/// Timing and result of one fast sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepReport {
    pub angle_of_attack: f32,
    pub sample: ForceSample,
    pub elapsed: Duration,
}

impl SweepReport {
    pub fn sweeps_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            1.0 / secs
        } else {
            f64::INFINITY
        }
    }
}

/// Everything a sweep command reads or writes besides the engine itself.
pub struct SweepContext<'a> {
    pub model: &'a ModelHandle,
    pub profile: SimulationProfile,
    pub attitude: &'a mut AttitudeModel,
    pub frame: &'a mut SimulationFrame,
    pub auto_increment: f32,
    pub all_angles_increment: f32,
}

/// What executing a command produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepOutcome {
    /// Set when a sweep completed.
    pub sample: Option<ForceSample>,
    pub reports: Vec<SweepReport>,
}

impl SweepOutcome {
    /// One sample per completed sweep, oldest first. Fast sweeps complete
    /// once per report.
    pub fn completed_samples(&self) -> Vec<ForceSample> {
        if self.reports.is_empty() {
            self.sample.into_iter().collect()
        } else {
            self.reports.iter().map(|report| report.sample).collect()
        }
    }
}

/// Synchronously sweeps the model pitched to `angle_of_attack` and logs the
/// result.
pub fn fast_sweep<E: SlicingEngine>(
    engine: &mut E,
    model: &ModelHandle,
    profile: SimulationProfile,
    angle_of_attack: f32,
) -> (SweepReport, SimulationFrame) {
    let frame = build_frame(profile, angle_of_attack);
    engine.configure(model, &frame, false);

    let start = Instant::now();
    engine.run_to_completion();
    let elapsed = start.elapsed();

    let report = SweepReport {
        angle_of_attack,
        sample: ForceSample::from_engine(engine.last_lift(), engine.last_drag()),
        elapsed,
    };

    let (lift, drag) = (report.sample.lift, report.sample.drag);
    info!(
        "Angle: {:.6}, Lift: ({:.6}, {:.6}, {:.6}), Drag ({:.6}, {:.6}, {:.6}), SPS: {:.6}",
        angle_of_attack,
        lift.x,
        lift.y,
        lift.z,
        drag.x,
        drag.y,
        drag.z,
        report.sweeps_per_second()
    );

    (report, frame)
}

/// Angles from `min` to `max` inclusive in steps of `increment`, with a final
/// step to land exactly on `max` when the increment does not divide the range.
pub fn all_angles_schedule(min: f32, max: f32, increment: f32) -> Vec<f32> {
    if !(increment > 0.0) || max <= min {
        return vec![min];
    }

    let steps = ((max - min) / increment + 1e-4).floor() as usize;
    let mut angles: Vec<f32> = (0..=steps).map(|i| min + i as f32 * increment).collect();
    if let Some(last) = angles.last_mut() {
        if (max - *last).abs() <= 1e-4 {
            *last = max;
        } else {
            angles.push(max);
        }
    }
    angles
}

/// Fast sweep at every angle of the all-angles schedule. The render context is
/// handed back to the caller between sweeps.
pub fn fast_sweep_all_angles<E: SlicingEngine>(
    engine: &mut E,
    model: &ModelHandle,
    profile: SimulationProfile,
    angles: &[f32],
) -> Vec<SweepReport> {
    angles
        .iter()
        .map(|angle| {
            let (report, _) = fast_sweep(engine, model, profile, *angle);
            engine.make_context_current();
            report
        })
        .collect()
}

fn completed_sample<E: SlicingEngine>(engine: &E) -> Option<ForceSample> {
    engine
        .is_idle()
        .then(|| ForceSample::from_engine(engine.last_lift(), engine.last_drag()))
}

/// Carries out `command` against `engine`.
pub fn execute<E: SlicingEngine>(
    command: EngineCommand,
    engine: &mut E,
    ctx: &mut SweepContext,
) -> SweepOutcome {
    match command {
        EngineCommand::None => SweepOutcome::default(),
        EngineCommand::BeginStep => {
            *ctx.frame = build_frame(ctx.profile, ctx.attitude.angle_of_attack());
            engine.configure(ctx.model, ctx.frame, true);
            engine.advance_one_slice();
            SweepOutcome {
                sample: completed_sample(engine),
                reports: Vec::new(),
            }
        }
        EngineCommand::Step => {
            engine.advance_one_slice();
            debug!("Slice {}", engine.current_slice_index());
            SweepOutcome {
                sample: completed_sample(engine),
                reports: Vec::new(),
            }
        }
        EngineCommand::BeginSweep => {
            *ctx.frame = build_frame(ctx.profile, ctx.attitude.angle_of_attack());
            engine.configure(ctx.model, ctx.frame, true);
            engine.run_to_completion();
            SweepOutcome {
                sample: completed_sample(engine),
                reports: Vec::new(),
            }
        }
        EngineCommand::FinishSweep => {
            engine.run_to_completion();
            SweepOutcome {
                sample: completed_sample(engine),
                reports: Vec::new(),
            }
        }
        EngineCommand::FastSweep => {
            let (report, frame) =
                fast_sweep(engine, ctx.model, ctx.profile, ctx.attitude.angle_of_attack());
            *ctx.frame = frame;
            SweepOutcome {
                sample: Some(report.sample),
                reports: vec![report],
            }
        }
        EngineCommand::AutoSweep => {
            let (report, _) =
                fast_sweep(engine, ctx.model, ctx.profile, ctx.attitude.angle_of_attack());
            let angle = ctx
                .attitude
                .adjust(ControlChannel::AngleOfAttack, ctx.auto_increment);
            *ctx.frame = build_frame(ctx.profile, angle);
            SweepOutcome {
                sample: Some(report.sample),
                reports: vec![report],
            }
        }
        EngineCommand::FastSweepAllAngles => {
            let limit = ctx.attitude.limits().angle_of_attack;
            let angles = all_angles_schedule(-limit, limit, ctx.all_angles_increment);
            let reports = fast_sweep_all_angles(engine, ctx.model, ctx.profile, &angles);
            *ctx.frame = build_frame(ctx.profile, ctx.attitude.angle_of_attack());
            SweepOutcome {
                sample: reports.last().map(|report| report.sample),
                reports,
            }
        }
    }
}
