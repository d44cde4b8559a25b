use bevy::prelude::*;

use crate::components::{
    build_frame, AirframeMarker, AttitudeModel, ControlChannel, EngineCommand, SimulationFrame,
    SweepController, SweepRequest,
};
use crate::engine::{execute, ModelHandle, SlicingEngine, SweepContext, SweepOutcome};
use crate::plugins::{SimCommand, SweepCompleted};
use crate::resources::{LatestForce, SimConfig, SweepLog};

/// Applies queued [`SimCommand`]s: attitude adjustments, sweep-mode requests
/// and the synchronous fast sweeps they may trigger.
pub fn apply_commands_system<E: SlicingEngine + Resource>(
    mut requests: EventReader<SimCommand>,
    mut controller: ResMut<SweepController>,
    mut engine: ResMut<E>,
    config: Res<SimConfig>,
    model: Res<ModelHandle>,
    mut latest: ResMut<LatestForce>,
    mut log: ResMut<SweepLog>,
    mut completed: EventWriter<SweepCompleted>,
    mut query: Query<(&mut AttitudeModel, &mut SimulationFrame), With<AirframeMarker>>,
) {
    let Ok((mut attitude, mut frame)) = query.get_single_mut() else {
        requests.clear();
        return;
    };

    for request in requests.read() {
        match *request {
            SimCommand::Adjust { channel, delta } => {
                if !controller.accepts_adjustment(channel, engine.is_idle()) {
                    debug!("Ignoring {:?} adjustment", channel);
                    continue;
                }

                let angle = attitude.adjust(channel, delta);
                if channel == ControlChannel::AngleOfAttack {
                    *frame = build_frame(model.profile, angle);
                }
                info!("{} set to {}", channel.label(), angle);
            }
            SimCommand::Sweep(request) => {
                let command = controller.apply(request, engine.is_idle());
                let outcome = run_command(
                    command,
                    &mut *engine,
                    &config,
                    &model,
                    &mut attitude,
                    &mut frame,
                );
                record_outcome(outcome, &mut latest, &mut log, &mut completed);
            }
        }
    }
}

/// Once-per-frame controller evaluation: advances the engine according to the
/// pending intent, or runs the auto-progress sweep.
pub fn sweep_frame_system<E: SlicingEngine + Resource>(
    mut controller: ResMut<SweepController>,
    mut engine: ResMut<E>,
    config: Res<SimConfig>,
    model: Res<ModelHandle>,
    mut latest: ResMut<LatestForce>,
    mut log: ResMut<SweepLog>,
    mut completed: EventWriter<SweepCompleted>,
    mut query: Query<(&mut AttitudeModel, &mut SimulationFrame), With<AirframeMarker>>,
) {
    if let Ok((mut attitude, mut frame)) = query.get_single_mut() {
        let command = controller.apply(SweepRequest::FrameTick, engine.is_idle());
        let outcome = run_command(
            command,
            &mut *engine,
            &config,
            &model,
            &mut attitude,
            &mut frame,
        );
        record_outcome(outcome, &mut latest, &mut log, &mut completed);
    }
}

fn run_command<E: SlicingEngine>(
    command: EngineCommand,
    engine: &mut E,
    config: &SimConfig,
    model: &ModelHandle,
    attitude: &mut AttitudeModel,
    frame: &mut SimulationFrame,
) -> SweepOutcome {
    if command == EngineCommand::None {
        return SweepOutcome::default();
    }

    let mut ctx = SweepContext {
        model,
        profile: model.profile,
        attitude,
        frame,
        auto_increment: config.increments.auto_progress,
        all_angles_increment: config.increments.all_angles,
    };
    execute(command, engine, &mut ctx)
}

fn record_outcome(
    outcome: SweepOutcome,
    latest: &mut LatestForce,
    log: &mut SweepLog,
    completed: &mut EventWriter<SweepCompleted>,
) {
    for sample in outcome.completed_samples() {
        latest.record(sample);
        completed.send(SweepCompleted { sample });
    }

    for report in outcome.reports {
        log.push(report);
    }
}
