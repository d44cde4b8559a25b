use approx::assert_relative_eq;
use liftdrag::{
    components::{
        build_frame, ControlChannel, SimulationFrame, SweepController, SweepMode, SweepRequest,
    },
    engine::SlicingEngine,
    resources::{IncrementConfig, LatestForce, SimConfig, SweepLog},
};
use pretty_assertions::assert_eq;

use crate::common::{EngineCall, RecordingEngine, TestAppBuilder};

fn engine(app: &crate::common::TestApp) -> &RecordingEngine {
    app.get_state::<RecordingEngine>().unwrap()
}

fn completed_sweeps(app: &crate::common::TestApp) -> u64 {
    app.get_state::<LatestForce>().unwrap().completed_sweeps
}

#[test]
fn test_initial_sweep_runs_on_first_frame() {
    let app = TestAppBuilder::new().with_initial_sweep(true).build();

    assert_eq!(
        engine(&app).calls,
        vec![
            EngineCall::Configure {
                pitch: 0.0,
                debug: true
            },
            EngineCall::RunToCompletion,
        ]
    );
    assert_eq!(completed_sweeps(&app), 1);
    assert_eq!(
        app.get_state::<SweepController>().unwrap().mode,
        SweepMode::Idle
    );
}

#[test]
fn test_no_sweep_without_request() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(5);

    assert!(engine(&app).calls.is_empty());
    assert_eq!(completed_sweeps(&app), 0);
}

#[test]
fn test_step_then_finish_sweep() {
    let mut app = TestAppBuilder::new().build();

    app.request(SweepRequest::StepOneSlice);
    app.run_frame();
    assert_eq!(engine(&app).current_slice_index(), 1);
    assert_eq!(engine(&app).configure_count(), 1);

    app.request(SweepRequest::StepOneSlice);
    app.run_frame();
    assert_eq!(engine(&app).current_slice_index(), 2);
    assert_eq!(engine(&app).configure_count(), 1);

    app.request(SweepRequest::RunFullSweep);
    app.run_frame();
    assert_eq!(engine(&app).current_slice_index(), 0);
    assert_eq!(engine(&app).configure_count(), 1);
    assert_eq!(completed_sweeps(&app), 1);
}

#[test]
fn test_steps_in_one_frame_advance_once() {
    let mut app = TestAppBuilder::new().build();

    app.request(SweepRequest::StepOneSlice);
    app.request(SweepRequest::StepOneSlice);
    app.request(SweepRequest::StepOneSlice);
    app.run_frame();

    assert_eq!(engine(&app).current_slice_index(), 1);
    assert_eq!(engine(&app).count(EngineCall::Advance), 1);
}

#[test]
fn test_stepping_through_a_whole_sweep_completes_it() {
    let mut app = TestAppBuilder::new()
        .with_engine(RecordingEngine::new(3, bevy::math::Vec3::Y))
        .build();

    for _ in 0..3 {
        app.request(SweepRequest::StepOneSlice);
        app.run_frame();
    }

    assert_eq!(engine(&app).current_slice_index(), 0);
    assert_eq!(engine(&app).configure_count(), 1);
    assert_eq!(completed_sweeps(&app), 1);

    // The next step starts over from a fresh configuration
    app.request(SweepRequest::StepOneSlice);
    app.run_frame();
    assert_eq!(engine(&app).configure_count(), 2);
    assert_eq!(engine(&app).current_slice_index(), 1);
}

#[test]
fn test_fast_sweep_at_current_angle() {
    let mut app = TestAppBuilder::new().build();

    app.adjust(ControlChannel::AngleOfAttack, 12.0);
    app.run_frame();
    app.request(SweepRequest::FastSweep);
    app.run_frame();

    let calls = &engine(&app).calls;
    assert_eq!(calls.len(), 2);
    match calls[0] {
        EngineCall::Configure { pitch, debug } => {
            assert_relative_eq!(pitch, 12.0, epsilon = 1e-3);
            assert!(!debug);
        }
        other => panic!("unexpected call {:?}", other),
    }
    assert_eq!(calls[1], EngineCall::RunToCompletion);

    let log = app.get_state::<SweepLog>().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log.latest().unwrap().angle_of_attack, 12.0);
    assert_eq!(app.angle_of_attack(), 12.0);
    assert_eq!(completed_sweeps(&app), 1);
}

#[test]
fn test_fast_sweep_ignored_while_busy() {
    let mut app = TestAppBuilder::new().build();

    app.request(SweepRequest::StepOneSlice);
    app.run_frame();
    app.request(SweepRequest::FastSweep);
    app.request(SweepRequest::FastSweepAllAngles);
    app.run_frame();

    assert_eq!(engine(&app).configure_count(), 1);
    assert_eq!(engine(&app).current_slice_index(), 1);
    assert!(app.get_state::<SweepLog>().unwrap().is_empty());
}

#[test]
fn test_auto_progress_increments_and_saturates() {
    let mut app = TestAppBuilder::new().build();

    app.request(SweepRequest::ToggleAutoProgress);
    app.run_frame();
    assert_eq!(app.angle_of_attack(), 7.0);

    let mut previous = app.angle_of_attack();
    for _ in 0..15 {
        app.run_frame();
        let angle = app.angle_of_attack();
        assert!(angle >= previous);
        assert!(angle <= 90.0);
        previous = angle;
    }

    assert_eq!(app.angle_of_attack(), 90.0);
    assert_eq!(completed_sweeps(&app), 16);
    assert_eq!(app.get_state::<SweepLog>().unwrap().len(), 16);
    assert!(engine(&app)
        .calls
        .iter()
        .all(|call| !matches!(call, EngineCall::Configure { debug: true, .. })));
}

#[test]
fn test_auto_progress_ignores_manual_angle_of_attack() {
    let mut app = TestAppBuilder::new().build();

    app.request(SweepRequest::ToggleAutoProgress);
    app.run_frame();

    app.adjust(ControlChannel::AngleOfAttack, -50.0);
    app.adjust(ControlChannel::Rudder, 3.0);
    app.run_frame();

    let attitude = app
        .query_single::<liftdrag::components::AttitudeModel>()
        .unwrap();
    assert_eq!(attitude.angle_of_attack(), 14.0);
    assert_eq!(attitude.state().rudder_angle, 3.0);
}

#[test]
fn test_toggle_auto_progress_off_stops_sweeps() {
    let mut app = TestAppBuilder::new().build();

    app.request(SweepRequest::ToggleAutoProgress);
    app.run_steps(2);
    app.request(SweepRequest::ToggleAutoProgress);
    app.run_steps(3);

    assert_eq!(completed_sweeps(&app), 2);
    assert_eq!(app.angle_of_attack(), 14.0);
}

#[test]
fn test_fast_sweep_all_angles() {
    let mut app = TestAppBuilder::new().build();

    app.adjust(ControlChannel::AngleOfAttack, 10.0);
    app.run_frame();
    app.request(SweepRequest::FastSweepAllAngles);
    app.run_frame();

    let log = app.get_state::<SweepLog>().unwrap();
    let angles: Vec<f32> = log.iter().map(|report| report.angle_of_attack).collect();
    assert_eq!(angles.len(), 27);
    assert_eq!(angles[0], -90.0);
    assert_eq!(angles[25], 85.0);
    assert_eq!(angles[26], 90.0);
    assert!(angles.windows(2).all(|pair| pair[0] < pair[1]));

    let last_sample = log.latest().unwrap().sample;
    let latest = app.get_state::<LatestForce>().unwrap();
    assert_eq!(latest.completed_sweeps, 27);
    assert_eq!(latest.sample, last_sample);

    let engine = engine(&app);
    assert_eq!(engine.configure_count(), 27);
    assert_eq!(engine.count(EngineCall::RunToCompletion), 27);
    assert_eq!(engine.count(EngineCall::MakeContextCurrent), 27);
    assert_eq!(engine.current_slice_index(), 0);
    match engine.calls[0] {
        EngineCall::Configure { pitch, debug } => {
            assert_relative_eq!(pitch, -90.0, epsilon = 1e-3);
            assert!(!debug);
        }
        other => panic!("unexpected call {:?}", other),
    }

    assert_eq!(app.angle_of_attack(), 10.0);
    let profile = liftdrag::resources::SimConfig::default().profile;
    assert_eq!(
        *app.query_single::<SimulationFrame>().unwrap(),
        build_frame(profile, 10.0)
    );
}

#[test]
fn test_auto_progress_uses_configured_increment() {
    let config = SimConfig {
        initial_sweep: false,
        increments: IncrementConfig {
            auto_progress: 25.0,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut app = TestAppBuilder::new().with_config(config).build();

    app.request(SweepRequest::ToggleAutoProgress);
    let mut angles = Vec::new();
    for _ in 0..5 {
        app.run_frame();
        angles.push(app.angle_of_attack());
    }

    assert_eq!(angles, vec![25.0, 50.0, 75.0, 90.0, 90.0]);
}
