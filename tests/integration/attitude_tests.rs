use bevy::prelude::*;
use liftdrag::{
    components::{
        build_frame, AttitudeModel, ControlChannel, ControlSurface, SimulationFrame,
        SimulationProfile, SweepRequest,
    },
    engine::SlicingEngine,
    resources::LatestForce,
};
use pretty_assertions::assert_eq;

use crate::common::{EngineCall, RecordingEngine, TestAppBuilder};

#[test]
fn test_angle_of_attack_saturates_at_limit() {
    let mut app = TestAppBuilder::new().with_keyboard().build();

    for _ in 0..91 {
        app.press(KeyCode::ArrowUp);
    }
    app.run_frame();
    assert_eq!(app.angle_of_attack(), 90.0);

    for _ in 0..200 {
        app.repeat(KeyCode::ArrowDown);
    }
    app.run_frame();
    assert_eq!(app.angle_of_attack(), -90.0);
}

#[test]
fn test_angle_of_attack_rebuilds_frame() {
    let mut app = TestAppBuilder::new()
        .with_profile(SimulationProfile::Airfoil)
        .build();

    app.adjust(ControlChannel::AngleOfAttack, 15.0);
    app.run_frame();

    assert_eq!(
        *app.query_single::<SimulationFrame>().unwrap(),
        build_frame(SimulationProfile::Airfoil, 15.0)
    );
}

#[test]
fn test_control_surfaces_follow_keys() {
    let mut app = TestAppBuilder::new().with_keyboard().build();

    app.press(KeyCode::KeyO);
    app.press(KeyCode::KeyO);
    app.press(KeyCode::KeyK);
    app.press(KeyCode::KeyN);
    app.run_frame();

    let attitude = app.query_single::<AttitudeModel>().unwrap();
    assert_eq!(attitude.state().rudder_angle, 2.0);
    assert_eq!(attitude.state().elevator_angle, 1.0);
    assert_eq!(attitude.state().aileron_angle, -1.0);
    assert_eq!(attitude.angle_of_attack(), 0.0);

    let left = attitude.surface_pose(ControlSurface::AileronLeft).local_transform;
    let right = attitude.surface_pose(ControlSurface::AileronRight).local_transform;
    assert_ne!(left, right);
}

#[test]
fn test_adjustments_ignored_while_sweep_in_flight() {
    let mut app = TestAppBuilder::new().build();

    app.request(SweepRequest::StepOneSlice);
    app.run_frame();
    assert!(!app.get_state::<RecordingEngine>().unwrap().is_idle());

    app.adjust(ControlChannel::AngleOfAttack, 5.0);
    app.adjust(ControlChannel::Rudder, 5.0);
    app.run_frame();

    let attitude = app.query_single::<AttitudeModel>().unwrap();
    assert_eq!(attitude.angle_of_attack(), 0.0);
    assert_eq!(attitude.state().rudder_angle, 0.0);

    app.request(SweepRequest::RunFullSweep);
    app.run_frame();
    app.adjust(ControlChannel::AngleOfAttack, 5.0);
    app.run_frame();
    assert_eq!(app.angle_of_attack(), 5.0);
}

#[test]
fn test_space_steps_and_shift_space_sweeps() {
    let mut app = TestAppBuilder::new().with_keyboard().build();

    app.press(KeyCode::Space);
    app.run_frame();
    assert_eq!(
        app.get_state::<RecordingEngine>().unwrap().current_slice_index(),
        1
    );

    app.repeat(KeyCode::Space);
    app.run_frame();
    assert_eq!(
        app.get_state::<RecordingEngine>().unwrap().current_slice_index(),
        2
    );

    app.press(KeyCode::ShiftLeft);
    app.press(KeyCode::Space);
    app.run_frame();
    app.release(KeyCode::ShiftLeft);
    app.run_frame();

    let engine = app.get_state::<RecordingEngine>().unwrap();
    assert!(engine.is_idle());
    assert_eq!(engine.configure_count(), 1);
    assert_eq!(engine.count(EngineCall::RunToCompletion), 1);
    assert_eq!(app.get_state::<LatestForce>().unwrap().completed_sweeps, 1);
}

#[test]
fn test_control_space_toggles_auto_progress() {
    let mut app = TestAppBuilder::new().with_keyboard().build();

    app.press(KeyCode::ControlLeft);
    app.press(KeyCode::Space);
    app.run_frame();
    app.release(KeyCode::ControlLeft);
    app.run_frame();

    assert_eq!(app.angle_of_attack(), 14.0);
}
