use bevy::math::Vec3;
use liftdrag::components::{RenderTransforms, RigidBodyState, SimulationFrame, SweepRequest};
use liftdrag::resources::LatestForce;
use nalgebra::Vector3;
use pretty_assertions::assert_eq;

use crate::common::{RecordingEngine, TestAppBuilder};

fn body(app: &mut crate::common::TestApp) -> RigidBodyState {
    *app.query_single::<RigidBodyState>().unwrap()
}

#[test]
fn test_body_moves_every_frame_after_one_sweep() {
    let mut app = TestAppBuilder::new().build();

    app.request(SweepRequest::FastSweep);
    app.run_steps(4);

    let state = body(&mut app);
    assert_eq!(app.get_state::<LatestForce>().unwrap().completed_sweeps, 1);
    assert_eq!(state.velocity, Vector3::new(0.0, -4.0, 0.0));
    assert_eq!(state.position, Vector3::new(0.0, -10.0, 0.0));
}

#[test]
fn test_constant_lift_closed_form() {
    let mut app = TestAppBuilder::new().build();
    let acceleration = Vector3::new(0.0, -1.0, 0.0);

    app.request(SweepRequest::RunFullSweep);
    app.run_frame();
    let n = 12;
    for _ in 1..n {
        app.request(SweepRequest::RunFullSweep);
        app.run_frame();
    }

    let n = n as f64;
    let state = body(&mut app);
    assert_eq!(state.velocity, acceleration * n);
    assert_eq!(state.position, acceleration * (n * (n + 1.0) / 2.0));
}

#[test]
fn test_body_at_rest_before_first_sweep() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(10);

    assert_eq!(body(&mut app), RigidBodyState::default());
}

#[test]
fn test_partial_sweep_does_not_move_body() {
    let mut app = TestAppBuilder::new().build();

    app.request(SweepRequest::StepOneSlice);
    app.run_frame();

    assert_eq!(body(&mut app), RigidBodyState::default());
}

#[test]
fn test_two_sweeps_in_one_frame_integrate_once() {
    let mut app = TestAppBuilder::new().build();

    app.request(SweepRequest::FastSweep);
    app.request(SweepRequest::RunFullSweep);
    app.run_frame();

    assert_eq!(app.get_state::<LatestForce>().unwrap().completed_sweeps, 2);
    assert_eq!(body(&mut app).velocity, Vector3::new(0.0, -1.0, 0.0));
}

#[test]
fn test_drag_does_not_move_body() {
    let mut app = TestAppBuilder::new()
        .with_engine(RecordingEngine::new(2, Vec3::ZERO))
        .build();

    for _ in 0..3 {
        app.request(SweepRequest::RunFullSweep);
        app.run_frame();
    }

    let latest = app.get_state::<LatestForce>().unwrap();
    assert_eq!(latest.sample.drag, Vector3::new(0.0, 0.0, -5.0));
    assert_eq!(body(&mut app), RigidBodyState::default());
}

#[test]
fn test_render_transforms_follow_body() {
    let mut app = TestAppBuilder::new().with_initial_sweep(true).build();
    app.run_frame();

    let frame = *app.query_single::<SimulationFrame>().unwrap();
    let state = body(&mut app);
    let published = *app.query_single::<RenderTransforms>().unwrap();

    assert_eq!(published, RenderTransforms::compose(&frame, &state));
    // One sweep on the first frame, then a second frame under the same lift
    assert_eq!(state.render_position(), Vec3::new(0.0, -3.0, 0.0));
}
