use bevy::math::Vec3;
use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::REFERENCE_MASS;

/// Lift and drag of the most recently completed sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceSample {
    pub lift: Vector3<f64>,
    pub drag: Vector3<f64>,
}

impl Default for ForceSample {
    fn default() -> Self {
        Self {
            lift: Vector3::zeros(),
            drag: Vector3::zeros(),
        }
    }
}

impl ForceSample {
    pub fn new(lift: Vector3<f64>, drag: Vector3<f64>) -> Self {
        Self { lift, drag }
    }

    /// Builds a sample from the engine's single precision vectors.
    pub fn from_engine(lift: Vec3, drag: Vec3) -> Self {
        Self {
            lift: Vector3::new(lift.x as f64, lift.y as f64, lift.z as f64),
            drag: Vector3::new(drag.x as f64, drag.y as f64, drag.z as f64),
        }
    }
}

/// Position and velocity of the visualized body in world space.
/// Units are simulation units and simulation units per frame.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBodyState {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

impl Default for RigidBodyState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
        }
    }
}

impl RigidBodyState {
    /// Position in render space.
    pub fn render_position(&self) -> Vec3 {
        Vec3::new(
            self.position.x as f32,
            self.position.y as f32,
            self.position.z as f32,
        )
    }
}

/// Explicit Euler integration with a fixed step of one frame.
///
/// Only lift drives the body; drag is carried in the sample but deliberately
/// left out of the force sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightIntegrator {
    pub reference_mass: f64,
}

impl Default for FlightIntegrator {
    fn default() -> Self {
        Self {
            reference_mass: REFERENCE_MASS,
        }
    }
}

impl FlightIntegrator {
    pub fn new(reference_mass: f64) -> Self {
        Self { reference_mass }
    }

    pub fn acceleration(&self, sample: &ForceSample) -> Vector3<f64> {
        -sample.lift / self.reference_mass
    }

    /// Advances `state` by one frame under `sample`.
    pub fn integrate(&self, state: &mut RigidBodyState, sample: &ForceSample) {
        state.velocity += self.acceleration(sample);
        state.position += state.velocity;
    }
}
