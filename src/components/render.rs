use bevy::math::{Mat3, Mat4, Vec3};
use bevy::prelude::*;

use crate::components::{frame::normal_matrix, RigidBodyState, SimulationFrame};

/// Marks the entity that carries the airframe state.
#[derive(Component, Debug, Default)]
pub struct AirframeMarker;

/// Transforms the renderer draws the airframe with, recomputed every frame.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RenderTransforms {
    pub model: Mat4,
    pub normal: Mat3,
    /// Point the camera keeps in view.
    pub look_target: Vec3,
}

impl Default for RenderTransforms {
    fn default() -> Self {
        Self::compose(&SimulationFrame::default(), &RigidBodyState::default())
    }
}

impl RenderTransforms {
    /// The simulated displacement is applied in model space, after the
    /// simulation frame.
    pub fn compose(frame: &SimulationFrame, body: &RigidBodyState) -> Self {
        let position = body.render_position();
        let model = frame.world_transform * Mat4::from_translation(position);
        Self {
            model,
            normal: normal_matrix(&model),
            look_target: frame.world_transform.w_axis.truncate() + position,
        }
    }
}
