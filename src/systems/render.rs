use bevy::prelude::*;

use crate::components::{AirframeMarker, RenderTransforms, RigidBodyState, SimulationFrame};

/// Recomputes the transforms handed to the renderer.
pub fn publish_render_transforms_system(
    mut query: Query<
        (&SimulationFrame, &RigidBodyState, &mut RenderTransforms),
        With<AirframeMarker>,
    >,
) {
    for (frame, body, mut render) in query.iter_mut() {
        *render = RenderTransforms::compose(frame, body);
    }
}

/// Copies the published transforms onto the airframe mesh and keeps the
/// camera aimed at it.
pub fn sync_airframe_transform_system(
    mut airframe: Query<(&RenderTransforms, &mut Transform), With<AirframeMarker>>,
    mut camera: Query<&mut Transform, (With<Camera3d>, Without<AirframeMarker>)>,
) {
    let Ok((render, mut transform)) = airframe.get_single_mut() else {
        return;
    };
    *transform = Transform::from_matrix(render.model);

    if let Ok(mut camera_transform) = camera.get_single_mut() {
        camera_transform.look_at(render.look_target, Vec3::Y);
    }
}
