use bevy::prelude::*;

use crate::components::{AirframeMarker, FlightIntegrator, RigidBodyState};
use crate::resources::{LatestForce, SimConfig};

/// Integrates the airframe's motion once per frame under the most recent
/// force sample. Before the first sweep completes the sample is zero.
pub fn flight_integration_system(
    latest: Res<LatestForce>,
    config: Res<SimConfig>,
    mut query: Query<&mut RigidBodyState, With<AirframeMarker>>,
) {
    if let Ok(mut body) = query.get_single_mut() {
        FlightIntegrator::new(config.reference_mass).integrate(&mut body, &latest.sample);
    }
}
