use bevy::prelude::*;
use std::marker::PhantomData;

use crate::components::{
    build_frame, AirframeMarker, AttitudeModel, RenderTransforms, RigidBodyState, SweepController,
};
use crate::engine::{ModelHandle, SlicingEngine};
use crate::plugins::{
    SimCommand, SimulationSet, StartupSequencePlugin, StartupStage, SweepCompleted,
};
use crate::resources::{LatestForce, SimConfig, SweepLog};
use crate::systems::{
    apply_commands_system, flight_integration_system, publish_render_transforms_system,
    sweep_frame_system,
};

/// Core orchestration: attitude, sweep control and flight integration driven
/// by the slicing engine `E`.
///
/// An engine inserted before the plugin is kept; otherwise `E` is built with
/// `FromWorld`.
pub struct LiftDragPlugin<E> {
    config: SimConfig,
    model: ModelHandle,
    _engine: PhantomData<fn() -> E>,
}

impl<E> LiftDragPlugin<E> {
    pub fn new(config: SimConfig, model: ModelHandle) -> Self {
        Self {
            config,
            model,
            _engine: PhantomData,
        }
    }
}

impl<E: SlicingEngine + Resource + FromWorld> Plugin for LiftDragPlugin<E> {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<StartupSequencePlugin>() {
            app.add_plugins(StartupSequencePlugin);
        }

        app.insert_resource(self.config.clone())
            .insert_resource(self.model.clone())
            .insert_resource(SweepController::new(self.config.initial_sweep))
            .init_resource::<E>()
            .init_resource::<LatestForce>()
            .init_resource::<SweepLog>()
            .add_event::<SimCommand>()
            .add_event::<SweepCompleted>();

        app.add_systems(
            Startup,
            spawn_airframe.in_set(StartupStage::BuildAirframe),
        )
        .add_systems(
            Update,
            (
                apply_commands_system::<E>.in_set(SimulationSet::Commands),
                sweep_frame_system::<E>.in_set(SimulationSet::Sweep),
                flight_integration_system.in_set(SimulationSet::Integration),
                publish_render_transforms_system.in_set(SimulationSet::Publish),
            ),
        );
    }
}

fn spawn_airframe(mut commands: Commands, config: Res<SimConfig>, model: Res<ModelHandle>) {
    info!("Spawning {:?} airframe from {}", model.profile, model.path.display());

    let frame = build_frame(model.profile, 0.0);
    let body = RigidBodyState::default();
    commands.spawn((
        AirframeMarker,
        Name::new("Airframe"),
        AttitudeModel::new(config.limits),
        frame,
        body,
        RenderTransforms::compose(&frame, &body),
    ));
}
