use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildAirframe,
    BuildScene,
}

/// Per-frame orchestration pass, in order.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SimulationSet {
    Input,
    Commands,
    Sweep,
    Integration,
    Publish,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (StartupStage::BuildAirframe, StartupStage::BuildScene).chain(),
        )
        .configure_sets(
            Update,
            (
                SimulationSet::Input,
                SimulationSet::Commands,
                SimulationSet::Sweep,
                SimulationSet::Integration,
                SimulationSet::Publish,
            )
                .chain(),
        );
    }
}
