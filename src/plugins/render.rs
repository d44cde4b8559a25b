use bevy::prelude::*;

use crate::components::{AirframeMarker, SimulationProfile};
use crate::engine::ModelHandle;
use crate::plugins::{SimulationSet, StartupStage};
use crate::resources::SimConfig;
use crate::systems::sync_airframe_transform_system;

/// Minimal 3D view of the airframe. The mesh is a stand-in shaped per profile;
/// skeletal sub-models are not drawn.
pub struct AirframeRenderPlugin;

impl Plugin for AirframeRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene.in_set(StartupStage::BuildScene))
            .add_systems(
                Update,
                sync_airframe_transform_system.after(SimulationSet::Publish),
            );
    }
}

fn placeholder_mesh(profile: SimulationProfile) -> Mesh {
    match profile {
        SimulationProfile::Airfoil => {
            Mesh::from(Cuboid::new(1.0, 0.12, 1.0)).translated_by(Vec3::new(0.0, 0.0, -0.5))
        }
        SimulationProfile::FighterJet => Mesh::from(Cuboid::new(4.0, 1.5, 17.0)),
        SimulationProfile::Sphere => Mesh::from(Sphere::new(1.0)),
    }
}

fn setup_scene(
    mut commands: Commands,
    config: Res<SimConfig>,
    model: Res<ModelHandle>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    airframe: Query<Entity, With<AirframeMarker>>,
) {
    let render = &config.render;
    let [r, g, b] = render.clear_color;
    commands.insert_resource(ClearColor(Color::srgb(r, g, b)));

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: render.fov,
            near: 0.01,
            far: render.draw_distance,
            ..default()
        }),
        Transform::from_translation(Vec3::from_array(render.camera_position))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_xyz(2.0, 4.0, -3.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    if let Ok(entity) = airframe.get_single() {
        commands.entity(entity).insert((
            Mesh3d(meshes.add(placeholder_mesh(model.profile))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.75, 0.75, 0.8),
                ..default()
            })),
            Transform::default(),
        ));
    } else {
        error!("No airframe entity found");
    }
}
