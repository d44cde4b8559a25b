use bevy::math::{Mat3, Mat4, Vec3};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Airframe mesh the simulation runs against. Each variant carries the fixed
/// recipe that normalizes its mesh into the simulation axis convention
/// (sweep along -Z, lateral axis X).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimulationProfile {
    Airfoil,
    #[default]
    FighterJet,
    Sphere,
}

impl SimulationProfile {
    /// Model path relative to the resource root.
    pub fn model_path(self) -> &'static str {
        match self {
            Self::Airfoil => "models/0012.obj",
            Self::FighterJet => "models/f18.grl",
            Self::Sphere => "models/sphere.obj",
        }
    }

    /// Extent of the swept volume along the sweep axis.
    pub fn reference_depth(self) -> f32 {
        match self {
            Self::Airfoil | Self::Sphere => 1.0,
            Self::FighterJet => 2.0,
        }
    }

    fn world_transform(self, angle_of_attack: f32) -> Mat4 {
        // Negative rotation about X pitches the nose up for positive angles.
        let pitch = Mat4::from_rotation_x((-angle_of_attack).to_radians());

        match self {
            Self::Airfoil => {
                Mat4::from_scale(Vec3::new(0.875, 1.0, 1.0))
                    * Mat4::from_translation(Vec3::new(0.0, 0.0, -0.5))
                    * pitch
                    * Mat4::from_translation(Vec3::new(0.0, 0.0, 0.5))
            }
            Self::FighterJet => {
                Mat4::from_translation(Vec3::new(0.0, 0.0, -1.1))
                    * pitch
                    * Mat4::from_rotation_z(PI)
                    * Mat4::from_scale(Vec3::splat(0.1))
            }
            Self::Sphere => {
                Mat4::from_translation(Vec3::new(0.0, 0.0, -0.5))
                    * Mat4::from_scale(Vec3::splat(0.5))
                    * pitch
            }
        }
    }
}

/// Geometric frame handed to the slicing engine and the renderer.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SimulationFrame {
    pub world_transform: Mat4,
    pub normal_transform: Mat3,
    pub reference_depth: f32,
    pub center_of_gravity: Vec3,
}

impl Default for SimulationFrame {
    fn default() -> Self {
        build_frame(SimulationProfile::default(), 0.0)
    }
}

impl SimulationFrame {
    /// Pitch of the model's +Z axis above the sweep plane [deg].
    pub fn pitch_degrees(&self) -> f32 {
        let axis = self.world_transform.transform_vector3(Vec3::Z);
        axis.y.atan2(axis.z).to_degrees()
    }
}

/// Builds the simulation frame of `profile` pitched to `angle_of_attack` degrees.
pub fn build_frame(profile: SimulationProfile, angle_of_attack: f32) -> SimulationFrame {
    let world_transform = profile.world_transform(angle_of_attack);
    let reference_depth = profile.reference_depth();

    SimulationFrame {
        world_transform,
        normal_transform: normal_matrix(&world_transform),
        reference_depth,
        center_of_gravity: Vec3::new(0.0, 0.0, reference_depth * 0.5),
    }
}

/// Transpose of the inverse of `transform`, reduced to 3x3.
pub fn normal_matrix(transform: &Mat4) -> Mat3 {
    Mat3::from_mat4(transform.inverse().transpose())
}
