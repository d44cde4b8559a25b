use bevy::math::{Mat3, Mat4, Vec3};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{
    MAX_AILERON_ANGLE, MAX_ANGLE_OF_ATTACK, MAX_ELEVATOR_ANGLE, MAX_RUDDER_ANGLE,
};

/// An independently adjustable attitude angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlChannel {
    AngleOfAttack,
    Aileron,
    Rudder,
    Elevator,
}

impl ControlChannel {
    pub fn label(self) -> &'static str {
        match self {
            Self::AngleOfAttack => "Angle of attack",
            Self::Aileron => "Aileron angle",
            Self::Rudder => "Rudder angle",
            Self::Elevator => "Elevator angle",
        }
    }
}

/// Symmetric saturation limits per channel [deg]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttitudeLimits {
    pub angle_of_attack: f32,
    pub aileron: f32,
    pub rudder: f32,
    pub elevator: f32,
}

impl Default for AttitudeLimits {
    fn default() -> Self {
        Self {
            angle_of_attack: MAX_ANGLE_OF_ATTACK,
            aileron: MAX_AILERON_ANGLE,
            rudder: MAX_RUDDER_ANGLE,
            elevator: MAX_ELEVATOR_ANGLE,
        }
    }
}

impl AttitudeLimits {
    pub fn limit(&self, channel: ControlChannel) -> f32 {
        match channel {
            ControlChannel::AngleOfAttack => self.angle_of_attack,
            ControlChannel::Aileron => self.aileron,
            ControlChannel::Rudder => self.rudder,
            ControlChannel::Elevator => self.elevator,
        }
    }
}

/// Attitude angles of the airframe, all in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AttitudeState {
    pub angle_of_attack: f32,
    pub aileron_angle: f32,
    pub rudder_angle: f32,
    pub elevator_angle: f32,
}

impl AttitudeState {
    pub fn get(&self, channel: ControlChannel) -> f32 {
        match channel {
            ControlChannel::AngleOfAttack => self.angle_of_attack,
            ControlChannel::Aileron => self.aileron_angle,
            ControlChannel::Rudder => self.rudder_angle,
            ControlChannel::Elevator => self.elevator_angle,
        }
    }

    fn get_mut(&mut self, channel: ControlChannel) -> &mut f32 {
        match channel {
            ControlChannel::AngleOfAttack => &mut self.angle_of_attack,
            ControlChannel::Aileron => &mut self.aileron_angle,
            ControlChannel::Rudder => &mut self.rudder_angle,
            ControlChannel::Elevator => &mut self.elevator_angle,
        }
    }
}

/// Movable sub-parts of the airframe model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlSurface {
    RudderLeft,
    RudderRight,
    AileronLeft,
    AileronRight,
    ElevatorLeft,
    ElevatorRight,
}

impl ControlSurface {
    pub const ALL: [ControlSurface; 6] = [
        ControlSurface::RudderLeft,
        ControlSurface::RudderRight,
        ControlSurface::AileronLeft,
        ControlSurface::AileronRight,
        ControlSurface::ElevatorLeft,
        ControlSurface::ElevatorRight,
    ];

    /// Name of the sub-model this surface drives.
    pub fn sub_model_name(self) -> &'static str {
        match self {
            Self::RudderLeft => "RudderL01",
            Self::RudderRight => "RudderR01",
            Self::AileronLeft => "AileronL01",
            Self::AileronRight => "AileronR01",
            Self::ElevatorLeft => "ElevatorL01",
            Self::ElevatorRight => "ElevatorR01",
        }
    }

    pub fn channel(self) -> ControlChannel {
        match self {
            Self::RudderLeft | Self::RudderRight => ControlChannel::Rudder,
            Self::AileronLeft | Self::AileronRight => ControlChannel::Aileron,
            Self::ElevatorLeft | Self::ElevatorRight => ControlChannel::Elevator,
        }
    }

    fn hinge_axis(self) -> Vec3 {
        match self.channel() {
            ControlChannel::Rudder => Vec3::Y,
            _ => Vec3::X,
        }
    }

    // Ailerons deflect antisymmetrically, everything else moves as a pair.
    fn deflection_sign(self) -> f32 {
        match self {
            Self::AileronRight => -1.0,
            _ => 1.0,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Local transform of a control surface relative to its parent model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePose {
    pub local_transform: Mat4,
    pub normal_transform: Mat3,
}

impl Default for SurfacePose {
    fn default() -> Self {
        Self {
            local_transform: Mat4::IDENTITY,
            normal_transform: Mat3::IDENTITY,
        }
    }
}

impl SurfacePose {
    /// Pure rotation about `axis` by `degrees`.
    pub fn from_deflection(axis: Vec3, degrees: f32) -> Self {
        let local_transform = Mat4::from_axis_angle(axis, degrees.to_radians());
        Self {
            local_transform,
            normal_transform: Mat3::from_mat4(local_transform),
        }
    }
}

/// Owns the attitude angles of the airframe and the control-surface poses
/// derived from them.
#[derive(Component, Debug, Clone)]
pub struct AttitudeModel {
    state: AttitudeState,
    limits: AttitudeLimits,
    poses: [SurfacePose; 6],
}

impl Default for AttitudeModel {
    fn default() -> Self {
        Self::new(AttitudeLimits::default())
    }
}

impl AttitudeModel {
    pub fn new(limits: AttitudeLimits) -> Self {
        Self {
            state: AttitudeState::default(),
            limits,
            poses: [SurfacePose::default(); 6],
        }
    }

    pub fn state(&self) -> &AttitudeState {
        &self.state
    }

    pub fn limits(&self) -> &AttitudeLimits {
        &self.limits
    }

    pub fn angle_of_attack(&self) -> f32 {
        self.state.angle_of_attack
    }

    /// Adds `delta` degrees to `channel`, saturating at the channel limit.
    /// Returns the new angle. Non-finite deltas are ignored.
    pub fn adjust(&mut self, channel: ControlChannel, delta: f32) -> f32 {
        if !delta.is_finite() {
            return self.state.get(channel);
        }

        let limit = self.limits.limit(channel);
        let value = self.state.get_mut(channel);
        *value = (*value + delta).clamp(-limit, limit);
        let value = *value;

        if channel != ControlChannel::AngleOfAttack {
            self.update_surfaces(channel);
        }

        value
    }

    pub fn surface_pose(&self, surface: ControlSurface) -> &SurfacePose {
        &self.poses[surface.index()]
    }

    pub fn surface_poses(&self) -> impl Iterator<Item = (ControlSurface, &SurfacePose)> {
        ControlSurface::ALL
            .iter()
            .map(move |surface| (*surface, &self.poses[surface.index()]))
    }

    fn update_surfaces(&mut self, channel: ControlChannel) {
        let angle = self.state.get(channel);
        for surface in ControlSurface::ALL {
            if surface.channel() == channel {
                self.poses[surface.index()] = SurfacePose::from_deflection(
                    surface.hinge_axis(),
                    surface.deflection_sign() * angle,
                );
            }
        }
    }
}
