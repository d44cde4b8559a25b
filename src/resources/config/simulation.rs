use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::render::RenderConfig;
use crate::components::{AttitudeLimits, SimulationProfile};
use crate::engine::FlatPlateCoefficients;
use crate::utils::{
    Result, SimError, ALL_ANGLES_INCREMENT, ANGLE_OF_ATTACK_INCREMENT, AUTO_ANGLE_INCREMENT,
    CONFIG_FILE_NAME, MANUAL_ANGLE_INCREMENT, REFERENCE_MASS,
};

/// Angle steps applied by input and by the sweep controller [deg]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncrementConfig {
    pub angle_of_attack: f32,
    pub control_surface: f32,
    pub auto_progress: f32,
    pub all_angles: f32,
}

impl Default for IncrementConfig {
    fn default() -> Self {
        Self {
            angle_of_attack: ANGLE_OF_ATTACK_INCREMENT,
            control_surface: MANUAL_ANGLE_INCREMENT,
            auto_progress: AUTO_ANGLE_INCREMENT,
            all_angles: ALL_ANGLES_INCREMENT,
        }
    }
}

/// Settings of the built-in analytic slicing engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub slice_count: u32,
    pub coefficients: FlatPlateCoefficients,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            slice_count: 100,
            coefficients: FlatPlateCoefficients::default(),
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub profile: SimulationProfile,
    pub limits: AttitudeLimits,
    pub increments: IncrementConfig,
    /// Divisor turning lift into per-frame acceleration.
    pub reference_mass: f64,
    /// Run one sweep to completion on the first frame.
    pub initial_sweep: bool,
    pub engine: EngineConfig,
    pub render: RenderConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            profile: SimulationProfile::default(),
            limits: AttitudeLimits::default(),
            increments: IncrementConfig::default(),
            reference_mass: REFERENCE_MASS,
            initial_sweep: true,
            engine: EngineConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `liftdrag.yaml` from the resource root, falling back to the
    /// defaults when the file does not exist.
    pub fn load_or_default(resource_dir: &Path) -> Result<Self> {
        let path = resource_dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            info!("Loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let limits = [
            self.limits.angle_of_attack,
            self.limits.aileron,
            self.limits.rudder,
            self.limits.elevator,
        ];
        if limits
            .iter()
            .any(|limit| !limit.is_finite() || *limit < 0.0)
        {
            return Err(SimError::InvalidConfig(
                "attitude limits must be finite and non-negative".to_string(),
            ));
        }

        let increments = [
            self.increments.angle_of_attack,
            self.increments.control_surface,
            self.increments.auto_progress,
            self.increments.all_angles,
        ];
        if increments
            .iter()
            .any(|step| !step.is_finite() || *step <= 0.0)
        {
            return Err(SimError::InvalidConfig(
                "angle increments must be finite and positive".to_string(),
            ));
        }

        if !self.reference_mass.is_finite() || self.reference_mass <= 0.0 {
            return Err(SimError::InvalidConfig(
                "reference mass must be finite and positive".to_string(),
            ));
        }

        if self.engine.slice_count == 0 {
            return Err(SimError::InvalidConfig(
                "slice count must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
