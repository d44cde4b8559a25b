//! Interface to the slicing force engine and the sweep drivers built on it.

mod analytic;
mod driver;

pub use analytic::{AnalyticSlicingEngine, FlatPlateCoefficients};
pub use driver::{
    all_angles_schedule, execute, fast_sweep, fast_sweep_all_angles, SweepContext, SweepOutcome,
    SweepReport,
};

use bevy::math::Vec3;
use bevy::prelude::*;
use std::path::{Path, PathBuf};

use crate::components::{SimulationFrame, SimulationProfile};
use crate::utils::{Result, SimError};

/// Engine that sweeps a model slice by slice along the simulation axis and
/// accumulates lift and drag.
///
/// `current_slice_index` is the only busy signal: 0 means idle or complete.
pub trait SlicingEngine {
    /// Replaces any prior configuration and discards slice progress.
    fn configure(&mut self, model: &ModelHandle, frame: &SimulationFrame, debug: bool);

    /// Advances one slice. No-op once the sweep is complete.
    fn advance_one_slice(&mut self);

    /// Advances until the sweep completes.
    fn run_to_completion(&mut self);

    fn current_slice_index(&self) -> u32;

    /// Lift of the last completed sweep.
    fn last_lift(&self) -> Vec3;

    /// Drag of the last completed sweep.
    fn last_drag(&self) -> Vec3;

    /// Called between consecutive sweeps of a batch so an engine that
    /// borrowed the render context can hand it back.
    fn make_context_current(&mut self) {}

    fn is_idle(&self) -> bool {
        self.current_slice_index() == 0
    }
}

/// Location of the airframe model the engine sweeps.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ModelHandle {
    pub profile: SimulationProfile,
    pub path: PathBuf,
}

impl ModelHandle {
    pub fn new(profile: SimulationProfile, path: PathBuf) -> Self {
        Self { profile, path }
    }

    /// Resolves the model of `profile` under `resource_dir`, failing if either
    /// is missing.
    pub fn locate(resource_dir: &Path, profile: SimulationProfile) -> Result<Self> {
        if !resource_dir.is_dir() {
            return Err(SimError::ResourceDirNotFound(resource_dir.to_path_buf()));
        }

        let path = resource_dir.join(profile.model_path());
        if !path.is_file() {
            return Err(SimError::ModelNotFound(path));
        }

        Ok(Self { profile, path })
    }
}
