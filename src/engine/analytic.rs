use bevy::math::Vec3;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::components::SimulationFrame;
use crate::engine::{ModelHandle, SlicingEngine};

/// Flat-plate coefficients used by [`AnalyticSlicingEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatPlateCoefficients {
    /// Lift slope in the linear region [1/rad]
    pub cl_alpha: f32,
    /// Zero-lift drag coefficient
    pub cd_0: f32,
    /// Drag coefficient of the plate broadside to the flow
    pub cd_90: f32,
}

impl Default for FlatPlateCoefficients {
    fn default() -> Self {
        Self {
            cl_alpha: 2.0 * PI,
            cd_0: 0.02,
            cd_90: 2.0,
        }
    }
}

impl FlatPlateCoefficients {
    /// Lift coefficient, shaped as `sin(2a)` so it peaks at 45 deg and
    /// vanishes broadside.
    pub fn lift(&self, alpha: f32) -> f32 {
        0.5 * self.cl_alpha * (2.0 * alpha).sin()
    }

    pub fn drag(&self, alpha: f32) -> f32 {
        self.cd_0 + self.cd_90 * alpha.sin().powi(2)
    }
}

/// CPU stand-in for the GPU slicing engine.
///
/// The reference depth is cut into `slice_count` equal slices. Each slice adds
/// its share of the flat-plate lift (+Y) and drag (-Z) at the pitch encoded in
/// the configured world transform.
#[derive(Resource, Debug, Clone)]
pub struct AnalyticSlicingEngine {
    slice_count: u32,
    coefficients: FlatPlateCoefficients,
    frame: Option<SimulationFrame>,
    debug: bool,
    pending: bool,
    slice: u32,
    lift_sum: Vec3,
    drag_sum: Vec3,
    lift: Vec3,
    drag: Vec3,
}

impl Default for AnalyticSlicingEngine {
    fn default() -> Self {
        Self::new(100)
    }
}

impl AnalyticSlicingEngine {
    pub fn new(slice_count: u32) -> Self {
        Self::with_coefficients(slice_count, FlatPlateCoefficients::default())
    }

    pub fn with_coefficients(slice_count: u32, coefficients: FlatPlateCoefficients) -> Self {
        Self {
            slice_count: slice_count.max(1),
            coefficients,
            frame: None,
            debug: false,
            pending: false,
            slice: 0,
            lift_sum: Vec3::ZERO,
            drag_sum: Vec3::ZERO,
            lift: Vec3::ZERO,
            drag: Vec3::ZERO,
        }
    }

    pub fn slice_count(&self) -> u32 {
        self.slice_count
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}

impl SlicingEngine for AnalyticSlicingEngine {
    fn configure(&mut self, model: &ModelHandle, frame: &SimulationFrame, debug: bool) {
        debug!(
            "Configuring {} at pitch {:.2} deg",
            model.path.display(),
            frame.pitch_degrees()
        );
        self.frame = Some(*frame);
        self.debug = debug;
        self.pending = true;
        self.slice = 0;
        self.lift_sum = Vec3::ZERO;
        self.drag_sum = Vec3::ZERO;
    }

    fn advance_one_slice(&mut self) {
        let Some(frame) = self.frame.filter(|_| self.pending) else {
            return;
        };

        let alpha = frame.pitch_degrees().to_radians();
        let area = frame.reference_depth / self.slice_count as f32;
        self.lift_sum += Vec3::Y * self.coefficients.lift(alpha) * area;
        self.drag_sum += Vec3::NEG_Z * self.coefficients.drag(alpha) * area;

        self.slice += 1;
        if self.slice >= self.slice_count {
            self.lift = self.lift_sum;
            self.drag = self.drag_sum;
            self.slice = 0;
            self.pending = false;
        }
    }

    fn run_to_completion(&mut self) {
        while self.pending {
            self.advance_one_slice();
        }
    }

    fn current_slice_index(&self) -> u32 {
        self.slice
    }

    fn last_lift(&self) -> Vec3 {
        self.lift
    }

    fn last_drag(&self) -> Vec3 {
        self.drag
    }
}
