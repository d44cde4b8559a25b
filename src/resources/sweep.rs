use bevy::prelude::*;
use std::collections::VecDeque;

use crate::components::ForceSample;
use crate::engine::SweepReport;

/// Force sample of the most recently completed sweep. Zero until the first
/// sweep completes.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct LatestForce {
    pub sample: ForceSample,
    /// Number of sweeps completed since startup.
    pub completed_sweeps: u64,
}

impl LatestForce {
    pub fn record(&mut self, sample: ForceSample) {
        self.sample = sample;
        self.completed_sweeps += 1;
    }
}

/// Bounded history of fast-sweep reports.
#[derive(Resource, Debug, Clone)]
pub struct SweepLog {
    capacity: usize,
    reports: VecDeque<SweepReport>,
}

impl Default for SweepLog {
    fn default() -> Self {
        Self::with_capacity(256)
    }
}

impl SweepLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            reports: VecDeque::with_capacity(capacity.max(1)),
        }
    }

    pub fn push(&mut self, report: SweepReport) {
        if self.reports.len() == self.capacity {
            self.reports.pop_front();
        }
        self.reports.push_back(report);
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn latest(&self) -> Option<&SweepReport> {
        self.reports.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SweepReport> {
        self.reports.iter()
    }
}
