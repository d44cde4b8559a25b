pub mod attitude;
pub mod flight;
pub mod frame;
pub mod render;
pub mod sweep;

pub use attitude::{
    AttitudeLimits, AttitudeModel, AttitudeState, ControlChannel, ControlSurface, SurfacePose,
};
pub use flight::{FlightIntegrator, ForceSample, RigidBodyState};
pub use frame::{build_frame, normal_matrix, SimulationFrame, SimulationProfile};
pub use render::{AirframeMarker, RenderTransforms};
pub use sweep::{EngineCommand, SweepController, SweepMode, SweepRequest};
