// Attitude limits (degrees)
pub const MAX_ANGLE_OF_ATTACK: f32 = 90.0;
pub const MAX_RUDDER_ANGLE: f32 = 90.0;
pub const MAX_AILERON_ANGLE: f32 = 90.0;
pub const MAX_ELEVATOR_ANGLE: f32 = 90.0;

pub const ANGLE_OF_ATTACK_INCREMENT: f32 = 1.0; // granularity of manual angle of attack changes
pub const MANUAL_ANGLE_INCREMENT: f32 = 1.0; // rudder, elevator and aileron step per key press
pub const AUTO_ANGLE_INCREMENT: f32 = 7.0; // angle of attack step when auto progressing
pub const ALL_ANGLES_INCREMENT: f32 = 7.0; // angle of attack step of the all-angles sweep

/// Divisor applied to lift to get a per-frame acceleration.
pub const REFERENCE_MASS: f64 = 10_000.0;

pub const DEFAULT_RESOURCE_DIR: &str = "resources";
pub const CONFIG_FILE_NAME: &str = "liftdrag.yaml";

pub const WINDOW_WIDTH: u32 = 720;
pub const WINDOW_HEIGHT: u32 = 480;
