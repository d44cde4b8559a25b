use serde::{Deserialize, Serialize};

use crate::utils::{WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub title: String,
    pub screen_width: u32,
    pub screen_height: u32,
    pub vsync: bool,
    /// Vertical field of view [rad]
    pub fov: f32,
    pub draw_distance: f32,
    pub clear_color: [f32; 3],
    pub camera_position: [f32; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "FlightSim".to_string(),
            screen_width: WINDOW_WIDTH,
            screen_height: WINDOW_HEIGHT,
            vsync: false,
            fov: std::f32::consts::FRAC_PI_4,
            draw_distance: 1000.0,
            clear_color: [0.3, 0.7, 0.8],
            camera_position: [0.0, 0.5, -5.5],
        }
    }
}
