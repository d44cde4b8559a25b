pub mod cli;
pub mod components;
pub mod engine;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;
