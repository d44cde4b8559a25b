use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use std::path::Path;
use std::process::ExitCode;

use liftdrag::{
    cli::parse_args,
    engine::{AnalyticSlicingEngine, ModelHandle},
    plugins::{AirframeRenderPlugin, KeyboardInputPlugin, LiftDragPlugin},
    resources::SimConfig,
    utils::{Result, SimError},
};

fn main() -> ExitCode {
    let resource_dir = match parse_args(std::env::args().skip(1)) {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let (config, model, engine) = match setup(&resource_dir) {
        Ok(setup) => setup,
        Err(err) => {
            eprintln!("Failed setup: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(config, model, engine) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn setup(resource_dir: &Path) -> Result<(SimConfig, ModelHandle, AnalyticSlicingEngine)> {
    let config = SimConfig::load_or_default(resource_dir)?;
    let model = ModelHandle::locate(resource_dir, config.profile)?;
    let engine = AnalyticSlicingEngine::with_coefficients(
        config.engine.slice_count,
        config.engine.coefficients,
    );
    Ok((config, model, engine))
}

fn run(config: SimConfig, model: ModelHandle, engine: AnalyticSlicingEngine) -> Result<()> {
    let render = config.render.clone();
    let present_mode = if render.vsync {
        PresentMode::AutoVsync
    } else {
        PresentMode::AutoNoVsync
    };

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: render.title.clone(),
                resolution: WindowResolution::new(
                    render.screen_width as f32,
                    render.screen_height as f32,
                ),
                present_mode,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(engine)
        .add_plugins((
            LiftDragPlugin::<AnalyticSlicingEngine>::new(config, model),
            KeyboardInputPlugin,
            AirframeRenderPlugin,
        ))
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(SimError::AppExit(code.get())),
    }
}
