//! Terminus demo: builds the scene, samples one animation loop and
//! optionally writes every frame as JSON.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p terminus-demo -- --seed 7 --frames 120 --export frames`.

mod export;
mod frames;

use clap::Parser;
use rand::Rng;
use terminus_config::{CliArgs, Config, default_config_dir};
use terminus_scene::{RotationModel, Scene};
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| std::path::PathBuf::from(".terminus"));

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);
    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {e}, using defaults");
        config = Config::default();
    }

    let log_dir = config_dir.join("logs");
    terminus_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let seed = config.scene.seed.unwrap_or_else(|| rand::rng().random());
    let rotation = RotationModel::new(
        config.scene.surface_frequency,
        config.scene.absolute_frequency,
    );
    info!(
        seed,
        surface_frequency = rotation.surface_frequency,
        absolute_frequency = rotation.absolute_frequency,
        "building scene"
    );
    let scene = Scene::build_seeded(seed, rotation);

    let frame_count = config.render.frame_count;
    let export_dir = config.render.export_dir.as_deref();
    let workers = frames::worker_count(frame_count);

    match frames::run_loop(&scene, frame_count, workers, export_dir) {
        Ok(reports) => {
            let peak = reports
                .iter()
                .map(|r| r.visible_night_segments)
                .max()
                .unwrap_or(0);
            let points: usize = reports.iter().map(|r| r.points).sum();
            info!(
                frames = reports.len(),
                workers = workers.get(),
                peak_visible_night_segments = peak,
                total_night_segments = scene.night_segments().len(),
                points,
                "loop evaluated"
            );
            if let Some(dir) = export_dir {
                info!(dir = %dir.display(), "frames exported");
            }
        }
        Err(e) => {
            error!(error = %e, "frame export failed");
            std::process::exit(1);
        }
    }
}
