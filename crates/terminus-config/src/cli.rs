//! Command-line argument parsing for the Terminus demo.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Terminus command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "terminus", about = "Day/night terminator animation over a sphere")]
pub struct CliArgs {
    /// Seed for hatching jitter.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Frames per animation loop.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Full surface turns per loop.
    #[arg(long)]
    pub surface_frequency: Option<u32>,

    /// Full viewpoint orbits per loop.
    #[arg(long)]
    pub absolute_frequency: Option<u32>,

    /// Write each evaluated frame as JSON into this directory.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.scene.seed = Some(seed);
        }
        if let Some(frames) = args.frames {
            self.render.frame_count = frames;
        }
        if let Some(k) = args.surface_frequency {
            self.scene.surface_frequency = k;
        }
        if let Some(k) = args.absolute_frequency {
            self.scene.absolute_frequency = k;
        }
        if let Some(ref dir) = args.export {
            self.render.export_dir = Some(dir.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_args() -> CliArgs {
        CliArgs {
            seed: None,
            frames: None,
            surface_frequency: None,
            absolute_frequency: None,
            export: None,
            log_level: None,
            config: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            seed: Some(17),
            surface_frequency: Some(2),
            absolute_frequency: Some(3),
            export: Some(PathBuf::from("out")),
            ..no_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.scene.seed, Some(17));
        assert_eq!(config.scene.surface_frequency, 2);
        assert_eq!(config.scene.absolute_frequency, 3);
        assert_eq!(config.render.export_dir, Some(PathBuf::from("out")));
        // Non-overridden fields retain defaults
        assert_eq!(config.render.frame_count, 60);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&no_args());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::try_parse_from([
            "terminus",
            "--seed",
            "5",
            "--frames",
            "12",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(5));
        assert_eq!(args.frames, Some(12));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.export.is_none());
    }

    #[test]
    fn test_cli_rejects_negative_frames() {
        assert!(CliArgs::try_parse_from(["terminus", "--frames", "-3"]).is_err());
    }
}
