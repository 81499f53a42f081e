//! Configuration for the Terminus scene generator.
//!
//! Settings persist to disk as RON and can be overridden from the command
//! line via clap. Missing fields fall back to defaults, unknown fields are
//! ignored, so config files survive version changes in both directions.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, RenderConfig, SceneConfig, default_config_dir};
pub use error::ConfigError;
