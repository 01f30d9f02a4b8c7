pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, toml_config::BrewTomlConfig};

pub use crate::app::pipelines::brew_pipeline::BrewPipeline;
pub use crate::core::engine::BrewEngine;
pub use crate::utils::error::{BrewError, Result};
