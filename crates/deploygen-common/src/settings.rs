use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::File;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::DeploygenResult;

pub const DEFAULT_IMAGE: &str = "nginx:latest";
pub const DEFAULT_OUTPUT: &str = "deployment.yaml";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_log_level")]
    pub log_level: LevelFilter,

    /// Container image used when `--image` is not given.
    #[serde(default = "default_image")]
    pub image: String,

    /// Where the rendered manifest is written, relative to the working directory.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            image: default_image(),
            output: default_output(),
        }
    }
}

impl Settings {
    /// Loads `deploygen.*` and `deploygen.<RUN_MODE>.*` from `root` (or the
    /// working directory). Both files are optional.
    pub fn from_root(root: Option<PathBuf>) -> DeploygenResult<Self> {
        let root = match root {
            Some(root) => root,
            None => env::current_dir().context("unable to get working directory")?,
        };
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        Self::load(&root, &run_mode)
    }

    fn load(root: &Path, run_mode: &str) -> DeploygenResult<Self> {
        let base = root.join("deploygen");
        let mode = root.join(format!("deploygen.{run_mode}"));

        let s = config::Config::builder()
            .add_source(File::with_name(&base.to_string_lossy()).required(false))
            .add_source(File::with_name(&mode.to_string_lossy()).required(false))
            .build()?;

        let cfg = s.try_deserialize()?;
        Ok(cfg)
    }
}

fn default_log_level() -> LevelFilter {
    LevelFilter::Info
}

fn default_image() -> String {
    DEFAULT_IMAGE.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}
