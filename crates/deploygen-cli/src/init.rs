use std::path::PathBuf;

use deploygen_common::settings::Settings;

use crate::error::{DeploygenCliError, DeploygenCliResult};

pub fn init_config(root: Option<PathBuf>) -> DeploygenCliResult<Settings> {
    Settings::from_root(root).map_err(|e| DeploygenCliError::InitConfig(e.to_string()))
}
