use std::path::PathBuf;

use clap::Parser;
use deploygen_common::{settings::Settings, util::tracing::setup_tracing};
use log::LevelFilter;

use crate::{error::DeploygenCliResult, init::init_config};

mod generate;

#[derive(Debug, Parser)]
#[command(version, about = "Kubernetes Deployment manifest generator", long_about = None)]
pub struct Cli {
    #[clap(short('l'), long, value_name("LEVEL"))]
    pub log_level: Option<LevelFilter>,

    #[command(flatten)]
    pub generate: generate::GenerateArgs,
}

pub fn exec() -> DeploygenCliResult {
    dotenv::dotenv().ok();
    let cli = Cli::try_parse()?;
    let (params, cfg) = prepare(cli.generate, None)?;
    setup_tracing(cli.log_level.unwrap_or(cfg.log_level))?;

    generate::run(params, &cfg)
}

// Parameters are normalized before settings load, so a bad flag is reported
// even when the settings file is broken too.
fn prepare(
    args: generate::GenerateArgs,
    root: Option<PathBuf>,
) -> DeploygenCliResult<(generate::Parameters, Settings)> {
    let params = args.into_parameters()?;
    let cfg = init_config(root)?;
    Ok((params, cfg))
}
