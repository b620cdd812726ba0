use clap::{builder::NonEmptyStringValueParser, Args};
use deploygen_common::{debug, settings::Settings};
use deploygen_manifest::{
    parse_envs, parse_labels, parse_replicas, write_manifest, DeploymentBuilder, EnvList,
    LabelSet,
};

use crate::error::DeploygenCliResult;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Name of the Deployment and container
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub name: String,

    /// Labels in the format key1=value1,key2=value2
    #[arg(long)]
    pub labels: Option<String>,

    /// Number of replicas (defaults to 3 if not provided)
    #[arg(long)]
    pub replicas: Option<String>,

    /// Environment variables in the format KEY1=VALUE1;KEY2=VALUE2
    #[arg(long)]
    pub envs: Option<String>,

    /// Container image (defaults to the configured image, nginx:latest)
    #[arg(long)]
    pub image: Option<String>,
}

/// Inputs after normalization, ready to build.
#[derive(Debug, Clone)]
pub struct Parameters {
    pub name: String,
    pub image: Option<String>,
    pub labels: Option<LabelSet>,
    pub replicas: Option<i32>,
    pub envs: Option<EnvList>,
}

impl GenerateArgs {
    /// Normalizes the raw flags. Runs before settings are loaded, so a bad
    /// parameter is always reported as such.
    pub fn into_parameters(self) -> DeploygenCliResult<Parameters> {
        let labels = parse_labels(self.labels.as_deref())?;
        let envs = parse_envs(self.envs.as_deref())?;
        let replicas = parse_replicas(self.replicas.as_deref())?;
        debug!(?labels, ?envs, ?replicas, "parameters parsed");

        Ok(Parameters {
            name: self.name,
            image: self.image,
            labels,
            replicas,
            envs,
        })
    }
}

pub fn run(params: Parameters, config: &Settings) -> DeploygenCliResult<()> {
    let image = params.image.as_deref().unwrap_or(&config.image);
    let manifest = DeploymentBuilder::new(&params.name)
        .image(image)
        .labels(params.labels)
        .replicas(params.replicas)
        .envs(params.envs)
        .build();

    write_manifest(&manifest, &config.output)?;
    Ok(())
}
