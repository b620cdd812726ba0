pub type DeploygenResult<T = (), E = DeploygenError> = Result<T, E>;

/// Malformed user input. Each variant carries the offending text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid label format: '{0}' (expected key=value)")]
    Label(String),
    #[error("Invalid environment variable format: '{0}' (expected KEY=VALUE)")]
    Env(String),
    #[error("Invalid replica count: '{0}' (expected a non-negative integer)")]
    Replicas(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DeploygenError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Runtime error: {0}")]
    Runtime(#[from] anyhow::Error),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Invalid Kubernetes Yaml: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },
}
