use deploygen_common::error::{DeploygenError, FormatError};
use thiserror::Error;

pub type DeploygenCliResult<T = (), E = DeploygenCliError> = Result<T, E>;

#[derive(Debug, Error)]
pub enum DeploygenCliError {
    #[error("Parameter parsing error: {0}")]
    Parameter(#[from] FormatError),
    #[error("Error: unable to initialize config: {0}")]
    InitConfig(String),
    #[error("{0}")]
    Command(#[from] clap::error::Error),
    #[error("Error: {0}")]
    Runtime(String),
}

impl DeploygenCliError {
    /// Process exit status for this error. Bad parameters exit with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            DeploygenCliError::Parameter(_) => 1,
            DeploygenCliError::Command(e) => u8::try_from(e.exit_code()).unwrap_or(2),
            DeploygenCliError::InitConfig(_) | DeploygenCliError::Runtime(_) => 2,
        }
    }
}

impl From<DeploygenError> for DeploygenCliError {
    fn from(error: DeploygenError) -> Self {
        match error {
            DeploygenError::Format(e) => DeploygenCliError::Parameter(e),
            e => DeploygenCliError::Runtime(e.to_string()),
        }
    }
}

impl From<anyhow::Error> for DeploygenCliError {
    fn from(error: anyhow::Error) -> Self {
        DeploygenCliError::Runtime(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_errors_exit_with_one() {
        let err: DeploygenCliError =
            DeploygenError::from(FormatError::Label("foo".to_string())).into();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "Parameter parsing error: Invalid label format: 'foo' (expected key=value)"
        );
    }

    #[test]
    fn io_errors_are_runtime() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DeploygenCliError = DeploygenError::from(io).into();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("Error: "));
    }
}
