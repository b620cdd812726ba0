use std::process::ExitCode;

use deploygen_cli::{error::DeploygenCliError, exec};

fn main() -> ExitCode {
    match exec() {
        Ok(_) => ExitCode::SUCCESS,
        Err(DeploygenCliError::Command(e)) => e.exit(),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
