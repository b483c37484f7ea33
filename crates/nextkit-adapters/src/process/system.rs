//! Runs external commands with `std::process::Command`.

use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use nextkit_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::ExternalCommand,
    error::NextkitResult,
};

/// Spawns real processes and blocks until they exit.
///
/// stdin/stdout/stderr are inherited so the generator and npm talk to the
/// user directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip_all, fields(command = %command))]
    fn run(&self, command: &ExternalCommand) -> NextkitResult<()> {
        debug!(cwd = %command.cwd().display(), "Spawning");

        let status = Command::new(command.program())
            .args(command.args())
            .current_dir(command.cwd())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ApplicationError::ExternalProcess {
                command: command.to_string(),
                reason: format!("could not start: {e}"),
            })?;

        if !status.success() {
            return Err(ApplicationError::ExternalProcess {
                command: command.to_string(),
                reason: status.to_string(),
            }
            .into());
        }

        debug!("Exited successfully");
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn zero_exit_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = ExternalCommand::new("true", Vec::<String>::new(), dir.path());
        assert!(SystemCommandRunner::new().run(&cmd).is_ok());
    }

    #[test]
    fn non_zero_exit_names_command() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = ExternalCommand::new("false", Vec::<String>::new(), dir.path());
        let err = SystemCommandRunner::new().run(&cmd).unwrap_err();
        assert!(err.to_string().contains("`false`"));
    }

    #[test]
    fn missing_program_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = ExternalCommand::new("nextkit-no-such-program", ["x"], dir.path());
        let err = SystemCommandRunner::new().run(&cmd).unwrap_err();
        assert!(err.to_string().contains("could not start"));
    }
}
