//! Command runner that records instead of spawning, for tests and dry runs.

use std::sync::{Arc, Mutex};

use nextkit_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::ExternalCommand,
    error::NextkitResult,
};

type Predicate = Arc<dyn Fn(&ExternalCommand) -> bool + Send + Sync>;
type Effect = Arc<dyn Fn(&ExternalCommand) + Send + Sync>;

/// Records every command; optionally fails the ones matching a predicate.
///
/// Clones share the recorded log.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    log: Arc<Mutex<Vec<ExternalCommand>>>,
    failures: Vec<Predicate>,
    effects: Vec<Effect>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every command for which `predicate` returns true.
    pub fn fail_when(
        mut self,
        predicate: impl Fn(&ExternalCommand) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.failures.push(Arc::new(predicate));
        self
    }

    /// Call `effect` after every command that succeeds, standing in for
    /// what the real program would leave behind.
    pub fn on_success(
        mut self,
        effect: impl Fn(&ExternalCommand) + Send + Sync + 'static,
    ) -> Self {
        self.effects.push(Arc::new(effect));
        self
    }

    /// Commands run so far, in order.
    pub fn commands(&self) -> Vec<ExternalCommand> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Command lines run so far, in order.
    pub fn command_lines(&self) -> Vec<String> {
        self.commands().iter().map(ToString::to_string).collect()
    }
}

impl std::fmt::Debug for RecordingRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingRunner")
            .field("log", &self.log)
            .field("failures", &self.failures.len())
            .field("effects", &self.effects.len())
            .finish()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &ExternalCommand) -> NextkitResult<()> {
        self.log
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .push(command.clone());

        if self.failures.iter().any(|fails| fails(command)) {
            return Err(ApplicationError::ExternalProcess {
                command: command.to_string(),
                reason: "exit status: 1".into(),
            }
            .into());
        }

        for effect in &self.effects {
            effect(command);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn records_in_order() {
        let runner = RecordingRunner::new();
        runner
            .run(&ExternalCommand::npm_install(Path::new("/p")))
            .unwrap();
        runner
            .run(&ExternalCommand::npm_add(&["jest"], true, Path::new("/p")))
            .unwrap();

        assert_eq!(
            runner.command_lines(),
            ["npm install", "npm install --save-dev jest"]
        );
    }

    #[test]
    fn matching_commands_fail_but_are_recorded() {
        let runner = RecordingRunner::new().fail_when(|cmd| cmd.program() == "git");
        let clone = ExternalCommand::git_clone("repo", Path::new("/w/t"), Path::new("/w"));

        assert!(runner.run(&clone).is_err());
        assert!(runner.run(&ExternalCommand::npm_install(Path::new("/p"))).is_ok());
        assert_eq!(runner.commands().len(), 2);
    }

    #[test]
    fn effects_follow_successful_commands_only() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let runner = RecordingRunner::new()
            .fail_when(|cmd| cmd.program() == "git")
            .on_success(move |cmd| sink.lock().unwrap().push(cmd.to_string()));

        let clone = ExternalCommand::git_clone("repo", Path::new("/w/t"), Path::new("/w"));
        let _ = runner.run(&clone);
        runner.run(&ExternalCommand::npm_install(Path::new("/p"))).unwrap();

        assert_eq!(*seen.lock().unwrap(), ["npm install"]);
    }
}
