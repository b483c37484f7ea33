//! Scaffold Orchestrator - main application workflow.
//!
//! One run walks these stages:
//! 0. Refuse to start if the template checkout directory is already there
//! 1. Generate the base project with the external generator
//! 2. Clone the template, materialize it, remove the checkout
//! 3. Resolve the feature selection (pre-supplied or prompted)
//! 4. Apply enabled feature modules in fixed order
//! 5. Merge template dependencies and module fragments into `package.json`
//! 6. Persist the manifest and run the final install
//!
//! Stage-critical failures end the run in the failed state; feature module
//! failures are only collected.

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, FeaturePrompt, Filesystem},
        report::{ModuleResult, RunReport, RunStage},
        services::{FeatureApplier, ManifestRepository, MaterializeSummary, TemplateMaterializer},
    },
    domain::{
        DEFAULT_TEMPLATE_REPOSITORY, ExternalCommand, FeatureId, FeatureModule, FeatureSelection,
        Manifest, ProjectContext, TemplateFileSpec, template_dependencies,
    },
    error::{NextkitError, NextkitResult},
};

/// Fixed inputs of a run that do not come from the user's answers.
#[derive(Debug, Clone)]
pub struct ScaffoldSettings {
    /// Directory the project is created in.
    pub working_dir: PathBuf,
    /// Git URL of the template repository.
    pub template_repository: String,
    pub template_files: Vec<TemplateFileSpec>,
    /// Merged before any module fragment.
    pub template_dependencies: Manifest,
}

impl ScaffoldSettings {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            template_repository: DEFAULT_TEMPLATE_REPOSITORY.to_string(),
            template_files: TemplateFileSpec::defaults(),
            template_dependencies: template_dependencies(),
        }
    }

    pub fn with_template_repository(mut self, repository: impl Into<String>) -> Self {
        self.template_repository = repository.into();
        self
    }
}

/// Main scaffolding orchestrator.
pub struct ScaffoldOrchestrator {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    prompt: Option<Box<dyn FeaturePrompt>>,
    settings: ScaffoldSettings,
}

impl ScaffoldOrchestrator {
    /// Create an orchestrator with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        settings: ScaffoldSettings,
    ) -> Self {
        Self {
            filesystem,
            runner,
            prompt: None,
            settings,
        }
    }

    /// Attach the prompt used when `run` gets no selection.
    pub fn with_prompt(mut self, prompt: Box<dyn FeaturePrompt>) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// Scaffold `app_name`.
    ///
    /// The returned report is complete in every case; check
    /// [`RunReport::success`] for the overall outcome.
    #[instrument(skip_all, fields(app = %app_name))]
    pub fn run(&self, app_name: &str, selection: Option<FeatureSelection>) -> RunReport {
        let mut report = RunReport::start(app_name);
        info!(run_id = %report.run_id, "Scaffold started");

        match self.run_stages(app_name, selection, &mut report) {
            Ok(()) => {
                info!(
                    modules = report.modules.len(),
                    failed = report.failed_modules().count(),
                    "Scaffold completed"
                );
                report.finish()
            }
            Err(e) => {
                warn!(stage = %report.stage, error = %e, "Scaffold failed");
                report.fail(e)
            }
        }
    }

    fn run_stages(
        &self,
        app_name: &str,
        selection: Option<FeatureSelection>,
        report: &mut RunReport,
    ) -> NextkitResult<()> {
        // Init
        let context =
            ProjectContext::new(app_name, &self.settings.working_dir).map_err(NextkitError::Domain)?;
        report.project_dir = Some(context.project_dir().to_path_buf());

        // The checkout is deleted after use, so it must not be someone else's directory.
        let checkout = context.template_checkout_dir();
        if self.filesystem.exists(&checkout) {
            return Err(ApplicationError::TemplateCheckoutExists { path: checkout }.into());
        }

        // Init -> BaseGenerated
        self.runner.run(&ExternalCommand::create_next_app(
            context.app_name(),
            context.original_dir(),
        ))?;
        report.advance(RunStage::BaseGenerated);
        info!(dir = %context.project_dir().display(), "Base project generated");

        // BaseGenerated -> TemplateApplied
        report.template = Some(self.apply_template(&context)?);
        report.advance(RunStage::TemplateApplied);

        // TemplateApplied -> FeaturesResolved
        let selection = match selection {
            Some(selection) => selection,
            None => self.ask_selection()?,
        };
        report.advance(RunStage::FeaturesResolved);
        info!(
            features = ?selection.enabled().map(FeatureId::as_str).collect::<Vec<_>>(),
            "Features resolved"
        );

        // FeaturesResolved -> FeaturesApplied
        let applier = FeatureApplier::new(self.filesystem.as_ref(), self.runner.as_ref());
        report.modules = selection
            .enabled()
            .map(|id| applier.apply(&FeatureModule::resolve(id), &context))
            .collect();
        report.advance(RunStage::FeaturesApplied);

        // FeaturesApplied -> ManifestMerged
        let repository = ManifestRepository::new(self.filesystem.as_ref());
        let manifest_path = context.manifest_path();
        let base = repository.load(&manifest_path)?;
        let merged = merge_fragments(&base, &self.settings.template_dependencies, &report.modules);
        report.advance(RunStage::ManifestMerged);

        // ManifestMerged -> Persisted
        repository.save(&merged, &manifest_path)?;
        report.manifest_path = Some(manifest_path);
        report.advance(RunStage::Persisted);

        // Persisted -> Done
        self.runner
            .run(&ExternalCommand::npm_install(context.project_dir()))?;
        report.advance(RunStage::Done);

        Ok(())
    }

    /// Clone, materialize, and always remove the checkout this run cloned.
    fn apply_template(&self, context: &ProjectContext) -> NextkitResult<MaterializeSummary> {
        let checkout = context.template_checkout_dir();

        let result = self
            .runner
            .run(&ExternalCommand::git_clone(
                &self.settings.template_repository,
                &checkout,
                context.original_dir(),
            ))
            .and_then(|()| {
                TemplateMaterializer::new(self.filesystem.as_ref()).materialize(
                    &checkout,
                    context.project_dir(),
                    &self.settings.template_files,
                )
            });

        if self.filesystem.exists(&checkout) {
            if let Err(e) = self.filesystem.remove_dir_all(&checkout) {
                warn!(error = %e, path = %checkout.display(), "Failed to remove template checkout");
            }
        }

        result
    }

    /// Ask the prompt once per feature, in execution order.
    fn ask_selection(&self) -> NextkitResult<FeatureSelection> {
        let prompt = self
            .prompt
            .as_ref()
            .ok_or(ApplicationError::AdapterNotConfigured {
                name: "feature prompt",
            })?;

        let mut answers = Vec::with_capacity(FeatureId::ALL.len());
        for id in FeatureId::ALL {
            answers.push((id, prompt.confirm(id)?));
        }
        Ok(FeatureSelection::from_answers(answers))
    }
}

/// Template dependencies first, then each successful module's fragment in
/// execution order. Failed modules contribute nothing.
fn merge_fragments(base: &Manifest, template: &Manifest, modules: &[ModuleResult]) -> Manifest {
    modules
        .iter()
        .filter(|m| m.is_success())
        .fold(base.merge(template), |acc, m| acc.merge(&m.fragment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{MockCommandRunner, MockFeaturePrompt, MockFilesystem};
    use crate::application::report::ModuleStatus;

    fn module(feature: FeatureId, ok: bool) -> ModuleResult {
        ModuleResult {
            feature,
            files_written: vec![],
            fragment: FeatureModule::resolve(feature).fragment().clone(),
            status: if ok {
                ModuleStatus::Succeeded
            } else {
                ModuleStatus::Failed {
                    error: NextkitError::Internal {
                        message: "boom".into(),
                    },
                }
            },
        }
    }

    #[test]
    fn failed_module_fragment_is_not_merged() {
        let base = Manifest::new().with_script("dev", "next dev");
        let merged = merge_fragments(
            &base,
            &Manifest::new(),
            &[
                module(FeatureId::Testing, false),
                module(FeatureId::DeploymentScripts, true),
            ],
        );

        assert_eq!(merged.script("test"), None);
        assert_eq!(merged.script("build"), Some("next build"));
        assert_eq!(merged.script("dev"), Some("next dev"));
    }

    #[test]
    fn template_dependencies_are_merged_first() {
        let base = Manifest::new().with_dependency("axios", "^0.1.0");
        let merged = merge_fragments(&base, &template_dependencies(), &[]);
        assert_eq!(merged.dependency("axios"), Some("^1.7.7"));
    }

    #[test]
    fn generator_failure_stops_before_template() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|cmd| cmd.program() == "npx")
            .times(1)
            .returning(|cmd| {
                Err(ApplicationError::ExternalProcess {
                    command: cmd.to_string(),
                    reason: "exit status: 1".into(),
                }
                .into())
            });
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);

        let report = ScaffoldOrchestrator::new(
            Box::new(fs),
            Box::new(runner),
            ScaffoldSettings::new("/work"),
        )
        .run("my-app", Some(FeatureSelection::none()));

        assert!(!report.success());
        let failure = report.failure.unwrap();
        assert_eq!(failure.after, RunStage::Init);
        assert!(failure.error.to_string().contains("create-next-app"));
    }

    #[test]
    fn invalid_name_fails_without_running_anything() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let report = ScaffoldOrchestrator::new(
            Box::new(MockFilesystem::new()),
            Box::new(runner),
            ScaffoldSettings::new("/work"),
        )
        .run("../escape", None);

        assert!(!report.success());
        assert_eq!(report.stage, RunStage::Failed);
        assert_eq!(report.failure.map(|f| f.after), Some(RunStage::Init));
        assert!(report.project_dir.is_none());
    }

    #[test]
    fn existing_checkout_dir_is_refused_before_any_command() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p == std::path::Path::new("/work/my-app-template"))
            .returning(|_| true);
        fs.expect_remove_dir_all().never();
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let report = ScaffoldOrchestrator::new(
            Box::new(fs),
            Box::new(runner),
            ScaffoldSettings::new("/work"),
        )
        .run("my-app", Some(FeatureSelection::none()));

        let failure = report.failure.unwrap();
        assert_eq!(failure.after, RunStage::Init);
        assert!(matches!(
            failure.error,
            NextkitError::Application(ApplicationError::TemplateCheckoutExists { .. })
        ));
    }

    #[test]
    fn missing_prompt_is_a_configuration_error() {
        let orchestrator = ScaffoldOrchestrator::new(
            Box::new(MockFilesystem::new()),
            Box::new(MockCommandRunner::new()),
            ScaffoldSettings::new("/work"),
        );

        let err = orchestrator.ask_selection().unwrap_err();
        assert!(matches!(
            err,
            NextkitError::Application(ApplicationError::AdapterNotConfigured { .. })
        ));
    }

    #[test]
    fn prompt_is_asked_in_declared_order() {
        let mut prompt = MockFeaturePrompt::new();
        let mut seq = mockall::Sequence::new();
        for id in FeatureId::ALL {
            prompt
                .expect_confirm()
                .withf(move |f| *f == id)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|f| Ok(matches!(f, FeatureId::Docker | FeatureId::Testing)));
        }

        let orchestrator = ScaffoldOrchestrator::new(
            Box::new(MockFilesystem::new()),
            Box::new(MockCommandRunner::new()),
            ScaffoldSettings::new("/work"),
        )
        .with_prompt(Box::new(prompt));

        let selection = orchestrator.ask_selection().unwrap();
        assert_eq!(
            selection.enabled().collect::<Vec<_>>(),
            [FeatureId::Testing, FeatureId::Docker]
        );
    }
}
