//! Creating a project: the default (and only) nextkit command.
//!
//! Responsibility: turn arguments and config into a feature selection and
//! orchestrator settings, run the orchestrator, and display the report. No
//! scaffolding logic lives here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, instrument};

use nextkit_adapters::{LocalFilesystem, SystemCommandRunner};
use nextkit_core::{
    application::{
        ApplicationError, ModuleStatus, RunReport, ScaffoldOrchestrator, ScaffoldSettings,
    },
    domain::{
        ExternalCommand, FeatureId, FeatureModule, FeatureSelection, ProjectContext,
        TemplateFileSpec,
    },
    error::NextkitError,
};

use crate::{
    cli::{CreateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::TerminalPrompt,
};

/// Execute a scaffold run.
///
/// 1. Require and validate the project name
/// 2. Refuse to touch an existing project or template checkout directory
/// 3. Resolve the feature selection (flags, `--yes` defaults, or prompts)
/// 4. Print the plan and stop if `--dry-run`
/// 5. Run the orchestrator and print its report
#[instrument(skip_all, fields(project = args.name.as_deref().unwrap_or("")))]
pub fn execute(args: CreateArgs, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let name = args.name.as_deref().ok_or(CliError::MissingProjectName)?;
    let working_dir = std::env::current_dir()?;

    let context = ProjectContext::new(name, working_dir.clone()).map_err(NextkitError::from)?;
    if context.project_dir().exists() {
        return Err(CliError::ProjectExists {
            path: context.project_dir().to_path_buf(),
        });
    }
    let checkout = context.template_checkout_dir();
    if checkout.exists() {
        let err = ApplicationError::TemplateCheckoutExists { path: checkout };
        return Err(NextkitError::from(err).into());
    }

    let repository = args
        .template_repo
        .clone()
        .unwrap_or_else(|| config.template.repository.clone());
    let selection = args.selection(config.features.selection());
    debug!(
        repository = %repository,
        interactive = selection.is_none(),
        "Run configured"
    );

    let settings = ScaffoldSettings::new(working_dir).with_template_repository(repository);

    if args.dry_run {
        let plan = Plan::build(&context, &settings, selection);
        return show_plan(&plan, output);
    }

    let mut orchestrator = ScaffoldOrchestrator::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemCommandRunner::new()),
        settings,
    );
    if selection.is_none() {
        orchestrator = orchestrator.with_prompt(Box::new(TerminalPrompt::new()));
    }

    output.header(&format!("Creating '{name}'..."))?;
    let report = orchestrator.run(name, selection);
    show_report(&report, output)?;

    if let Some(failure) = report.failure {
        return Err(CliError::RunFailed {
            stage: failure.after,
            error: failure.error,
        });
    }

    output.success(&format!("Project '{name}' created!"))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {name}"))?;
    output.print("  npm run dev")?;

    Ok(())
}

fn show_report(report: &RunReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(report)?;
        return Ok(());
    }

    if let Some(template) = &report.template {
        output.success(&format!(
            "Template applied ({} copied, {} kept from the generator)",
            template.written.len(),
            template.skipped.len()
        ))?;
    }

    for module in &report.modules {
        match &module.status {
            ModuleStatus::Succeeded => output.success(&format!(
                "{} applied ({} files)",
                module.feature,
                module.files_written.len()
            ))?,
            ModuleStatus::Failed { error } => output.warning(&error.to_string())?,
        }
    }

    let failed = report.failed_modules().count();
    if failed > 0 {
        output.warning(&format!(
            "{failed} of {} features failed; their package.json changes were skipped",
            report.modules.len()
        ))?;
    }
    Ok(())
}

// ── Dry run ───────────────────────────────────────────────────────────────────

/// Everything a run would do, without doing any of it.
#[derive(Debug, Serialize)]
struct Plan {
    app_name: String,
    project_dir: PathBuf,
    template_repository: String,
    /// `None` when the features would be asked interactively.
    features: Option<Vec<FeatureId>>,
    commands: Vec<String>,
    template_files: Vec<TemplateFileSpec>,
    files: Vec<PathBuf>,
    scripts: Vec<String>,
}

impl Plan {
    fn build(
        context: &ProjectContext,
        settings: &ScaffoldSettings,
        selection: Option<FeatureSelection>,
    ) -> Self {
        let project_dir = context.project_dir();
        let modules: Vec<FeatureModule> = selection
            .iter()
            .flat_map(|s| s.enabled())
            .map(FeatureModule::resolve)
            .collect();

        let mut commands = vec![
            ExternalCommand::create_next_app(context.app_name(), context.original_dir()),
            ExternalCommand::git_clone(
                &settings.template_repository,
                &context.template_checkout_dir(),
                context.original_dir(),
            ),
        ];
        commands.extend(modules.iter().flat_map(|m| {
            m.installs()
                .iter()
                .map(move |i| ExternalCommand::npm_add(&i.packages, i.dev, project_dir))
        }));
        commands.push(ExternalCommand::npm_install(project_dir));

        Self {
            app_name: context.app_name().to_string(),
            project_dir: project_dir.to_path_buf(),
            template_repository: settings.template_repository.clone(),
            features: selection.map(|s| s.enabled().collect()),
            commands: commands.iter().map(ToString::to_string).collect(),
            template_files: settings.template_files.clone(),
            files: modules
                .iter()
                .flat_map(|m| m.writes().iter().map(|w| w.path.clone()))
                .collect(),
            scripts: modules
                .iter()
                .flat_map(|m| m.fragment().scripts().keys().cloned())
                .collect(),
        }
    }
}

fn show_plan(plan: &Plan, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(plan)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        plan.app_name,
        plan.project_dir.display()
    ))?;

    output.print("Commands:")?;
    for command in &plan.commands {
        output.print(&format!("  {command}"))?;
    }

    output.print(&format!("Template files from {}:", plan.template_repository))?;
    for spec in &plan.template_files {
        output.print(&format!("  {} ({:?})", spec.path().display(), spec.mode()))?;
    }

    match &plan.features {
        Some(features) if features.is_empty() => output.print("Features: none")?,
        Some(features) => {
            let names: Vec<_> = features.iter().map(|f| f.as_str()).collect();
            output.print(&format!("Features: {}", names.join(", ")))?;
        }
        None => output.print("Features: asked interactively")?,
    }

    if !plan.files.is_empty() {
        output.print("Files:")?;
        for file in &plan.files {
            output.print(&format!("  {}", file.display()))?;
        }
    }
    if !plan.scripts.is_empty() {
        output.print(&format!("Scripts: {}", plan.scripts.join(", ")))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ProjectContext {
        ProjectContext::new("my-app", "/work").unwrap()
    }

    #[test]
    fn plan_lists_commands_in_run_order() {
        let settings = ScaffoldSettings::new("/work");
        let selection = FeatureSelection::from_enabled([
            FeatureId::PerformanceMonitoring,
            FeatureId::StateManagement,
        ]);

        let plan = Plan::build(&context(), &settings, Some(selection));

        assert_eq!(plan.commands.len(), 5);
        assert!(plan.commands[0].starts_with("npx create-next-app@latest my-app"));
        assert!(plan.commands[1].starts_with("git clone"));
        assert_eq!(plan.commands[2], "npm install @reduxjs/toolkit react-redux");
        assert_eq!(plan.commands[3], "npm install --save-dev @next/bundle-analyzer");
        assert_eq!(plan.commands[4], "npm install");
        assert_eq!(plan.scripts, ["analyze"]);
    }

    #[test]
    fn interactive_plan_has_no_modules() {
        let plan = Plan::build(&context(), &ScaffoldSettings::new("/work"), None);

        assert!(plan.features.is_none());
        assert!(plan.files.is_empty());
        assert_eq!(plan.commands.len(), 3);
    }

    #[test]
    fn plan_uses_configured_repository() {
        let settings =
            ScaffoldSettings::new("/work").with_template_repository("https://example.com/t.git");

        let plan = Plan::build(&context(), &settings, Some(FeatureSelection::none()));

        assert_eq!(
            plan.commands[1],
            "git clone https://example.com/t.git /work/my-app-template"
        );
        assert_eq!(plan.features, Some(vec![]));
    }
}
