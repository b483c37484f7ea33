//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No business logic lives here.

use clap::{Args, Parser};

use nextkit_core::domain::{FeatureId, FeatureSelection};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "nextkit",
    bin_name = "nextkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Next.js project scaffolding",
    long_about = "nextkit creates a Next.js project with create-next-app, layers a \
                  template repository on top, and applies optional feature modules \
                  (testing, Docker, Redux, deployment scripts, env files, bundle analysis).",
    after_help = "EXAMPLES:\n\
        \x20 nextkit my-app\n\
        \x20 nextkit my-app --features testing,docker\n\
        \x20 nextkit my-app --all-features --output-format json\n\
        \x20 nextkit my-app --yes --dry-run",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub create: CreateArgs,
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for creating a project.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Name of the project directory to create in the current directory.
    ///
    /// Optional at the parser level so that a missing name is reported by
    /// the application with its own exit status.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Enable exactly these features, skipping the prompts.
    #[arg(
        short = 'f',
        long = "features",
        value_name = "FEATURE",
        value_delimiter = ',',
        value_parser = parse_feature,
        conflicts_with_all = ["all_features", "no_features"],
        help = "Comma-separated features to enable (skips prompts)",
        long_help = "Comma-separated features to enable, skipping the prompts:
    testing, docker, stateManagement, deploymentScripts,
    environmentManagement, performanceMonitoring
kebab-case and snake_case spellings are accepted too."
    )]
    pub features: Vec<FeatureId>,

    /// Enable every feature.
    #[arg(long = "all-features", conflicts_with = "no_features")]
    pub all_features: bool,

    /// Enable no features.
    #[arg(long = "no-features")]
    pub no_features: bool,

    /// Skip the prompts and use the feature defaults from the config file.
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Print what would be run and written, without doing it.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Print the resolved configuration and exit.
    #[arg(long = "print-config")]
    pub print_config: bool,

    /// Template repository to clone instead of the configured one.
    #[arg(long = "template-repo", value_name = "URL")]
    pub template_repo: Option<String>,
}

impl CreateArgs {
    /// Selection fixed by flags, or `None` when the user should be asked.
    ///
    /// `defaults` is used for `--yes`.
    pub fn selection(&self, defaults: FeatureSelection) -> Option<FeatureSelection> {
        if !self.features.is_empty() {
            Some(FeatureSelection::from_enabled(self.features.iter().copied()))
        } else if self.all_features {
            Some(FeatureSelection::all())
        } else if self.no_features {
            Some(FeatureSelection::none())
        } else if self.yes {
            Some(defaults)
        } else {
            None
        }
    }
}

fn parse_feature(s: &str) -> Result<FeatureId, String> {
    s.parse::<FeatureId>().map_err(|e| e.to_string())
}

// ── tests ─────────────────────────────────────────────────────────────────────
