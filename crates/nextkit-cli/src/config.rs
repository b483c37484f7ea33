//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `NEXTKIT__SECTION__KEY`
//! 3. Config file (`--config FILE`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use nextkit_core::domain::{DEFAULT_TEMPLATE_REPOSITORY, FeatureId, FeatureSelection};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Feature toggles used when `--yes` skips the prompts.
    pub features: FeatureDefaults,
    pub template: TemplateConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureDefaults {
    pub testing: bool,
    pub docker: bool,
    pub state_management: bool,
    pub deployment_scripts: bool,
    pub environment_management: bool,
    pub performance_monitoring: bool,
}

impl FeatureDefaults {
    pub fn selection(&self) -> FeatureSelection {
        FeatureSelection::from_answers([
            (FeatureId::Testing, self.testing),
            (FeatureId::Docker, self.docker),
            (FeatureId::StateManagement, self.state_management),
            (FeatureId::DeploymentScripts, self.deployment_scripts),
            (FeatureId::EnvironmentManagement, self.environment_management),
            (FeatureId::PerformanceMonitoring, self.performance_monitoring),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Git URL cloned on top of the generated project.
    pub repository: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            repository: DEFAULT_TEMPLATE_REPOSITORY.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from file and environment on top of the defaults.
    ///
    /// A file given with `--config` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix("NEXTKIT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.nextkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "nextkit", "nextkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".nextkit.toml"))
    }

    /// TOML rendering used by `--print-config`.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to render configuration")
    }
}
