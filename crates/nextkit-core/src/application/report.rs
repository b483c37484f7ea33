//! Results of feature modules and of a whole run.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::application::services::MaterializeSummary;
use crate::domain::{FeatureId, Manifest};
use crate::error::NextkitError;

/// Orchestrator stages, in the order they are reached.
///
/// `Failed` is terminal and can follow any stage before `Done`; the stage the
/// run had completed is kept in [`StageFailure::after`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunStage {
    Init,
    BaseGenerated,
    TemplateApplied,
    FeaturesResolved,
    FeaturesApplied,
    ManifestMerged,
    Persisted,
    Done,
    Failed,
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Init => "init",
            Self::BaseGenerated => "base generated",
            Self::TemplateApplied => "template applied",
            Self::FeaturesResolved => "features resolved",
            Self::FeaturesApplied => "features applied",
            Self::ManifestMerged => "manifest merged",
            Self::Persisted => "persisted",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Outcome of one feature module.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ModuleStatus {
    Succeeded,
    Failed {
        #[serde(serialize_with = "display")]
        error: NextkitError,
    },
}

/// What a feature module did.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleResult {
    pub feature: FeatureId,
    pub files_written: Vec<PathBuf>,
    #[serde(skip)]
    pub fragment: Manifest,
    #[serde(flatten)]
    pub status: ModuleStatus,
}

impl ModuleResult {
    pub fn is_success(&self) -> bool {
        matches!(self.status, ModuleStatus::Succeeded)
    }

    pub fn error(&self) -> Option<&NextkitError> {
        match &self.status {
            ModuleStatus::Succeeded => None,
            ModuleStatus::Failed { error } => Some(error),
        }
    }
}

/// The run-aborting failure, if any.
#[derive(Debug, Clone, Serialize)]
pub struct StageFailure {
    /// Last stage completed before the failure.
    pub after: RunStage,
    #[serde(serialize_with = "display")]
    pub error: NextkitError,
}

/// End-of-run summary.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub app_name: String,
    pub project_dir: Option<PathBuf>,
    /// Last stage completed, or `Failed`.
    pub stage: RunStage,
    /// Template files copied and kept, once the template stage succeeded.
    pub template: Option<MaterializeSummary>,
    pub modules: Vec<ModuleResult>,
    pub manifest_path: Option<PathBuf>,
    pub failure: Option<StageFailure>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunReport {
    pub(crate) fn start(app_name: &str) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            app_name: app_name.to_string(),
            project_dir: None,
            stage: RunStage::Init,
            template: None,
            modules: Vec::new(),
            manifest_path: None,
            failure: None,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub(crate) fn advance(&mut self, stage: RunStage) {
        self.stage = stage;
    }

    pub(crate) fn fail(mut self, error: NextkitError) -> Self {
        self.failure = Some(StageFailure {
            after: self.stage,
            error,
        });
        self.stage = RunStage::Failed;
        self.finish()
    }

    pub(crate) fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now());
        self
    }

    /// `true` iff every stage-critical step succeeded. Module failures do
    /// not count.
    pub fn success(&self) -> bool {
        self.failure.is_none() && self.stage == RunStage::Done
    }

    /// Modules that ran, in execution order.
    pub fn modules_run(&self) -> impl Iterator<Item = FeatureId> + '_ {
        self.modules.iter().map(|m| m.feature)
    }

    /// Modules that failed, with their errors.
    pub fn failed_modules(&self) -> impl Iterator<Item = (FeatureId, &NextkitError)> + '_ {
        self.modules
            .iter()
            .filter_map(|m| m.error().map(|e| (m.feature, e)))
    }

    pub fn succeeded_modules(&self) -> impl Iterator<Item = FeatureId> + '_ {
        self.modules
            .iter()
            .filter(|m| m.is_success())
            .map(|m| m.feature)
    }
}

fn display<T: fmt::Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
