//! Application layer for nextkit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldOrchestrator and helpers)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Reports**: Per-module and per-run results
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Scaffolding policy
//! (which files, which scripts, which order) lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod report;
pub mod services;

// Re-export main services
pub use services::{
    FeatureApplier, ManifestRepository, MaterializeSummary, ScaffoldOrchestrator,
    ScaffoldSettings, TemplateMaterializer,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, FeaturePrompt, Filesystem};

pub use error::ApplicationError;
pub use report::{ModuleResult, ModuleStatus, RunReport, RunStage, StageFailure};
