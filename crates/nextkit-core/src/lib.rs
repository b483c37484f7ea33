//! nextkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the nextkit
//! Next.js scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           nextkit-cli (CLI)             │
//! │   (args, config, prompt, output)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldOrchestrator, FeatureApplier, │
//! │   TemplateMaterializer, ManifestRepo)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, CommandRunner, Prompt)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    nextkit-adapters (Infrastructure)    │
//! │ (LocalFilesystem, SystemCommandRunner)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Manifest, FeatureModule, FileSpec)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nextkit_core::prelude::*;
//!
//! # fn adapters() -> (Box<dyn Filesystem>, Box<dyn CommandRunner>) { unimplemented!() }
//! let (filesystem, runner) = adapters();
//! let orchestrator =
//!     ScaffoldOrchestrator::new(filesystem, runner, ScaffoldSettings::new("/work"));
//!
//! let selection = FeatureSelection::from_enabled([FeatureId::Testing, FeatureId::Docker]);
//! let report = orchestrator.run("my-app", Some(selection));
//! assert!(report.success());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ModuleResult, ModuleStatus, RunReport, RunStage, ScaffoldOrchestrator, ScaffoldSettings,
        ports::{CommandRunner, FeaturePrompt, Filesystem},
    };
    pub use crate::domain::{
        CopyMode, ExternalCommand, FeatureId, FeatureModule, FeatureSelection, Manifest,
        ProjectContext, TemplateFileSpec,
    };
    pub use crate::error::{NextkitError, NextkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
