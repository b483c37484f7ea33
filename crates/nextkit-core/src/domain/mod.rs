// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for nextkit.
//!
//! This module contains pure scaffolding policy with no I/O.
//! Filesystem access and process spawning happen behind ports defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: selections, specs and modules are built once
//! - **Closed feature set**: modules are resolved by exhaustive `match`
//!
pub mod assets;
pub mod command;
pub mod context;
pub mod error;
pub mod feature;
pub mod feature_module;
pub mod manifest;
pub mod template;

// Re-exports for convenience
pub use command::ExternalCommand;
pub use context::{ProjectContext, validate_project_name};
pub use error::{DomainError, ErrorCategory};
pub use feature::{FeatureId, FeatureSelection};
pub use feature_module::{FeatureModule, FileWrite, PackageInstall, append_ignore_entry};
pub use manifest::{Manifest, Table};
pub use template::{
    CopyMode, DEFAULT_TEMPLATE_REPOSITORY, TemplateFileSpec, template_dependencies,
};
