//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a project" or "apply a feature".

pub mod feature_applier;
pub mod manifest_repository;
pub mod materializer;
pub mod orchestrator;

pub use feature_applier::FeatureApplier;
pub use manifest_repository::ManifestRepository;
pub use materializer::{MaterializeSummary, TemplateMaterializer};
pub use orchestrator::{ScaffoldOrchestrator, ScaffoldSettings};
