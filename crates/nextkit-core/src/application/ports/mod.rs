//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `nextkit-adapters` (and the
//! prompt in `nextkit-cli`) implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `CommandRunner`: Blocking external processes (generator, git, npm)
//!   - `FeaturePrompt`: Yes/no feature questions

pub mod output;

pub use output::{CommandRunner, FeaturePrompt, Filesystem};
