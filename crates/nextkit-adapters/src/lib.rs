//! Infrastructure adapters for nextkit.
//!
//! This crate implements the ports defined in `nextkit-core::application::ports`.
//! It contains all process spawning and filesystem I/O.

pub mod filesystem;
pub mod process;
pub mod prompt;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingRunner, SystemCommandRunner};
pub use prompt::ScriptedPrompt;
