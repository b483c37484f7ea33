//! Non-interactive feature prompts.

mod scripted;

pub use scripted::ScriptedPrompt;
