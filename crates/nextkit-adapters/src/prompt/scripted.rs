//! A prompt that answers from a fixed script.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use nextkit_core::{
    application::{ApplicationError, ports::FeaturePrompt},
    domain::FeatureId,
    error::NextkitResult,
};

/// Answers feature questions from a preset table and records what was asked.
///
/// Features without an answer are declined. Clones share the record of
/// questions asked.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: HashMap<FeatureId, bool>,
    asked: Arc<Mutex<Vec<FeatureId>>>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, feature: FeatureId, enabled: bool) -> Self {
        self.answers.insert(feature, enabled);
        self
    }

    /// Features asked about so far, in order.
    pub fn asked(&self) -> Vec<FeatureId> {
        self.asked.lock().map(|a| a.clone()).unwrap_or_default()
    }
}

impl FeaturePrompt for ScriptedPrompt {
    fn confirm(&self, feature: FeatureId) -> NextkitResult<bool> {
        self.asked
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .push(feature);
        Ok(self.answers.get(&feature).copied().unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unanswered_features_are_declined() {
        let prompt = ScriptedPrompt::new().answer(FeatureId::Docker, true);
        assert!(prompt.confirm(FeatureId::Docker).unwrap());
        assert!(!prompt.confirm(FeatureId::Testing).unwrap());
        assert_eq!(prompt.asked(), [FeatureId::Docker, FeatureId::Testing]);
    }
}
