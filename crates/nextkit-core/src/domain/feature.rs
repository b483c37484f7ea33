//! Feature identifiers and the per-run feature selection.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::domain::error::DomainError;

/// One of the optional feature modules.
///
/// The declaration order is the execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureId {
    Testing,
    Docker,
    StateManagement,
    DeploymentScripts,
    EnvironmentManagement,
    PerformanceMonitoring,
}

impl FeatureId {
    /// Every feature, in execution order.
    pub const ALL: [FeatureId; 6] = [
        FeatureId::Testing,
        FeatureId::Docker,
        FeatureId::StateManagement,
        FeatureId::DeploymentScripts,
        FeatureId::EnvironmentManagement,
        FeatureId::PerformanceMonitoring,
    ];

    /// Canonical identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Testing => "testing",
            Self::Docker => "docker",
            Self::StateManagement => "stateManagement",
            Self::DeploymentScripts => "deploymentScripts",
            Self::EnvironmentManagement => "environmentManagement",
            Self::PerformanceMonitoring => "performanceMonitoring",
        }
    }

    /// Yes/no question shown by interactive prompts.
    pub fn question(self) -> &'static str {
        match self {
            Self::Testing => "Set up testing (Jest + Testing Library)?",
            Self::Docker => "Add Docker support?",
            Self::StateManagement => "Add state management (Redux Toolkit)?",
            Self::DeploymentScripts => "Add deployment scripts (Vercel)?",
            Self::EnvironmentManagement => "Set up environment variable files?",
            Self::PerformanceMonitoring => "Add bundle analysis (performance monitoring)?",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureId {
    type Err = DomainError;

    /// Accepts the canonical camelCase name as well as kebab/snake case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        FeatureId::ALL
            .into_iter()
            .find(|id| id.as_str().to_ascii_lowercase() == normalised)
            .ok_or_else(|| DomainError::UnknownFeature(s.to_string()))
    }
}

/// Which features are enabled for one run.
///
/// Built once, never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureSelection {
    enabled: [bool; FeatureId::ALL.len()],
}

impl FeatureSelection {
    /// Nothing enabled.
    pub fn none() -> Self {
        Self::default()
    }

    /// Everything enabled.
    pub fn all() -> Self {
        Self {
            enabled: [true; FeatureId::ALL.len()],
        }
    }

    /// Enable exactly the given features.
    pub fn from_enabled(features: impl IntoIterator<Item = FeatureId>) -> Self {
        let mut selection = Self::none();
        for id in features {
            selection.enabled[id.index()] = true;
        }
        selection
    }

    /// Build from explicit `(feature, flag)` answers; unmentioned features are off.
    pub fn from_answers(answers: impl IntoIterator<Item = (FeatureId, bool)>) -> Self {
        let mut selection = Self::none();
        for (id, flag) in answers {
            selection.enabled[id.index()] = flag;
        }
        selection
    }

    pub fn is_enabled(&self, id: FeatureId) -> bool {
        self.enabled[id.index()]
    }

    /// Enabled features in execution order, regardless of how they were chosen.
    pub fn enabled(&self) -> impl Iterator<Item = FeatureId> + '_ {
        FeatureId::ALL
            .into_iter()
            .filter(|id| self.is_enabled(*id))
    }

    pub fn is_empty(&self) -> bool {
        self.enabled().next().is_none()
    }
}

impl Serialize for FeatureSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FeatureId::ALL.len()))?;
        for id in FeatureId::ALL {
            map.serialize_entry(id.as_str(), &self.is_enabled(id))?;
        }
        map.end()
    }
}
