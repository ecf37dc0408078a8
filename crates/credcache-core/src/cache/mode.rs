//! Routing mode and write policy

use serde::{Deserialize, Serialize};

/// Which credential set reads and writes target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheMode {
    /// Long-lived entries
    #[default]
    Persistent,
    /// Entries that can be discarded as a group
    Temporary,
}

impl CacheMode {
    /// Map the legacy `temp` flag onto a mode
    #[must_use]
    pub fn from_temp(temp: bool) -> Self {
        if temp {
            Self::Temporary
        } else {
            Self::Persistent
        }
    }

    /// Whether this is the temporary mode
    #[must_use]
    pub fn is_temporary(self) -> bool {
        matches!(self, Self::Temporary)
    }
}

impl std::fmt::Display for CacheMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persistent => write!(f, "persistent"),
            Self::Temporary => write!(f, "temporary"),
        }
    }
}

/// What a write does when the key is already present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverwritePolicy {
    /// Replace the existing entry (last write wins)
    #[default]
    Overwrite,
    /// Keep the existing entry and drop the new one (first write wins)
    InsertIfAbsent,
}

impl From<bool> for OverwritePolicy {
    fn from(overwrite: bool) -> Self {
        if overwrite {
            Self::Overwrite
        } else {
            Self::InsertIfAbsent
        }
    }
}
