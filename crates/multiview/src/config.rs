//! Data manager configuration.
//!
//! [`ManagerConfig`] is plain data: build it in code, or load it from the
//! TOML settings file the host already reads.
//!
//! ```
//! use multiview::config::{ManagerConfig, SnapshotSelection};
//!
//! let config = ManagerConfig::from_toml_str(r#"
//! snapshot-selection = "clear"
//! "#)?;
//! assert_eq!(config.snapshot_selection, SnapshotSelection::Clear);
//! # Ok::<(), multiview::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What happens to the selection when the item snapshot is replaced.
///
/// Positions are only meaningful against the snapshot they were recorded
/// for, so the selection set is always rebuilt; this controls how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapshotSelection {
    /// Move each selected item to the first unclaimed equal item of the new
    /// snapshot (default). The selection never grows.
    #[default]
    Retain,
    /// Drop the selection entirely.
    Clear,
}

/// Configuration for a [`DataManager`](crate::model::DataManager).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ManagerConfig {
    /// Selection policy applied on snapshot replacement.
    pub snapshot_selection: SnapshotSelection,
}

impl ManagerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the snapshot selection policy.
    pub fn with_snapshot_selection(mut self, policy: SnapshotSelection) -> Self {
        self.snapshot_selection = policy;
        self
    }

    /// Parses a configuration from TOML text.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
