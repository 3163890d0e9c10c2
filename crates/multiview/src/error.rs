//! Error types for multiview.

use std::fmt;

/// Result type alias for multiview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The selection feature an operation needs from its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    /// At most one selected item, driven by `set_selected_item`.
    Single,
    /// Any number of selected items, driven by `set_selected_items`.
    Multiple,
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Multiple => write!(f, "multiple"),
        }
    }
}

/// Errors that can occur in multiview.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A selection-mutating operation was called on a manager whose host does
    /// not support the required selection kind.
    #[error("host does not support {required} selection; advertise it through ListHost::selection_capabilities")]
    UnsupportedSelection { required: SelectionKind },

    /// Configuration text could not be parsed.
    #[error("invalid manager configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// Create an unsupported-selection error.
    pub fn unsupported(required: SelectionKind) -> Self {
        Self::UnsupportedSelection { required }
    }

    /// Returns `true` if this error reports a missing selection capability.
    pub fn is_unsupported_selection(&self) -> bool {
        matches!(self, Self::UnsupportedSelection { .. })
    }
}
