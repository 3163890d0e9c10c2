//! Prelude module for multiview.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use multiview::prelude::*;
//! ```

// ============================================================================
// Data Manager and Host
// ============================================================================

pub use crate::model::{CompositeAdapter, DataManager, ListHost, ManagerId};

// ============================================================================
// Update Stream
// ============================================================================

pub use crate::model::{ChangePayload, ListDiffer, ListUpdate, ListUpdateCallback, PositionalDiffer};

// ============================================================================
// Selection
// ============================================================================

pub use crate::model::SelectionCapabilities;
pub use crate::{Error, SelectionKind};

// ============================================================================
// Signals
// ============================================================================

pub use multiview_core::{ConnectionId, Signal};
