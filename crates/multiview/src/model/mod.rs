//! List-state management for list views.
//!
//! This module separates list *state* from list *presentation*. A
//! [`DataManager`] owns the items and the selection; a [`ListHost`] (the
//! presentation side) only ever reacts to the notifications the manager
//! forwards. This enables:
//!
//! - Several managers feeding one view ([`CompositeAdapter`])
//! - Selection bookkeeping that survives snapshot replacement
//! - Minimal updates: only positions whose state actually changed are reported
//!
//! # Core Types
//!
//! - `DataManager`: Owns the snapshot and selection, forwards updates
//! - `ListHost`: The notification sink and capability source
//! - `ListUpdateCallback` / `ListUpdate`: The positional update stream
//! - `ItemContents`: Content-equality and change-payload hooks
//! - `ListDiffer`: The diff-computation seam
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐  ListUpdate  ┌─────────────┐  (ManagerId, ..)  ┌─────────────┐
//! │ ListDiffer  │─────────────>│ DataManager │──────────────────>│  ListHost   │
//! │             │              │             │                   │             │
//! └─────────────┘              └─────────────┘                   └─────────────┘
//!        ▲                            │
//!        │       ┌──────────────┐     │
//!        └───────│ ItemContents │<────┘
//!                └──────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use multiview::model::{CompositeAdapter, DataManager, PositionalDiffer, SelectionCapabilities};
//!
//! let adapter = Arc::new(CompositeAdapter::with_capabilities(SelectionCapabilities::SINGLE));
//! adapter.signals().items_changed.connect(|(position, count, _payload)| {
//!     println!("repaint {count} rows at {position}");
//! });
//!
//! let mut contacts = DataManager::new(adapter.clone());
//! contacts.set_items(vec!["ada", "grace", "linus"], &PositionalDiffer);
//!
//! contacts.set_selected_item(&"grace")?;
//! assert_eq!(contacts.selected_item(), Some(&"grace"));
//! # Ok::<(), multiview::Error>(())
//! ```

mod composite;
mod contents;
mod diff;
mod host;
mod manager;
pub mod selection;
mod update;

pub use composite::{AdapterSignals, CompositeAdapter};
pub use contents::{ChangePayloadFn, ContentsEqualFn, ItemContents};
pub use diff::{ListDiffer, PositionalDiffer};
pub use host::ListHost;
pub use manager::DataManager;
pub use selection::{SelectionCapabilities, SelectionSet};
pub use update::{ChangePayload, ListUpdate, ListUpdateCallback, ManagerId};
