//! The host side of a data manager.
//!
//! A host is whatever presents the managed list: a list widget, or an
//! adapter that stitches several managers together. It receives every
//! positional event a manager forwards, tagged with the manager's
//! [`ManagerId`], and declares which selection features it supports.

use super::selection::SelectionCapabilities;
use super::update::{ChangePayload, ManagerId};

/// Notification sink and capability source for data managers.
///
/// All methods take `&self`; hosts are shared behind an `Arc` and keep any
/// bookkeeping of their own behind interior mutability.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use multiview::model::{DataManager, ListHost, ManagerId, SelectionCapabilities};
///
/// struct PrintingHost;
///
/// impl ListHost for PrintingHost {
///     fn items_inserted(&self, source: ManagerId, position: usize, count: usize) {
///         println!("{source}: {count} inserted at {position}");
///     }
///     fn items_removed(&self, source: ManagerId, position: usize, count: usize) {
///         println!("{source}: {count} removed at {position}");
///     }
///     fn item_moved(&self, source: ManagerId, from: usize, to: usize) {
///         println!("{source}: moved {from} -> {to}");
///     }
///     fn items_changed(
///         &self,
///         source: ManagerId,
///         position: usize,
///         count: usize,
///         _payload: Option<multiview::model::ChangePayload>,
///     ) {
///         println!("{source}: {count} changed at {position}");
///     }
///     fn selection_capabilities(&self) -> SelectionCapabilities {
///         SelectionCapabilities::SINGLE
///     }
/// }
///
/// let manager: DataManager<String> = DataManager::new(Arc::new(PrintingHost));
/// assert!(manager.is_empty());
/// ```
pub trait ListHost: Send + Sync {
    /// `count` items were inserted at `position` in `source`.
    fn items_inserted(&self, source: ManagerId, position: usize, count: usize);

    /// `count` items were removed at `position` in `source`.
    fn items_removed(&self, source: ManagerId, position: usize, count: usize);

    /// One item of `source` moved from `from` to `to`.
    fn item_moved(&self, source: ManagerId, from: usize, to: usize);

    /// `count` items of `source` starting at `position` changed in place.
    fn items_changed(
        &self,
        source: ManagerId,
        position: usize,
        count: usize,
        payload: Option<ChangePayload>,
    );

    // -------------------------------------------------------------------------
    // Optional methods with default implementations
    // -------------------------------------------------------------------------

    /// Returns the selection features this host supports.
    ///
    /// Queried once per manager, at construction. The default supports none.
    fn selection_capabilities(&self) -> SelectionCapabilities {
        SelectionCapabilities::NONE
    }

    /// Records the most recent single-selection target of `source`.
    ///
    /// Used by hosts for tie-breaking between managers. The default does
    /// nothing.
    fn set_last_selected_index(&self, _source: ManagerId, _index: usize) {}

    /// A manager bound to this host was created. Its list is empty.
    fn manager_attached(&self, _source: ManagerId) {}

    /// A manager bound to this host was dropped.
    fn manager_detached(&self, _source: ManagerId) {}
}
