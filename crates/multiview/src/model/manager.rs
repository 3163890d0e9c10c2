//! The list-state manager.
//!
//! [`DataManager<M>`] owns an ordered item snapshot and the selection over
//! it. Structural changes arrive as a positional update stream, which the
//! manager forwards to its [`ListHost`] tagged with its own [`ManagerId`].
//! The host never touches item storage or selection bookkeeping directly.

use std::sync::Arc;

use crate::config::{ManagerConfig, SnapshotSelection};
use crate::error::{Error, Result, SelectionKind};

use super::contents::ItemContents;
use super::diff::ListDiffer;
use super::host::ListHost;
use super::selection::{SelectionCapabilities, SelectionSet};
use super::update::{ChangePayload, ListUpdateCallback, ManagerId};

/// Owns a list snapshot and its selection, and forwards positional updates
/// to a host.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use multiview::model::{CompositeAdapter, DataManager, PositionalDiffer, SelectionCapabilities};
///
/// let adapter = Arc::new(CompositeAdapter::with_capabilities(SelectionCapabilities::MULTIPLE));
/// let mut fruits = DataManager::new(adapter.clone());
///
/// fruits.set_items(vec!["apple", "banana", "cherry"], &PositionalDiffer);
/// assert_eq!(adapter.len(), 3);
///
/// fruits.set_selected_items(&["banana", "cherry"])?;
/// assert_eq!(fruits.selected_items(), vec![&"banana", &"cherry"]);
/// # Ok::<(), multiview::Error>(())
/// ```
pub struct DataManager<M> {
    id: ManagerId,
    host: Arc<dyn ListHost>,
    /// Read from the host once, at construction.
    capabilities: SelectionCapabilities,
    items: Vec<M>,
    selection: SelectionSet,
    contents: ItemContents<M>,
    config: ManagerConfig,
}

impl<M: PartialEq> DataManager<M> {
    /// Creates an empty manager bound to `host`.
    pub fn new(host: Arc<dyn ListHost>) -> Self {
        Self::with_config(host, ManagerConfig::default())
    }

    /// Creates an empty manager bound to `host` with explicit configuration.
    pub fn with_config(host: Arc<dyn ListHost>, config: ManagerConfig) -> Self {
        let id = ManagerId::next();
        let capabilities = host.selection_capabilities();
        tracing::debug!(
            target: "multiview::manager",
            %id,
            single = capabilities.single,
            multiple = capabilities.multiple,
            "data manager created"
        );
        host.manager_attached(id);

        Self {
            id,
            host,
            capabilities,
            items: Vec::new(),
            selection: SelectionSet::new(),
            contents: ItemContents::new(),
            config,
        }
    }

    /// Replaces the content-equality hook handed to differs.
    pub fn with_contents_eq<F>(mut self, f: F) -> Self
    where
        F: Fn(&M, &M) -> bool + Send + Sync + 'static,
    {
        self.contents = std::mem::take(&mut self.contents).with_contents_eq(f);
        self
    }

    /// Replaces the change-payload hook handed to differs.
    pub fn with_change_payload<F>(mut self, f: F) -> Self
    where
        F: Fn(&M, &M) -> Option<ChangePayload> + Send + Sync + 'static,
    {
        self.contents = std::mem::take(&mut self.contents).with_change_payload(f);
        self
    }

    /// Returns this manager's identity.
    pub fn id(&self) -> ManagerId {
        self.id
    }

    /// Returns the selection features the host advertised at construction.
    pub fn capabilities(&self) -> SelectionCapabilities {
        self.capabilities
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Returns the content hooks.
    pub fn contents(&self) -> &ItemContents<M> {
        &self.contents
    }

    /// See [`ItemContents::are_contents_same`].
    pub fn are_contents_same(&self, old: &M, new: &M) -> bool {
        self.contents.are_contents_same(old, new)
    }

    /// See [`ItemContents::change_payload`].
    pub fn change_payload(&self, old: &M, new: &M) -> Option<ChangePayload> {
        self.contents.change_payload(old, new)
    }

    // =========================================================================
    // Snapshot Replacement
    // =========================================================================

    /// Replaces the whole item snapshot and returns the previous one.
    ///
    /// The selection is rebuilt against the new snapshot according to
    /// [`ManagerConfig::snapshot_selection`]. Nothing is forwarded to the
    /// host: the caller is expected to feed the diff between the returned
    /// snapshot and the new one through [`ListUpdateCallback`].
    pub fn replace_items(&mut self, items: Vec<M>) -> Vec<M> {

        let old = std::mem::replace(&mut self.items, items);
        match self.config.snapshot_selection {
            SnapshotSelection::Clear => self.selection.clear(),
            SnapshotSelection::Retain => {
                let previous = std::mem::take(&mut self.selection);
                self.selection = self.retained_selection(&old, &previous);
            }
        }

        tracing::debug!(
            target: "multiview::manager",
            id = %self.id,
            old_len = old.len(),
            new_len = self.items.len(),
            selected = self.selection.len(),
            "snapshot replaced"
        );
        old
    }

    /// Replaces the item snapshot and forwards the updates computed by
    /// `differ`, in order.
    pub fn set_items(&mut self, items: Vec<M>, differ: &dyn ListDiffer<M>) {
        let old = self.replace_items(items);
        let updates = differ.diff(&old, &self.items, &self.contents);
        tracing::trace!(
            target: "multiview::manager",
            id = %self.id,
            update_count = updates.len(),
            "dispatching snapshot diff"
        );
        for update in updates {
            update.dispatch(self);
        }
    }

    /// Carries the selection of `old` over to the current snapshot.
    ///
    /// Each previously selected item claims the first unclaimed position
    /// holding an equal item, so the selection never grows: duplicates that
    /// were not selected before stay unselected.
    fn retained_selection(&self, old: &[M], previous: &SelectionSet) -> SelectionSet {
        let mut retained = SelectionSet::new();
        for item in previous.iter().filter_map(|position| old.get(position)) {
            let claimed = self
                .items
                .iter()
                .enumerate()
                .find(|&(position, candidate)| candidate == item && !retained.is_selected(position))
                .map(|(position, _)| position);
            if let Some(position) = claimed {
                retained.set(position, true);
            }
        }
        retained
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Selects `item`, deselecting the previously selected position.
    ///
    /// The item is located by equality; only its first matching position is
    /// affected. When it is found, it is marked selected (one `changed`
    /// event), the host is told it is the last selected index, and if a
    /// different position was selected before, that position is cleared
    /// (a second `changed` event). When it is not found, nothing changes.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedSelection`] if the host does not support single
    /// selection.
    pub fn set_selected_item(&mut self, item: &M) -> Result<()> {
        self.require(SelectionKind::Single)?;
        if self.items.is_empty() {
            return Ok(());
        }

        let previous = self.selection.first();
        let Some(index) = self.index_of(item) else {
            tracing::debug!(target: "multiview::selection", id = %self.id, "item to select not found");
            return Ok(());
        };

        self.toggle_selection(index, true);
        self.host.set_last_selected_index(self.id, index);

        if let Some(previous) = previous.filter(|&previous| previous != index) {
            self.toggle_selection(previous, false);
        }
        Ok(())
    }

    /// Returns the first selected item in position order.
    pub fn selected_item(&self) -> Option<&M> {
        self.selection
            .first()
            .and_then(|position| self.items.get(position))
    }

    /// Replaces the selection with every position whose item is in `items`.
    ///
    /// Membership is by equality, so every matching position is selected.
    /// One `changed` event is emitted per position whose selection state
    /// actually flips, in ascending position order.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedSelection`] if the host does not support multiple
    /// selection.
    pub fn set_selected_items(&mut self, items: &[M]) -> Result<()> {
        self.require(SelectionKind::Multiple)?;
        if self.items.is_empty() {
            return Ok(());
        }

        let next: SelectionSet = self
            .items
            .iter()
            .enumerate()
            .filter(|&(_, item)| items.contains(item))
            .map(|(position, _)| position)
            .collect();

        let flipped = self.selection.flipped(&next);
        tracing::debug!(
            target: "multiview::selection",
            id = %self.id,
            selected = next.len(),
            flipped = flipped.len(),
            "replacing selection"
        );
        for position in flipped {
            self.toggle_selection(position, next.is_selected(position));
        }
        Ok(())
    }

    /// Returns all selected items in position order.
    pub fn selected_items(&self) -> Vec<&M> {
        self.selection
            .iter()
            .filter_map(|position| self.items.get(position))
            .collect()
    }

    /// Sets the selection flag of one position and emits exactly one
    /// `changed` event for it, with no payload.
    ///
    /// This is the primitive both selection modes build on, and the entry
    /// point for host-driven taps. It does not consult the capabilities.
    /// Positions outside the current snapshot are ignored.
    pub fn toggle_selection(&mut self, position: usize, selected: bool) {
        if position >= self.items.len() {
            tracing::warn!(
                target: "multiview::selection",
                id = %self.id,
                position,
                len = self.items.len(),
                "ignoring selection toggle outside the list"
            );
            return;
        }

        self.selection.set(position, selected);
        tracing::debug!(target: "multiview::selection", id = %self.id, position, selected, "selection toggled");
        self.notify_changed(position, 1, None);
    }

    fn require(&self, kind: SelectionKind) -> Result<()> {
        if self.capabilities.supports(kind) {
            Ok(())
        } else {
            Err(Error::unsupported(kind))
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if an item equal to `item` is present.
    pub fn contains(&self, item: &M) -> bool {
        self.items.contains(item)
    }

    /// Returns the item at `index`.
    pub fn get(&self, index: usize) -> Option<&M> {
        self.items.get(index)
    }

    /// Returns the first position of an item equal to `item`.
    pub fn index_of(&self, item: &M) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }

    /// Returns the last position of an item equal to `item`.
    pub fn last_index_of(&self, item: &M) -> Option<usize> {
        self.items.iter().rposition(|candidate| candidate == item)
    }

    /// Checks if the position is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.is_selected(index)
    }

    /// Returns the current snapshot.
    pub fn items(&self) -> &[M] {
        &self.items
    }

    /// Returns the selection set.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }
}

impl<M> ListUpdateCallback for DataManager<M> {
    fn notify_inserted(&mut self, position: usize, count: usize) {
        tracing::trace!(target: "multiview::manager", id = %self.id, position, count, "forwarding inserted");
        self.host.items_inserted(self.id, position, count);
    }

    fn notify_removed(&mut self, position: usize, count: usize) {
        tracing::trace!(target: "multiview::manager", id = %self.id, position, count, "forwarding removed");
        self.host.items_removed(self.id, position, count);
    }

    fn notify_moved(&mut self, from: usize, to: usize) {
        tracing::trace!(target: "multiview::manager", id = %self.id, from, to, "forwarding moved");
        self.host.item_moved(self.id, from, to);
    }

    fn notify_changed(&mut self, position: usize, count: usize, payload: Option<ChangePayload>) {
        tracing::trace!(
            target: "multiview::manager",
            id = %self.id,
            position,
            count,
            has_payload = payload.is_some(),
            "forwarding changed"
        );
        self.host.items_changed(self.id, position, count, payload);
    }
}

static_assertions::assert_impl_all!(DataManager<String>: Send);

impl<M> Drop for DataManager<M> {
    fn drop(&mut self) {
        self.host.manager_detached(self.id);
    }
}

impl<M: std::fmt::Debug> std::fmt::Debug for DataManager<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataManager")
            .field("id", &self.id)
            .field("capabilities", &self.capabilities)
            .field("items", &self.items)
            .field("selection", &self.selection)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListUpdate, PositionalDiffer};
    use parking_lot::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum HostEvent {
        Inserted(ManagerId, usize, usize),
        Removed(ManagerId, usize, usize),
        Moved(ManagerId, usize, usize),
        Changed(ManagerId, usize, usize, Option<ChangePayload>),
        LastSelected(ManagerId, usize),
    }

    struct RecordingHost {
        capabilities: SelectionCapabilities,
        events: Mutex<Vec<HostEvent>>,
    }

    impl RecordingHost {
        fn new(capabilities: SelectionCapabilities) -> Arc<Self> {
            Arc::new(Self {
                capabilities,
                events: Mutex::new(Vec::new()),
            })
        }

        fn take(&self) -> Vec<HostEvent> {
            std::mem::take(&mut *self.events.lock())
        }
    }

    impl ListHost for RecordingHost {
        fn items_inserted(&self, source: ManagerId, position: usize, count: usize) {
            self.events
                .lock()
                .push(HostEvent::Inserted(source, position, count));
        }

        fn items_removed(&self, source: ManagerId, position: usize, count: usize) {
            self.events
                .lock()
                .push(HostEvent::Removed(source, position, count));
        }

        fn item_moved(&self, source: ManagerId, from: usize, to: usize) {
            self.events.lock().push(HostEvent::Moved(source, from, to));
        }

        fn items_changed(
            &self,
            source: ManagerId,
            position: usize,
            count: usize,
            payload: Option<ChangePayload>,
        ) {
            self.events
                .lock()
                .push(HostEvent::Changed(source, position, count, payload));
        }

        fn selection_capabilities(&self) -> SelectionCapabilities {
            self.capabilities
        }

        fn set_last_selected_index(&self, source: ManagerId, index: usize) {
            self.events
                .lock()
                .push(HostEvent::LastSelected(source, index));
        }
    }

    fn manager_with(
        capabilities: SelectionCapabilities,
        items: Vec<&'static str>,
    ) -> (Arc<RecordingHost>, DataManager<&'static str>) {
        let host = RecordingHost::new(capabilities);
        let mut manager = DataManager::new(host.clone());
        manager.replace_items(items);
        (host, manager)
    }

    #[test]
    fn test_new_manager_is_empty() {
        let (host, manager) = manager_with(SelectionCapabilities::NONE, vec![]);
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
        assert!(manager.selected_item().is_none());
        assert!(manager.selected_items().is_empty());
        assert!(host.take().is_empty());
    }

    #[test]
    fn test_forwarding_preserves_order_and_identity() {
        let (host, mut manager) = manager_with(SelectionCapabilities::NONE, vec![]);
        let id = manager.id();
        let payload = ChangePayload::new("title");

        manager.notify_inserted(0, 3);
        manager.notify_moved(2, 0);
        manager.notify_changed(1, 2, Some(payload.clone()));
        manager.notify_removed(0, 1);
        manager.notify_inserted(0, 3);

        assert_eq!(
            host.take(),
            vec![
                HostEvent::Inserted(id, 0, 3),
                HostEvent::Moved(id, 2, 0),
                HostEvent::Changed(id, 1, 2, Some(payload)),
                HostEvent::Removed(id, 0, 1),
                HostEvent::Inserted(id, 0, 3),
            ]
        );
    }

    #[test]
    fn test_queries() {
        let (_host, manager) = manager_with(SelectionCapabilities::NONE, vec!["a", "b", "a", "c"]);
        assert_eq!(manager.len(), 4);
        assert!(manager.contains(&"c"));
        assert!(!manager.contains(&"z"));
        assert_eq!(manager.get(1), Some(&"b"));
        assert_eq!(manager.get(4), None);
        assert_eq!(manager.index_of(&"a"), Some(0));
        assert_eq!(manager.last_index_of(&"a"), Some(2));
        assert_eq!(manager.index_of(&"z"), None);
        assert_eq!(manager.last_index_of(&"z"), None);
        assert!(!manager.is_selected(0));
        assert_eq!(manager.items(), &["a", "b", "a", "c"]);
    }

    #[test]
    fn test_single_selection_switch() {
        let (host, mut manager) = manager_with(SelectionCapabilities::SINGLE, vec!["a", "b", "c"]);
        let id = manager.id();

        manager.set_selected_item(&"a").unwrap();
        assert_eq!(
            host.take(),
            vec![
                HostEvent::Changed(id, 0, 1, None),
                HostEvent::LastSelected(id, 0),
            ]
        );

        manager.set_selected_item(&"c").unwrap();
        assert_eq!(
            host.take(),
            vec![
                HostEvent::Changed(id, 2, 1, None),
                HostEvent::LastSelected(id, 2),
                HostEvent::Changed(id, 0, 1, None),
            ]
        );
        assert_eq!(manager.selected_item(), Some(&"c"));
        assert!(!manager.is_selected(0));
        assert!(manager.is_selected(2));
    }

    #[test]
    fn test_single_selection_reselect_keeps_selection() {
        let (host, mut manager) = manager_with(SelectionCapabilities::SINGLE, vec!["a", "b"]);
        manager.set_selected_item(&"b").unwrap();
        host.take();

        manager.set_selected_item(&"b").unwrap();

        let id = manager.id();
        assert_eq!(
            host.take(),
            vec![
                HostEvent::Changed(id, 1, 1, None),
                HostEvent::LastSelected(id, 1),
            ]
        );
        assert_eq!(manager.selected_item(), Some(&"b"));
    }

    #[test]
    fn test_single_selection_absent_item_keeps_previous() {
        let (host, mut manager) = manager_with(SelectionCapabilities::SINGLE, vec!["a", "b"]);
        manager.set_selected_item(&"a").unwrap();
        host.take();

        manager.set_selected_item(&"zzz").unwrap();

        assert!(host.take().is_empty());
        assert_eq!(manager.selected_item(), Some(&"a"));
    }

    #[test]
    fn test_single_selection_affects_first_duplicate_only() {
        let (_host, mut manager) = manager_with(SelectionCapabilities::SINGLE, vec!["x", "y", "x"]);
        manager.set_selected_item(&"x").unwrap();
        assert!(manager.is_selected(0));
        assert!(!manager.is_selected(2));
    }

    #[test]
    fn test_multi_selection_affects_every_duplicate() {
        let (host, mut manager) = manager_with(SelectionCapabilities::MULTIPLE, vec!["x", "y", "x"]);
        manager.set_selected_items(&["x"]).unwrap();
        assert_eq!(manager.selected_items(), vec![&"x", &"x"]);
        assert_eq!(host.take().len(), 2);
    }

    #[test]
    fn test_capability_gating() {
        let (host, mut manager) = manager_with(SelectionCapabilities::NONE, vec!["a", "b"]);

        let err = manager.set_selected_item(&"a").unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedSelection {
                required: SelectionKind::Single
            }
        ));
        let err = manager.set_selected_items(&["a"]).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedSelection {
                required: SelectionKind::Multiple
            }
        ));

        assert!(manager.selection().is_empty());
        assert!(host.take().is_empty());
    }

    #[test]
    fn test_capability_gating_on_empty_list() {
        let (host, mut manager) = manager_with(SelectionCapabilities::MULTIPLE, vec![]);
        assert!(manager.set_selected_item(&"a").is_err());
        assert!(manager.set_selected_items(&["a"]).is_ok());
        assert!(host.take().is_empty());
        assert!(manager.selection().is_empty());
        assert!(manager.is_empty());
    }

    #[test]
    fn test_toggle_selection_emits_one_event() {
        let (host, mut manager) = manager_with(SelectionCapabilities::NONE, vec!["a", "b"]);
        let id = manager.id();

        manager.toggle_selection(1, true);
        manager.toggle_selection(1, true);

        assert_eq!(
            host.take(),
            vec![
                HostEvent::Changed(id, 1, 1, None),
                HostEvent::Changed(id, 1, 1, None),
            ]
        );
        assert!(manager.is_selected(1));
    }

    #[test]
    fn test_toggle_outside_list_is_ignored() {
        let (host, mut manager) = manager_with(SelectionCapabilities::ALL, vec!["a"]);
        manager.toggle_selection(5, true);
        assert!(host.take().is_empty());
        assert!(!manager.is_selected(5));
    }

    #[test]
    fn test_replace_retains_selection_by_value() {
        let (host, mut manager) = manager_with(SelectionCapabilities::MULTIPLE, vec!["a", "b", "c"]);
        manager.set_selected_items(&["b", "c"]).unwrap();
        host.take();

        let old = manager.replace_items(vec!["c", "d", "b", "b"]);

        assert_eq!(old, vec!["a", "b", "c"]);
        assert_eq!(manager.selection().iter().collect::<Vec<_>>(), vec![0, 2]);
        assert!(host.take().is_empty());
    }

    #[test]
    fn test_replace_retains_single_selection_once() {
        let (_host, mut manager) = manager_with(SelectionCapabilities::SINGLE, vec!["a", "b"]);
        manager.set_selected_item(&"b").unwrap();

        manager.replace_items(vec!["b", "x", "b"]);

        assert_eq!(manager.selection().iter().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_identical_snapshot_does_not_spread_selection_to_duplicates() {
        let (host, mut manager) = manager_with(SelectionCapabilities::ALL, vec!["a", "b", "a"]);
        manager.set_selected_item(&"a").unwrap();
        host.take();

        manager.set_items(vec!["a", "b", "a"], &PositionalDiffer);

        assert_eq!(manager.selection().iter().collect::<Vec<_>>(), vec![0]);
        assert!(!manager.is_selected(2));
        assert!(host.take().is_empty());
    }

    #[test]
    fn test_selected_duplicates_each_keep_one_position() {
        let (_host, mut manager) = manager_with(SelectionCapabilities::MULTIPLE, vec!["a", "b", "a"]);
        manager.set_selected_items(&["a"]).unwrap();

        manager.replace_items(vec!["b", "a", "a", "a"]);

        assert_eq!(manager.selection().iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_replace_drops_stale_positions() {
        let (_host, mut manager) = manager_with(SelectionCapabilities::MULTIPLE, vec!["a", "b", "c"]);
        manager.set_selected_items(&["c"]).unwrap();

        manager.replace_items(vec!["a"]);

        assert!(manager.selection().is_empty());
        assert!(!manager.is_selected(2));
    }

    #[test]
    fn test_replace_with_clear_policy() {
        let host = RecordingHost::new(SelectionCapabilities::MULTIPLE);
        let config = ManagerConfig::new().with_snapshot_selection(SnapshotSelection::Clear);
        let mut manager = DataManager::with_config(host.clone(), config);
        manager.replace_items(vec!["a", "b"]);
        manager.set_selected_items(&["a"]).unwrap();

        manager.replace_items(vec!["a", "b"]);

        assert!(manager.selection().is_empty());
    }

    #[test]
    fn test_set_items_forwards_diff() {
        let host = RecordingHost::new(SelectionCapabilities::NONE);
        let mut manager = DataManager::new(host.clone());
        let id = manager.id();

        manager.set_items(vec![1, 2, 3], &PositionalDiffer);
        manager.set_items(vec![1, 5], &PositionalDiffer);

        assert_eq!(
            host.take(),
            vec![
                HostEvent::Inserted(id, 0, 3),
                HostEvent::Changed(id, 1, 1, None),
                HostEvent::Removed(id, 2, 1),
            ]
        );
    }

    #[test]
    fn test_set_items_uses_manager_hooks() {
        #[derive(Debug, Clone, PartialEq)]
        struct Row {
            label: &'static str,
            hits: u32,
        }

        let host = RecordingHost::new(SelectionCapabilities::NONE);
        let mut manager = DataManager::new(host.clone())
            .with_contents_eq(|old: &Row, new: &Row| old.label == new.label)
            .with_change_payload(|_, new| Some(ChangePayload::new(new.label)));

        manager.set_items(vec![Row { label: "a", hits: 0 }], &PositionalDiffer);
        host.take();

        manager.set_items(vec![Row { label: "a", hits: 9 }], &PositionalDiffer);
        assert!(host.take().is_empty());

        manager.set_items(vec![Row { label: "b", hits: 9 }], &PositionalDiffer);
        match host.take().as_slice() {
            [HostEvent::Changed(_, 0, 1, Some(payload))] => {
                assert_eq!(payload.downcast_ref::<&'static str>(), Some(&"b"));
            }
            other => panic!("unexpected events {other:?}"),
        }
    }

    #[test]
    fn test_set_items_with_closure_differ() {
        let host = RecordingHost::new(SelectionCapabilities::NONE);
        let mut manager = DataManager::new(host.clone());
        let id = manager.id();
        manager.replace_items(vec!['a', 'b']);

        let swap = |_: &[char], _: &[char], _: &ItemContents<char>| vec![ListUpdate::Moved { from: 1, to: 0 }];
        manager.set_items(vec!['b', 'a'], &swap);

        assert_eq!(host.take(), vec![HostEvent::Moved(id, 1, 0)]);
    }

    #[test]
    fn test_manager_can_be_handed_to_another_thread() {
        let (host, mut manager) = manager_with(SelectionCapabilities::MULTIPLE, vec!["a", "b", "c"]);
        manager.set_selected_items(&["a"]).unwrap();

        let mut manager = std::thread::spawn(move || {
            manager.set_selected_items(&["c"]).unwrap();
            manager.replace_items(vec!["c", "a"]);
            manager
        })
        .join()
        .unwrap();

        manager.toggle_selection(1, true);
        assert_eq!(manager.selected_items(), vec![&"c", &"a"]);
        assert_eq!(host.take().len(), 4);
    }

    #[test]
    fn test_attach_and_detach_notify_host() {
        struct LifecycleHost(Mutex<Vec<(&'static str, ManagerId)>>);

        impl ListHost for LifecycleHost {
            fn items_inserted(&self, _: ManagerId, _: usize, _: usize) {}
            fn items_removed(&self, _: ManagerId, _: usize, _: usize) {}
            fn item_moved(&self, _: ManagerId, _: usize, _: usize) {}
            fn items_changed(&self, _: ManagerId, _: usize, _: usize, _: Option<ChangePayload>) {}

            fn manager_attached(&self, source: ManagerId) {
                self.0.lock().push(("attached", source));
            }

            fn manager_detached(&self, source: ManagerId) {
                self.0.lock().push(("detached", source));
            }
        }

        let host = Arc::new(LifecycleHost(Mutex::new(Vec::new())));
        let manager: DataManager<u8> = DataManager::new(host.clone());
        let id = manager.id();
        assert_eq!(manager.capabilities(), SelectionCapabilities::NONE);
        drop(manager);

        assert_eq!(*host.0.lock(), vec![("attached", id), ("detached", id)]);
    }
}
