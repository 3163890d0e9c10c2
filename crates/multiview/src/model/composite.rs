//! A host that stitches several data managers into one list.
//!
//! [`CompositeAdapter`] gives every attached manager a contiguous section of
//! one flat position space, in attachment order. It keeps each section's
//! length up to date from the inserted/removed stream, translates
//! manager-local positions into absolute ones, and re-emits the result on
//! [`AdapterSignals`] for the view to consume.
//!
//! ```text
//!  manager A (len 2)     manager B (len 3)
//! ┌──────┬──────┐       ┌──────┬──────┬──────┐
//! │  0   │  1   │       │  0   │  1   │  2   │
//! └──────┴──────┘       └──────┴──────┴──────┘
//!        │                        │
//!        ▼                        ▼
//! ┌──────┬──────┬──────┬──────┬──────┐
//! │  0   │  1   │  2   │  3   │  4   │   absolute positions
//! └──────┴──────┴──────┴──────┴──────┘
//! ```

use multiview_core::Signal;
use parking_lot::Mutex;

use super::host::ListHost;
use super::selection::SelectionCapabilities;
use super::update::{ChangePayload, ManagerId};

/// Signals emitted by a [`CompositeAdapter`], in absolute positions.
pub struct AdapterSignals {
    /// Emitted after items were inserted.
    /// Args: (absolute position, count)
    pub items_inserted: Signal<(usize, usize)>,

    /// Emitted after items were removed.
    /// Args: (absolute position, count)
    pub items_removed: Signal<(usize, usize)>,

    /// Emitted after an item moved.
    /// Args: (absolute from, absolute to)
    pub item_moved: Signal<(usize, usize)>,

    /// Emitted after items changed in place.
    /// Args: (absolute position, count, payload)
    pub items_changed: Signal<(usize, usize, Option<ChangePayload>)>,

    /// Emitted when a manager reports its last single-selection target.
    /// Args: (manager, manager-local index)
    pub last_selected_changed: Signal<(ManagerId, usize)>,
}

impl Default for AdapterSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl AdapterSignals {
    /// Creates a new set of adapter signals.
    pub fn new() -> Self {
        Self {
            items_inserted: Signal::new(),
            items_removed: Signal::new(),
            item_moved: Signal::new(),
            items_changed: Signal::new(),
            last_selected_changed: Signal::new(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Section {
    id: ManagerId,
    len: usize,
}

/// Section table, in attachment order.
#[derive(Debug, Default)]
struct Sections(Vec<Section>);

impl Sections {
    /// Returns the index of the section and its absolute offset.
    fn locate(&self, id: ManagerId) -> Option<(usize, usize)> {
        let mut offset = 0;
        for (index, section) in self.0.iter().enumerate() {
            if section.id == id {
                return Some((index, offset));
            }
            offset += section.len;
        }
        None
    }

    fn total(&self) -> usize {
        self.0.iter().map(|section| section.len).sum()
    }
}

/// A [`ListHost`] that concatenates several managers into one flat list.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use multiview::model::{CompositeAdapter, DataManager, PositionalDiffer};
///
/// let adapter = Arc::new(CompositeAdapter::new());
/// adapter.signals().items_inserted.connect(|(position, count)| {
///     println!("{count} rows at {position}");
/// });
///
/// let mut header = DataManager::new(adapter.clone());
/// let mut body = DataManager::new(adapter.clone());
///
/// body.set_items(vec![10, 11, 12], &PositionalDiffer);   // prints "3 rows at 0"
/// header.set_items(vec![1], &PositionalDiffer);          // prints "1 rows at 0"
///
/// assert_eq!(adapter.len(), 4);
/// assert_eq!(adapter.resolve(2), Some((body.id(), 1)));
/// ```
pub struct CompositeAdapter {
    capabilities: SelectionCapabilities,
    sections: Mutex<Sections>,
    last_selected: Mutex<Option<(ManagerId, usize)>>,
    signals: AdapterSignals,
}

impl Default for CompositeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeAdapter {
    /// Creates an adapter without selection support.
    pub fn new() -> Self {
        Self::with_capabilities(SelectionCapabilities::NONE)
    }

    /// Creates an adapter advertising the given selection features.
    pub fn with_capabilities(capabilities: SelectionCapabilities) -> Self {
        Self {
            capabilities,
            sections: Mutex::new(Sections::default()),
            last_selected: Mutex::new(None),
            signals: AdapterSignals::new(),
        }
    }

    /// Returns the signals for this adapter.
    pub fn signals(&self) -> &AdapterSignals {
        &self.signals
    }

    /// Returns the total number of items across all sections.
    pub fn len(&self) -> usize {
        self.sections.lock().total()
    }

    /// Returns `true` if no section holds any item.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of attached managers.
    pub fn section_count(&self) -> usize {
        self.sections.lock().0.len()
    }

    /// Returns the absolute position of the first item of `id`'s section.
    pub fn section_offset(&self, id: ManagerId) -> Option<usize> {
        self.sections.lock().locate(id).map(|(_, offset)| offset)
    }

    /// Returns the number of items in `id`'s section.
    pub fn section_len(&self, id: ManagerId) -> Option<usize> {
        let sections = self.sections.lock();
        sections.locate(id).map(|(index, _)| sections.0[index].len)
    }

    /// Maps an absolute position to the owning manager and its local position.
    pub fn resolve(&self, position: usize) -> Option<(ManagerId, usize)> {
        let sections = self.sections.lock();
        let mut offset = 0;
        for section in &sections.0 {
            if position < offset + section.len {
                return Some((section.id, position - offset));
            }
            offset += section.len;
        }
        None
    }

    /// Returns the last single-selection target reported by any manager.
    pub fn last_selected(&self) -> Option<(ManagerId, usize)> {
        *self.last_selected.lock()
    }

    /// Runs `f` on the section of `source` and returns its absolute offset.
    ///
    /// The section lock is released before this returns, so callers can emit
    /// signals afterwards without holding it.
    fn with_section<F>(&self, source: ManagerId, event: &'static str, f: F) -> Option<usize>
    where
        F: FnOnce(&mut Section),
    {
        let mut sections = self.sections.lock();
        match sections.locate(source) {
            Some((index, offset)) => {
                f(&mut sections.0[index]);
                Some(offset)
            }
            None => {
                tracing::warn!(
                    target: "multiview::composite",
                    %source,
                    event,
                    "ignoring event from a manager not attached to this adapter"
                );
                None
            }
        }
    }
}

impl ListHost for CompositeAdapter {
    fn items_inserted(&self, source: ManagerId, position: usize, count: usize) {
        if let Some(offset) = self.with_section(source, "inserted", |section| section.len += count) {
            self.signals.items_inserted.emit((offset + position, count));
        }
    }

    fn items_removed(&self, source: ManagerId, position: usize, count: usize) {
        let removed = self.with_section(source, "removed", |section| {
            section.len = section.len.saturating_sub(count);
        });
        if let Some(offset) = removed {
            self.signals.items_removed.emit((offset + position, count));
        }
    }

    fn item_moved(&self, source: ManagerId, from: usize, to: usize) {
        if let Some(offset) = self.with_section(source, "moved", |_| {}) {
            self.signals.item_moved.emit((offset + from, offset + to));
        }
    }

    fn items_changed(
        &self,
        source: ManagerId,
        position: usize,
        count: usize,
        payload: Option<ChangePayload>,
    ) {
        if let Some(offset) = self.with_section(source, "changed", |_| {}) {
            self.signals
                .items_changed
                .emit((offset + position, count, payload));
        }
    }

    fn selection_capabilities(&self) -> SelectionCapabilities {
        self.capabilities
    }

    fn set_last_selected_index(&self, source: ManagerId, index: usize) {
        *self.last_selected.lock() = Some((source, index));
        self.signals.last_selected_changed.emit((source, index));
    }

    fn manager_attached(&self, source: ManagerId) {
        let mut sections = self.sections.lock();
        sections.0.push(Section { id: source, len: 0 });
        tracing::trace!(
            target: "multiview::composite",
            %source,
            sections = sections.0.len(),
            "section attached"
        );
    }

    fn manager_detached(&self, source: ManagerId) {
        let removed = {
            let mut sections = self.sections.lock();
            sections.locate(source).map(|(index, offset)| {
                let section = sections.0.remove(index);
                (offset, section.len)
            })
        };

        {
            let mut last_selected = self.last_selected.lock();
            if matches!(*last_selected, Some((id, _)) if id == source) {
                *last_selected = None;
            }
        }

        match removed {
            Some((offset, len)) => {
                tracing::trace!(target: "multiview::composite", %source, offset, len, "section detached");
                if len > 0 {
                    self.signals.items_removed.emit((offset, len));
                }
            }
            None => {
                tracing::warn!(target: "multiview::composite", %source, "detaching unknown section");
            }
        }
    }
}

static_assertions::assert_impl_all!(CompositeAdapter: Send, Sync);
