//! Positional update events.
//!
//! A diff between two list snapshots is expressed as a sequence of four
//! event kinds: inserted, removed, moved and changed. Positions are always
//! relative to the list state at the moment the event is applied, so the
//! order of a sequence is significant.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identity of a [`DataManager`](super::DataManager).
///
/// Hosts that aggregate several managers use it to route an event to the
/// sub-range owned by the manager that emitted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ManagerId(u64);

impl ManagerId {
    /// Allocates a fresh id.
    pub(crate) fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "manager#{}", self.0)
    }
}

/// Opaque hint attached to a `changed` event.
///
/// Only the rendering layer interprets it (for example "only the title
/// changed"), typically by downcasting to a type it defined itself. Cloning
/// is cheap and clones compare equal.
///
/// ```
/// use multiview::model::ChangePayload;
///
/// #[derive(Debug, PartialEq)]
/// enum TaskChange { Title, Done }
///
/// let payload = ChangePayload::new(TaskChange::Title);
/// assert_eq!(payload.downcast_ref::<TaskChange>(), Some(&TaskChange::Title));
/// assert!(payload.downcast_ref::<String>().is_none());
/// ```
#[derive(Clone)]
pub struct ChangePayload(Arc<dyn Any + Send + Sync>);

impl ChangePayload {
    /// Wraps a value as a payload.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Returns a reference to the value if it is of type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns `true` if the value is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }
}

impl PartialEq for ChangePayload {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ChangePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChangePayload").field(&"..").finish()
    }
}

/// Receiver of a positional update stream.
///
/// Implemented by [`DataManager`](super::DataManager), which forwards every
/// call to its host. Diff collaborators drive an implementation of this
/// trait, either directly or through [`ListUpdate::dispatch`].
pub trait ListUpdateCallback {
    /// `count` new items now occupy `[position, position + count)`.
    fn notify_inserted(&mut self, position: usize, count: usize);

    /// `count` items were removed starting at `position`, measured against
    /// the pre-removal state.
    fn notify_removed(&mut self, position: usize, count: usize);

    /// A single item moved from `from` to `to`.
    fn notify_moved(&mut self, from: usize, to: usize);

    /// `count` items starting at `position` were updated in place.
    fn notify_changed(&mut self, position: usize, count: usize, payload: Option<ChangePayload>);
}

/// A single positional update, as produced by a [`ListDiffer`](super::ListDiffer).
#[derive(Debug, Clone, PartialEq)]
pub enum ListUpdate {
    /// See [`ListUpdateCallback::notify_inserted`].
    Inserted { position: usize, count: usize },
    /// See [`ListUpdateCallback::notify_removed`].
    Removed { position: usize, count: usize },
    /// See [`ListUpdateCallback::notify_moved`].
    Moved { from: usize, to: usize },
    /// See [`ListUpdateCallback::notify_changed`].
    Changed {
        position: usize,
        count: usize,
        payload: Option<ChangePayload>,
    },
}

impl ListUpdate {
    /// Delivers this update to `callback`.
    pub fn dispatch(self, callback: &mut dyn ListUpdateCallback) {
        match self {
            Self::Inserted { position, count } => callback.notify_inserted(position, count),
            Self::Removed { position, count } => callback.notify_removed(position, count),
            Self::Moved { from, to } => callback.notify_moved(from, to),
            Self::Changed {
                position,
                count,
                payload,
            } => callback.notify_changed(position, count, payload),
        }
    }
}
