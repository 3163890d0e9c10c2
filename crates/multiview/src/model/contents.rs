//! Content-equality and change-payload hooks.
//!
//! A diff collaborator asks two questions about an old/new item pair it has
//! already matched: do they look the same, and if not, what changed?
//! [`ItemContents`] answers both, using value equality and "no payload"
//! unless the host installs closures of its own.

use std::sync::Arc;

use super::update::ChangePayload;

/// Type alias for a content-equality function.
pub type ContentsEqualFn<M> = Arc<dyn Fn(&M, &M) -> bool + Send + Sync>;

/// Type alias for a change-payload function.
pub type ChangePayloadFn<M> = Arc<dyn Fn(&M, &M) -> Option<ChangePayload> + Send + Sync>;

/// The pair of content hooks consulted by a [`ListDiffer`](super::ListDiffer).
///
/// # Example
///
/// ```
/// use multiview::model::{ChangePayload, ItemContents};
///
/// #[derive(PartialEq)]
/// struct Row { id: u32, title: String, views: u64 }
///
/// // View counts are not displayed, so ignore them.
/// let contents = ItemContents::<Row>::new()
///     .with_contents_eq(|old, new| old.title == new.title)
///     .with_change_payload(|_, _| Some(ChangePayload::new("title")));
///
/// let a = Row { id: 1, title: "a".into(), views: 1 };
/// let b = Row { id: 1, title: "a".into(), views: 9 };
/// assert!(contents.are_contents_same(&a, &b));
/// ```
pub struct ItemContents<M> {
    contents_eq: Option<ContentsEqualFn<M>>,
    change_payload: Option<ChangePayloadFn<M>>,
}

impl<M> Clone for ItemContents<M> {
    fn clone(&self) -> Self {
        Self {
            contents_eq: self.contents_eq.clone(),
            change_payload: self.change_payload.clone(),
        }
    }
}

impl<M> Default for ItemContents<M> {
    fn default() -> Self {
        Self {
            contents_eq: None,
            change_payload: None,
        }
    }
}

impl<M> std::fmt::Debug for ItemContents<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemContents")
            .field("custom_contents_eq", &self.contents_eq.is_some())
            .field("custom_change_payload", &self.change_payload.is_some())
            .finish()
    }
}

impl<M: PartialEq> ItemContents<M> {
    /// Creates hooks with the default behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the content-equality hook.
    pub fn with_contents_eq<F>(mut self, f: F) -> Self
    where
        F: Fn(&M, &M) -> bool + Send + Sync + 'static,
    {
        self.contents_eq = Some(Arc::new(f));
        self
    }

    /// Replaces the change-payload hook.
    pub fn with_change_payload<F>(mut self, f: F) -> Self
    where
        F: Fn(&M, &M) -> Option<ChangePayload> + Send + Sync + 'static,
    {
        self.change_payload = Some(Arc::new(f));
        self
    }

    /// Returns `true` if the two items render identically.
    ///
    /// Defaults to `old == new`.
    pub fn are_contents_same(&self, old: &M, new: &M) -> bool {
        match self.contents_eq {
            Some(ref contents_eq) => contents_eq(old, new),
            None => old == new,
        }
    }

    /// Describes what changed between two items.
    ///
    /// Defaults to `None`.
    pub fn change_payload(&self, old: &M, new: &M) -> Option<ChangePayload> {
        self.change_payload
            .as_ref()
            .and_then(|change_payload| change_payload(old, new))
    }
}
