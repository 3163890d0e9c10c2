//! The diff-computation seam.
//!
//! A [`ListDiffer`] turns an old and a new snapshot into the ordered
//! [`ListUpdate`] sequence a data manager forwards to its host. Sequence
//! alignment (detecting which items moved, or which insertions and removals
//! happened in the middle) belongs to an implementation of this trait
//! supplied by the caller.
//!
//! [`PositionalDiffer`] is the one implementation shipped here. It never
//! aligns: it assumes position `i` of the old snapshot corresponds to
//! position `i` of the new one.

use super::contents::ItemContents;
use super::update::ListUpdate;

/// Computes the positional updates between two snapshots.
///
/// Updates must be ordered so that applying them one by one to `old`
/// produces a list of the same shape as `new`.
pub trait ListDiffer<M> {
    /// Returns the updates that transform `old` into `new`.
    fn diff(&self, old: &[M], new: &[M], contents: &ItemContents<M>) -> Vec<ListUpdate>;
}

impl<M, F> ListDiffer<M> for F
where
    F: Fn(&[M], &[M], &ItemContents<M>) -> Vec<ListUpdate>,
{
    fn diff(&self, old: &[M], new: &[M], contents: &ItemContents<M>) -> Vec<ListUpdate> {
        self(old, new, contents)
    }
}

/// A non-aligning differ.
///
/// Over the common prefix, each contiguous run of positions whose contents
/// differ becomes one `Changed` update carrying the payload computed for the
/// run's first position. The length difference then becomes a single
/// `Inserted` or `Removed` update at the tail.
///
/// ```
/// use multiview::model::{ItemContents, ListDiffer, ListUpdate, PositionalDiffer};
///
/// let updates = PositionalDiffer.diff(&["a", "b", "c"], &["a", "x"], &ItemContents::new());
/// assert_eq!(updates, vec![
///     ListUpdate::Changed { position: 1, count: 1, payload: None },
///     ListUpdate::Removed { position: 2, count: 1 },
/// ]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalDiffer;

impl<M: PartialEq> ListDiffer<M> for PositionalDiffer {
    fn diff(&self, old: &[M], new: &[M], contents: &ItemContents<M>) -> Vec<ListUpdate> {
        let mut updates = Vec::new();
        let common = old.len().min(new.len());

        let mut position = 0;
        while position < common {
            if contents.are_contents_same(&old[position], &new[position]) {
                position += 1;
                continue;
            }

            let start = position;
            let payload = contents.change_payload(&old[start], &new[start]);
            while position < common && !contents.are_contents_same(&old[position], &new[position])
            {
                position += 1;
            }
            updates.push(ListUpdate::Changed {
                position: start,
                count: position - start,
                payload,
            });
        }

        if new.len() > old.len() {
            updates.push(ListUpdate::Inserted {
                position: old.len(),
                count: new.len() - old.len(),
            });
        } else if old.len() > new.len() {
            updates.push(ListUpdate::Removed {
                position: new.len(),
                count: old.len() - new.len(),
            });
        }

        updates
    }
}
