//! Core primitives for multiview.
//!
//! This crate provides the small set of building blocks the list-state
//! manager in the `multiview` crate is assembled from:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Logging Targets**: `tracing` target names used across the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use multiview_core::Signal;
//!
//! // Create a signal that notifies when rows are inserted
//! let rows_inserted = Signal::<(usize, usize)>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = rows_inserted.connect(|(position, count)| {
//!     println!("{count} rows inserted at {position}");
//! });
//!
//! // Emit the signal
//! rows_inserted.emit((0, 3));
//!
//! // Disconnect when done
//! rows_inserted.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionId, Signal};
