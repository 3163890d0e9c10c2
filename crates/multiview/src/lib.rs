//! multiview: list-state management for list views.
//!
//! multiview owns the state behind a list view so the view never has to:
//! the ordered item snapshot, the set of selected positions, and the
//! translation of snapshot changes into positional notifications.
//!
//! # Modules
//!
//! - [`model`]: The data manager, its host contract, selection and diff types
//! - [`config`]: Manager configuration, loadable from TOML
//!
//! Signals come from the `multiview-core` crate.
//!
//! # Logging
//!
//! All events go through `tracing` with the targets listed in
//! [`multiview_core::logging::targets`]. Install a subscriber in your
//! application to see them.

pub mod config;
mod error;
pub mod model;
pub mod prelude;

pub use error::{Error, Result, SelectionKind};
