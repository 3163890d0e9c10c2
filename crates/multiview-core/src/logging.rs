//! Logging conventions for multiview.
//!
//! multiview uses the `tracing` crate for instrumentation. The libraries never
//! install a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("multiview::selection=debug"))
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every event emitted by the workspace carries one of the explicit targets
//! in [`targets`], so filters can address a single subsystem.
//!
//! | Target                  | Levels used        | What is logged                          |
//! |-------------------------|--------------------|-----------------------------------------|
//! | `multiview_core::signal`| trace              | signal emission, blocked emits          |
//! | `multiview::manager`    | trace, debug       | forwarded updates, snapshot replacement |
//! | `multiview::selection`  | debug, warn        | selection flips, ignored toggles        |
//! | `multiview::composite`  | trace, warn        | section bookkeeping, unknown managers   |

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "multiview_core::signal";
    /// Diff forwarding and snapshot replacement in the data manager.
    pub const MANAGER: &str = "multiview::manager";
    /// Selection state machine target.
    pub const SELECTION: &str = "multiview::selection";
    /// Composite adapter target.
    pub const COMPOSITE: &str = "multiview::composite";
}
