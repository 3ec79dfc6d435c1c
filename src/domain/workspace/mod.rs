//! Workspace module - the single-page UI state and how it evolves.
//!
//! - `WorkspaceState` - immutable snapshot of the page
//! - `WorkspaceEvent` - user actions and external results
//! - `reduce` - pure state transition returning the next snapshot and any
//!   effect the caller must run
//! - `Notification` - dismissible user-facing messages

mod event;
mod notification;
mod reducer;
mod state;

pub use event::{Effect, Outcome, Transition, WorkspaceEvent};
pub use notification::{ErrorKind, Notification, NotificationVariant};
pub use reducer::reduce;
pub use state::{ExportStatus, GenerationStatus, RequestToken, WorkspaceState};
