//! Pure view-state for the watchlist client.
//!
//! Each list view owns one state type here: fetch results and confirmed
//! mutations are applied to it, and rendering reads from it. No I/O happens
//! in this crate; the CLI performs the API call first and applies the local
//! transformation only after the server confirms (confirm-then-apply).
//!
//! Every state carries a monotonic generation counter. A request takes a
//! generation at start and application of its result is a no-op when a newer
//! request has been issued since, so a late response can never corrupt the
//! state of whatever superseded it.

pub mod catalog;
pub mod completed;
pub mod project;
pub mod watchlist;

pub use catalog::CatalogState;
pub use completed::{decremented_rating, CompletedSortKey, CompletedState};
pub use project::{sort_by_priority, sort_completed};
pub use watchlist::WatchlistState;
