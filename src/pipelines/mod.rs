//! View assembly for the list and detail pages.
//!
//! Each pipeline fetches, normalizes and describes; every failure degrades
//! to an empty list or a not-found view instead of reaching the caller.

pub mod detail;
pub mod list;

pub use detail::DetailView;
pub use list::ListView;
