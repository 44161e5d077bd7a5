//! Marking of search matches inside a page's visual containers, and the
//! reset path that restores them to plain fragment text.

pub mod applier;
pub mod container;


pub use applier::{highlight_matches, reset_containers};
pub use container::{Container, Segment, SegmentKind, DEFAULT_MARKER_CLASS};
