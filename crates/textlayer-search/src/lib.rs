//! Page text search: find query matches in a rejoined, line-break-resolved
//! rendition of a page's text fragments and map them back to
//! (fragment, offset) coordinates in the original fragments.

mod engine;
mod mapper;
mod normalize;
mod types;


pub use engine::*;
pub use mapper::*;
pub use normalize::*;
pub use types::*;
