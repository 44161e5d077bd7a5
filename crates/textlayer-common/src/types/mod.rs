mod fragment;
mod matches;

pub use fragment::*;
pub use matches::*;
