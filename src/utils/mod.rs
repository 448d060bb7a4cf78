//! Terminal presentation helpers

mod styling;

pub use styling::*;
