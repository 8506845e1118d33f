//! Search answers of the `microsoft.graph.search` namespace.

mod answers;

pub use answers::*;
