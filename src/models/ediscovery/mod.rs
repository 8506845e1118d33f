//! Models of the `microsoft.graph.ediscovery` namespace.

mod legal_hold;

pub use legal_hold::*;
