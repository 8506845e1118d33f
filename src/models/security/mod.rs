//! Models of the `microsoft.graph.security` namespace.

mod threat_submission;

pub use threat_submission::*;
