//! Lifecycle workflows of the `microsoft.graph.identityGovernance` namespace.

mod execution_conditions;
mod task;
mod workflow;

pub use execution_conditions::*;
pub use task::*;
pub use workflow::*;
