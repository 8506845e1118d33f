//! SharePoint tenant administration of the `microsoft.graph.tenantAdmin` namespace.

mod settings;

pub use settings::*;
