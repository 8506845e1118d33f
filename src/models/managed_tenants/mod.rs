//! Models of the `microsoft.graph.managedTenants` namespace.

mod managed_tenant_alert;

pub use managed_tenant_alert::*;
