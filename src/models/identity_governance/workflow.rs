use crate::models::User;
use crate::models::identity_governance::{Run, Task, TaskReport, WorkflowExecutionConditionsKind};
use crate::serialization::{AdditionalData, Timestamp};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifecycleWorkflowCategory {
    Joiner,
    Leaver,
    UnknownFutureValue,
    Mover,
}

/// Properties shared by a lifecycle workflow and its versions.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowBase {
    pub category: Option<LifecycleWorkflowCategory>,
    pub created_by: Option<User>,
    pub created_date_time: Option<Timestamp>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub execution_conditions: Option<WorkflowExecutionConditionsKind>,
    pub is_enabled: Option<bool>,
    /// Whether the workflow runs on its schedule. Requires `is_enabled`.
    pub is_scheduling_enabled: Option<bool>,
    pub last_modified_by: Option<User>,
    pub last_modified_date_time: Option<Timestamp>,
    pub tasks: Option<Vec<Task>>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(WorkflowBase => "#microsoft.graph.identityGovernance.workflowBase");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    #[serde(flatten)]
    pub workflow_base: WorkflowBase,
    pub deleted_date_time: Option<Timestamp>,
    pub execution_scope: Option<Vec<User>>,
    pub id: Option<String>,
    pub next_schedule_run_date_time: Option<Timestamp>,
    pub runs: Option<Vec<Run>>,
    pub task_reports: Option<Vec<TaskReport>>,
    pub version: Option<i32>,
    pub versions: Option<Vec<WorkflowVersion>>,
}

model!(Workflow => "#microsoft.graph.identityGovernance.workflow", via workflow_base, stamped);

/// A snapshot of a workflow, taken each time its tasks or execution conditions change.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowVersion {
    #[serde(flatten)]
    pub workflow_base: WorkflowBase,
    pub version_number: Option<i32>,
}

model!(WorkflowVersion => "#microsoft.graph.identityGovernance.workflowVersion", via workflow_base, stamped);

family! {
    pub enum WorkflowBaseKind {
        Workflow(Workflow),
        Version(WorkflowVersion),
        _ => Base(WorkflowBase),
    }
}
