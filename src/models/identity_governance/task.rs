use crate::models::{Entity, KeyValuePair};
use crate::serialization::{Flags, Timestamp};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum LifecycleTaskCategory {
    Joiner,
    Leaver,
    UnknownFutureValue,
    Mover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifecycleWorkflowProcessingStatus {
    Queued,
    InProgress,
    Completed,
    CompletedWithErrors,
    Canceled,
    Failed,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkflowExecutionType {
    Scheduled,
    OnDemand,
    UnknownFutureValue,
}

/// A step of a lifecycle workflow, e.g. generating a temporary access pass.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(flatten)]
    pub entity: Entity,
    pub arguments: Option<Vec<KeyValuePair>>,
    pub category: Option<Flags<LifecycleTaskCategory>>,
    pub continue_on_error: Option<bool>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    /// Position of the task in the workflow, starting at 1.
    pub execution_sequence: Option<i32>,
    pub is_enabled: Option<bool>,
    pub task_definition_id: Option<String>,
}

model!(Task => "#microsoft.graph.identityGovernance.task", via entity);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    #[serde(flatten)]
    pub entity: Entity,
    pub completed_date_time: Option<Timestamp>,
    pub failed_tasks_count: Option<i32>,
    pub failed_users_count: Option<i32>,
    pub last_updated_date_time: Option<Timestamp>,
    pub processing_status: Option<LifecycleWorkflowProcessingStatus>,
    pub scheduled_date_time: Option<Timestamp>,
    pub started_date_time: Option<Timestamp>,
    pub successful_users_count: Option<i32>,
    pub total_tasks_count: Option<i32>,
    pub total_unprocessed_tasks_count: Option<i32>,
    pub total_users_count: Option<i32>,
    pub workflow_execution_type: Option<WorkflowExecutionType>,
}

model!(Run => "#microsoft.graph.identityGovernance.run", via entity);

/// Aggregated results of one task across a workflow run.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskReport {
    #[serde(flatten)]
    pub entity: Entity,
    pub completed_date_time: Option<Timestamp>,
    pub failed_users_count: Option<i32>,
    pub last_updated_date_time: Option<Timestamp>,
    pub processing_status: Option<LifecycleWorkflowProcessingStatus>,
    pub run_id: Option<String>,
    pub started_date_time: Option<Timestamp>,
    pub successful_users_count: Option<i32>,
    pub task: Option<Task>,
    pub total_users_count: Option<i32>,
    pub unprocessed_users_count: Option<i32>,
}

model!(TaskReport => "#microsoft.graph.identityGovernance.taskReport", via entity);
