use crate::serialization::AdditionalData;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkflowTriggerTimeBasedAttribute {
    EmployeeHireDate,
    EmployeeLeaveDateTime,
    UnknownFutureValue,
    CreatedDateTime,
}

/// When and for whom a workflow runs.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowExecutionConditions {
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(WorkflowExecutionConditions => "#microsoft.graph.identityGovernance.workflowExecutionConditions");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerAndScopeBasedConditions {
    #[serde(flatten)]
    pub execution_conditions: WorkflowExecutionConditions,
    pub scope: Option<SubjectSetKind>,
    pub trigger: Option<WorkflowExecutionTriggerKind>,
}

model!(
    TriggerAndScopeBasedConditions => "#microsoft.graph.identityGovernance.triggerAndScopeBasedConditions",
    via execution_conditions,
    stamped
);

/// The workflow only runs when started by hand.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnDemandExecutionOnly {
    #[serde(flatten)]
    pub execution_conditions: WorkflowExecutionConditions,
}

model!(
    OnDemandExecutionOnly => "#microsoft.graph.identityGovernance.onDemandExecutionOnly",
    via execution_conditions,
    stamped
);

family! {
    pub enum WorkflowExecutionConditionsKind {
        TriggerAndScopeBased(TriggerAndScopeBasedConditions),
        OnDemandOnly(OnDemandExecutionOnly),
        _ => Conditions(WorkflowExecutionConditions),
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectSet {
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(SubjectSet => "#microsoft.graph.subjectSet");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleBasedSubjectSet {
    #[serde(flatten)]
    pub subject_set: SubjectSet,
    /// OData filter over user attributes, e.g. `(department eq 'Marketing')`.
    pub rule: Option<String>,
}

model!(RuleBasedSubjectSet => "#microsoft.graph.identityGovernance.ruleBasedSubjectSet", via subject_set, stamped);

family! {
    pub enum SubjectSetKind {
        RuleBased(RuleBasedSubjectSet),
        _ => SubjectSet(SubjectSet),
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowExecutionTrigger {
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(WorkflowExecutionTrigger => "#microsoft.graph.identityGovernance.workflowExecutionTrigger");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBasedAttributeTrigger {
    #[serde(flatten)]
    pub trigger: WorkflowExecutionTrigger,
    /// Days relative to the attribute's date. Negative runs the workflow before it.
    pub offset_in_days: Option<i32>,
    pub time_based_attribute: Option<WorkflowTriggerTimeBasedAttribute>,
}

model!(
    TimeBasedAttributeTrigger => "#microsoft.graph.identityGovernance.timeBasedAttributeTrigger",
    via trigger,
    stamped
);

family! {
    pub enum WorkflowExecutionTriggerKind {
        TimeBasedAttribute(TimeBasedAttributeTrigger),
        _ => Trigger(WorkflowExecutionTrigger),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn on_demand_conditions_carry_only_their_tag() {
        let json = json!({ "@odata.type": "#microsoft.graph.identityGovernance.onDemandExecutionOnly" });

        let conditions = serde_json::from_value::<WorkflowExecutionConditionsKind>(json.clone()).unwrap();

        assert!(matches!(conditions, WorkflowExecutionConditionsKind::OnDemandOnly(_)));
        assert_eq!(serde_json::to_value(&conditions).unwrap(), json);
    }

    #[test]
    fn trigger_reads_a_negative_offset() {
        let trigger = serde_json::from_value::<WorkflowExecutionTriggerKind>(json!({
            "@odata.type": "#microsoft.graph.identityGovernance.timeBasedAttributeTrigger",
            "timeBasedAttribute": "employeeLeaveDateTime",
            "offsetInDays": -7
        }))
        .unwrap();

        match trigger {
            WorkflowExecutionTriggerKind::TimeBasedAttribute(trigger) => {
                assert_eq!(trigger.offset_in_days, Some(-7));
                assert_eq!(trigger.time_based_attribute, Some(WorkflowTriggerTimeBasedAttribute::EmployeeLeaveDateTime));
            }
            other => panic!("expected a time based trigger, found {:?}", other),
        }
    }
}
