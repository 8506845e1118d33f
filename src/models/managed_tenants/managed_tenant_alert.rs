use crate::models::Entity;
use crate::serialization::{AdditionalData, Timestamp};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertSeverity {
    Unknown,
    Informational,
    Low,
    Medium,
    High,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertStatus {
    Unknown,
    NewAlert,
    InProgress,
    Resolved,
    Dismissed,
    UnknownFutureValue,
}

/// An alert raised for one of the tenants managed through Lighthouse.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedTenantAlert {
    #[serde(flatten)]
    pub entity: Entity,
    pub alert_data: Option<AlertData>,
    pub alert_data_reference_strings: Option<Vec<AlertDataReferenceString>>,
    pub alert_rule_display_name: Option<String>,
    pub assigned_to_user_id: Option<String>,
    pub correlation_count: Option<i32>,
    pub correlation_id: Option<String>,
    pub created_by_user_id: Option<String>,
    pub created_date_time: Option<Timestamp>,
    pub last_action_by_user_id: Option<String>,
    pub last_action_date_time: Option<Timestamp>,
    pub message: Option<String>,
    pub severity: Option<AlertSeverity>,
    pub status: Option<AlertStatus>,
    pub tenant_id: Option<String>,
    pub title: Option<String>,
}

model!(ManagedTenantAlert => "#microsoft.graph.managedTenants.managedTenantAlert", via entity);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertData {
    pub display_value: Option<String>,
    pub value: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(AlertData => "#microsoft.graph.managedTenants.alertData");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDataReferenceString {
    /// Kind of object the reference points at, e.g. `tenant` or `user`.
    pub reference_type: Option<String>,
    pub value: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(AlertDataReferenceString => "#microsoft.graph.managedTenants.alertDataReferenceString");

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn alert_reads_its_data_and_references() {
        let json = json!({
            "@odata.type": "#microsoft.graph.managedTenants.managedTenantAlert",
            "id": "3b6d3fc5",
            "title": "Risky sign-ins detected",
            "severity": "high",
            "status": "newAlert",
            "correlationCount": 3,
            "alertData": { "displayValue": "3 users", "value": "3" },
            "alertDataReferenceStrings": [{ "referenceType": "tenant", "value": "contoso.onmicrosoft.com" }],
            "alertRule": { "id": "rule-1" }
        });

        let alert = serde_json::from_value::<ManagedTenantAlert>(json.clone()).unwrap();

        assert_eq!(alert.severity, Some(AlertSeverity::High));
        assert_eq!(alert.status, Some(AlertStatus::NewAlert));
        assert_eq!(alert.alert_data.as_ref().and_then(|d| d.display_value.as_deref()), Some("3 users"));
        assert_eq!(serde_json::to_value(&alert).unwrap(), json);
    }
}
