use crate::models::Entity;
use crate::serialization::{AdditionalData, Timestamp};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VppTokenState {
    Unknown,
    Valid,
    Expired,
    Invalid,
    #[serde(rename = "assignedToExternalMDM")]
    AssignedToExternalMdm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VppTokenSyncStatus {
    None,
    InProgress,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VppTokenAccountType {
    Business,
    Education,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionState {
    None,
    Pending,
    Canceled,
    Active,
    Done,
    Failed,
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VppTokenActionFailureReason {
    None,
    AppleFailure,
    InternalError,
    ExpiredVppToken,
    ExpiredApplePushNotificationCertificate,
}

/// An Apple Volume Purchase Program token.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VppToken {
    #[serde(flatten)]
    pub entity: Entity,
    pub apple_id: Option<String>,
    pub automatically_update_apps: Option<bool>,
    pub claim_token_management_from_external_mdm: Option<bool>,
    pub country_or_region: Option<String>,
    pub data_sharing_consent_granted: Option<bool>,
    pub display_name: Option<String>,
    pub expiration_date_time: Option<Timestamp>,
    pub last_modified_date_time: Option<Timestamp>,
    pub last_sync_date_time: Option<Timestamp>,
    pub last_sync_status: Option<VppTokenSyncStatus>,
    pub location_name: Option<String>,
    pub organization_name: Option<String>,
    pub role_scope_tag_ids: Option<Vec<String>>,
    pub state: Option<VppTokenState>,
    /// The token as downloaded from the Apple Business or School portal.
    pub token: Option<String>,
    pub token_action_results: Option<Vec<VppTokenActionResultKind>>,
    pub vpp_token_account_type: Option<VppTokenAccountType>,
}

model!(VppToken => "#microsoft.graph.vppToken", via entity);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VppTokenActionResult {
    pub action_name: Option<String>,
    pub action_state: Option<ActionState>,
    pub last_updated_date_time: Option<Timestamp>,
    pub start_date_time: Option<Timestamp>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(VppTokenActionResult => "#microsoft.graph.vppTokenActionResult");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VppTokenRevokeLicensesActionResult {
    #[serde(flatten)]
    pub action_result: VppTokenActionResult,
    pub action_failure_reason: Option<VppTokenActionFailureReason>,
    pub failed_licenses_count: Option<i32>,
    pub total_licenses_count: Option<i32>,
}

model!(
    VppTokenRevokeLicensesActionResult => "#microsoft.graph.vppTokenRevokeLicensesActionResult",
    via action_result,
    stamped
);

family! {
    pub enum VppTokenActionResultKind {
        RevokeLicenses(VppTokenRevokeLicensesActionResult),
        _ => ActionResult(VppTokenActionResult),
    }
}
