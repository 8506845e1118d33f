use crate::models::{Entity, Identity};
use crate::serialization::{AdditionalData, IsoDuration, Timestamp};
use serde::{Deserialize, Serialize};
use serde_with::base64::Base64;
use serde_with::{serde_as, skip_serializing_none};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LongRunningOperationStatus {
    NotStarted,
    Running,
    Succeeded,
    Failed,
    Skipped,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionCategory {
    NotJunk,
    Spam,
    Phishing,
    Malware,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionClientSource {
    Microsoft,
    Other,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionContentType {
    Email,
    Url,
    File,
    App,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionSource {
    User,
    Administrator,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionResultCategory {
    NotJunk,
    Spam,
    Phishing,
    Malware,
    AllowedByPolicy,
    BlockedByPolicy,
    Spoof,
    Unknown,
    NoResultAvailable,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionResultDetail {
    None,
    UnderInvestigation,
    SimulatedThreat,
    AllowedBySecOps,
    AllowedByThirdPartyFilters,
    MessageNotFound,
    UrlFileShouldNotBeBlocked,
    UrlFileShouldBeBlocked,
    UrlFileCannotMakeDecision,
    DomainImpersonation,
    UserImpersonation,
    BrandImpersonation,
    OutboundShouldNotBeBlocked,
    OutboundShouldBeBlocked,
    OutboundBulk,
    OutboundCannotMakeDecision,
    OutboundNotRescanned,
    ZeroHourAutoPurgeAllowed,
    ZeroHourAutoPurgeBlocked,
    ZeroHourAutoPurgeQuarantineReleased,
    OnPremisesSkip,
    AllowedByTenantAllowBlockList,
    BlockedByTenantAllowBlockList,
    AllowedUrlByTenantAllowBlockList,
    AllowedFileByTenantAllowBlockList,
    AllowedSenderByTenantAllowBlockList,
    AllowedRecipientByTenantAllowBlockList,
    BlockedUrlByTenantAllowBlockList,
    BlockedFileByTenantAllowBlockList,
    BlockedSenderByTenantAllowBlockList,
    BlockedRecipientByTenantAllowBlockList,
    AllowedByConnection,
    BlockedByConnection,
    AllowedByExchangeTransportRule,
    BlockedByExchangeTransportRule,
    QuarantineReleased,
    QuarantineReleasedThenBlocked,
    JunkMailRuleDisabled,
    AllowedByUserSetting,
    BlockedByUserSetting,
    AllowedDueToOrganizationOverride,
    BlockedDueToOrganizationOverride,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TenantAllowBlockListAction {
    Allow,
    Block,
    UnknownFutureValue,
}

/// The submitter of a threat submission.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionUserIdentity {
    #[serde(flatten)]
    pub identity: Identity,
    pub email: Option<String>,
}

model!(SubmissionUserIdentity => "#microsoft.graph.security.submissionUserIdentity", via identity, stamped);

/// Who reviewed a submission, when, and what they identified it as.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionAdminReview {
    pub review_by: Option<String>,
    pub review_date_time: Option<Timestamp>,
    pub review_result: Option<SubmissionResultCategory>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(SubmissionAdminReview => "#microsoft.graph.security.submissionAdminReview");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDetectedFile {
    pub file_hash: Option<String>,
    pub file_name: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(SubmissionDetectedFile => "#microsoft.graph.security.submissionDetectedFile");

/// The analysis Microsoft performed on a submission.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub category: Option<SubmissionResultCategory>,
    pub detail: Option<SubmissionResultDetail>,
    pub detected_files: Option<Vec<SubmissionDetectedFile>>,
    pub detected_urls: Option<Vec<String>>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(SubmissionResult => "#microsoft.graph.security.submissionResult");

/// Links an email submission to the attack simulation that sent it.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackSimulationInfo {
    pub attack_sim_date_time: Option<Timestamp>,
    pub attack_sim_duration_time: Option<IsoDuration>,
    pub attack_sim_id: Option<Uuid>,
    pub attack_sim_user_id: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(AttackSimulationInfo => "#microsoft.graph.security.attackSimulationInfo");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantAllowOrBlockListAction {
    pub action: Option<TenantAllowBlockListAction>,
    pub expiration_date_time: Option<Timestamp>,
    pub note: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(TenantAllowOrBlockListAction => "#microsoft.graph.security.tenantAllowOrBlockListAction");

/// Content submitted to Microsoft for threat analysis.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatSubmission {
    #[serde(flatten)]
    pub entity: Entity,
    pub admin_review: Option<SubmissionAdminReview>,
    pub category: Option<SubmissionCategory>,
    pub client_source: Option<SubmissionClientSource>,
    pub content_type: Option<SubmissionContentType>,
    pub created_by: Option<SubmissionUserIdentity>,
    pub created_date_time: Option<Timestamp>,
    pub result: Option<SubmissionResult>,
    pub source: Option<SubmissionSource>,
    /// Whether Microsoft has analyzed the submission yet.
    pub status: Option<LongRunningOperationStatus>,
    pub tenant_id: Option<String>,
}

model!(ThreatSubmission => "#microsoft.graph.security.threatSubmission", via entity);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailThreatSubmission {
    #[serde(flatten)]
    pub threat_submission: ThreatSubmission,
    pub attack_simulation_info: Option<AttackSimulationInfo>,
    pub internet_message_id: Option<String>,
    pub original_category: Option<SubmissionCategory>,
    pub received_date_time: Option<Timestamp>,
    pub recipient_email_address: Option<String>,
    pub sender: Option<String>,
    #[serde(rename = "senderIP")]
    pub sender_ip: Option<String>,
    pub subject: Option<String>,
    pub tenant_allow_or_block_list_action: Option<TenantAllowOrBlockListAction>,
}

model!(
    EmailThreatSubmission => "#microsoft.graph.security.emailThreatSubmission",
    via threat_submission.entity,
    stamped
);

/// An email submitted as its raw MIME content.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailContentThreatSubmission {
    #[serde(flatten)]
    pub email_threat_submission: EmailThreatSubmission,
    #[serde_as(as = "Option<Base64>")]
    pub file_content: Option<Vec<u8>>,
}

model!(
    EmailContentThreatSubmission => "#microsoft.graph.security.emailContentThreatSubmission",
    via email_threat_submission.threat_submission.entity,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailUrlThreatSubmission {
    #[serde(flatten)]
    pub email_threat_submission: EmailThreatSubmission,
    pub message_url: Option<String>,
}

model!(
    EmailUrlThreatSubmission => "#microsoft.graph.security.emailUrlThreatSubmission",
    via email_threat_submission.threat_submission.entity,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileThreatSubmission {
    #[serde(flatten)]
    pub threat_submission: ThreatSubmission,
    pub file_name: Option<String>,
}

model!(
    FileThreatSubmission => "#microsoft.graph.security.fileThreatSubmission",
    via threat_submission.entity,
    stamped
);

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContentThreatSubmission {
    #[serde(flatten)]
    pub file_threat_submission: FileThreatSubmission,
    #[serde_as(as = "Option<Base64>")]
    pub file_content: Option<Vec<u8>>,
}

model!(
    FileContentThreatSubmission => "#microsoft.graph.security.fileContentThreatSubmission",
    via file_threat_submission.threat_submission.entity,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUrlThreatSubmission {
    #[serde(flatten)]
    pub file_threat_submission: FileThreatSubmission,
    pub file_url: Option<String>,
}

model!(
    FileUrlThreatSubmission => "#microsoft.graph.security.fileUrlThreatSubmission",
    via file_threat_submission.threat_submission.entity,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlThreatSubmission {
    #[serde(flatten)]
    pub threat_submission: ThreatSubmission,
    pub web_url: Option<String>,
}

model!(
    UrlThreatSubmission => "#microsoft.graph.security.urlThreatSubmission",
    via threat_submission.entity,
    stamped
);

family! {
    pub enum ThreatSubmissionKind {
        EmailContent(EmailContentThreatSubmission),
        Email(EmailThreatSubmission),
        EmailUrl(EmailUrlThreatSubmission),
        FileContent(FileContentThreatSubmission),
        File(FileThreatSubmission),
        FileUrl(FileUrlThreatSubmission),
        Url(UrlThreatSubmission),
        _ => ThreatSubmission(ThreatSubmission),
    }
}
