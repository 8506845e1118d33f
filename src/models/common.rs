use crate::models::security::SubmissionUserIdentity;
use crate::serialization::AdditionalData;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValuePair {
    /// Name for this key-value pair.
    pub name: Option<String>,
    pub value: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(KeyValuePair => "#microsoft.graph.keyValuePair");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValue {
    pub key: Option<String>,
    pub value: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(KeyValue => "#microsoft.graph.keyValue");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDataKeyStringPair {
    pub key: Option<String>,
    pub value: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(MetaDataKeyStringPair => "#microsoft.graph.metaDataKeyStringPair");

/// A key paired with an untyped value.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDataKeyValuePair {
    pub key: Option<String>,
    pub value: Option<serde_json::Value>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(MetaDataKeyValuePair => "#microsoft.graph.metaDataKeyValuePair");

/// An actor: a user, device or application.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub display_name: Option<String>,
    pub id: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(Identity => "#microsoft.graph.identity");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailIdentity {
    #[serde(flatten)]
    pub identity: Identity,
    pub email: Option<String>,
}

model!(EmailIdentity => "#microsoft.graph.emailIdentity", via identity, stamped);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    #[serde(flatten)]
    pub identity: Identity,
    pub ip_address: Option<String>,
    pub user_principal_name: Option<String>,
}

model!(UserIdentity => "#microsoft.graph.userIdentity", via identity, stamped);

family! {
    pub enum IdentityKind {
        Email(EmailIdentity),
        User(UserIdentity),
        SubmissionUser(SubmissionUserIdentity),
        _ => Identity(Identity),
    }
}

/// The actors involved in an action, e.g. who created or last modified an item.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentitySet {
    pub application: Option<IdentityKind>,
    pub device: Option<IdentityKind>,
    pub user: Option<IdentityKind>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(IdentitySet => "#microsoft.graph.identitySet");
