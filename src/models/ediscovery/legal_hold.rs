use crate::models::{Entity, IdentitySet};
use crate::serialization::Timestamp;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Status of a legal hold. Members are Pascal cased on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegalHoldStatus {
    Pending,
    Error,
    Success,
    UnknownFutureValue,
}

/// Preserves content of custodians and sources involved in an eDiscovery case.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalHold {
    #[serde(flatten)]
    pub entity: Entity,
    /// KQL query selecting the content to hold.
    pub content_query: Option<String>,
    pub created_by: Option<IdentitySet>,
    pub created_date_time: Option<Timestamp>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub errors: Option<Vec<String>>,
    pub is_enabled: Option<bool>,
    pub last_modified_by: Option<IdentitySet>,
    pub last_modified_date_time: Option<Timestamp>,
    pub status: Option<LegalHoldStatus>,
}

model!(LegalHold => "#microsoft.graph.ediscovery.legalHold", via entity);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Model;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn legal_hold_keeps_untyped_sources() {
        let json = json!({
            "@odata.type": "#microsoft.graph.ediscovery.legalHold",
            "id": "387566cc-38ae-4e85-ab4b-cd2dd34faa07",
            "displayName": "My legalHold with sources",
            "isEnabled": true,
            "status": "Pending",
            "contentQuery": "",
            "errors": [],
            "siteSources": [{ "site": { "webUrl": "https://contoso.sharepoint.com/sites/SecretSite" } }],
            "createdBy": { "user": { "id": "c25c3914-f9f7-43ee-9cba-a25377e0cec6", "displayName": "MOD Administrator" } }
        });

        let hold = serde_json::from_value::<LegalHold>(json.clone()).unwrap();

        assert_eq!(hold.status, Some(LegalHoldStatus::Pending));
        assert_eq!(hold.content_query.as_deref(), Some(""));
        assert_eq!(hold.errors, Some(vec![]));
        assert_eq!(hold.additional_data().keys().collect::<Vec<_>>(), vec!["siteSources"]);
        assert_eq!(serde_json::to_value(&hold).unwrap(), json);
    }

    #[test]
    fn camel_cased_status_is_rejected() {
        let result = serde_json::from_value::<LegalHold>(json!({ "status": "pending" }));
        assert!(result.is_err());
    }
}
