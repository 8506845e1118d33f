use crate::models::Entity;
use crate::serialization::Timestamp;
use serde::{Deserialize, Serialize};
use serde_with::base64::Base64;
use serde_with::{serde_as, skip_serializing_none};

/// An iOS provisioning profile shipped with line of business apps.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosLobAppProvisioningConfiguration {
    #[serde(flatten)]
    pub entity: Entity,
    pub created_date_time: Option<Timestamp>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub expiration_date_time: Option<Timestamp>,
    pub last_modified_date_time: Option<Timestamp>,
    /// The provisioning profile file, base64 encoded on the wire.
    #[serde_as(as = "Option<Base64>")]
    pub payload: Option<Vec<u8>>,
    pub payload_file_name: Option<String>,
    pub role_scope_tag_ids: Option<Vec<String>>,
    pub version: Option<i32>,
}

model!(IosLobAppProvisioningConfiguration => "#microsoft.graph.iosLobAppProvisioningConfiguration", via entity);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Model;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn payload_is_decoded_from_base64() {
        let json = json!({
            "id": "a1",
            "payloadFileName": "contoso.mobileprovision",
            "payload": "cGF5bG9hZA==",
            "version": 3,
            "assignments": [{ "id": "g1" }]
        });

        let configuration = serde_json::from_value::<IosLobAppProvisioningConfiguration>(json.clone()).unwrap();

        assert_eq!(configuration.payload.as_deref(), Some(b"payload".as_slice()));
        assert_eq!(configuration.additional_data().get("assignments"), Some(&json!([{ "id": "g1" }])));
        assert_eq!(serde_json::to_value(&configuration).unwrap(), json);
    }

    #[test]
    fn empty_payload_is_kept_as_empty_bytes() {
        let configuration = serde_json::from_value::<IosLobAppProvisioningConfiguration>(json!({ "payload": "" })).unwrap();

        assert_eq!(configuration.payload, Some(vec![]));
        assert_eq!(serde_json::to_value(&configuration).unwrap(), json!({ "payload": "" }));
    }

    #[test]
    fn payload_that_is_not_base64_is_rejected() {
        let result = serde_json::from_value::<IosLobAppProvisioningConfiguration>(json!({ "payload": "not base64!" }));
        assert!(result.is_err());
    }
}
