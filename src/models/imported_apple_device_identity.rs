use crate::models::Entity;
use crate::serialization::Timestamp;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscoverySource {
    Unknown,
    AdminImport,
    DeviceEnrollmentProgram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnrollmentState {
    Unknown,
    Enrolled,
    PendingReset,
    Failed,
    NotContacted,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Platform {
    Unknown,
    Ios,
    Android,
    Windows,
    WindowsMobile,
    #[serde(rename = "macOS")]
    MacOs,
}

/// A device imported by serial number ahead of enrollment.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedAppleDeviceIdentity {
    #[serde(flatten)]
    pub entity: Entity,
    pub created_date_time: Option<Timestamp>,
    pub description: Option<String>,
    pub discovery_source: Option<DiscoverySource>,
    pub enrollment_state: Option<EnrollmentState>,
    pub is_deleted: Option<bool>,
    pub is_supervised: Option<bool>,
    pub last_contacted_date_time: Option<Timestamp>,
    pub platform: Option<Platform>,
    pub requested_enrollment_profile_assignment_date_time: Option<Timestamp>,
    pub requested_enrollment_profile_id: Option<String>,
    pub serial_number: Option<String>,
}

model!(ImportedAppleDeviceIdentity => "#microsoft.graph.importedAppleDeviceIdentity", via entity);

/// The outcome of importing a single device identity.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedAppleDeviceIdentityResult {
    #[serde(flatten)]
    pub imported_apple_device_identity: ImportedAppleDeviceIdentity,
    pub status: Option<bool>,
}

model!(
    ImportedAppleDeviceIdentityResult => "#microsoft.graph.importedAppleDeviceIdentityResult",
    via imported_apple_device_identity.entity,
    stamped
);

family! {
    pub enum ImportedAppleDeviceIdentityKind {
        Result(ImportedAppleDeviceIdentityResult),
        _ => Identity(ImportedAppleDeviceIdentity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn import_result_is_resolved_with_its_status() {
        let json = json!({
            "@odata.type": "#microsoft.graph.importedAppleDeviceIdentityResult",
            "serialNumber": "C02XL0GZJGH5",
            "platform": "macOS",
            "discoverySource": "adminImport",
            "enrollmentState": "notContacted",
            "status": true
        });

        let identity = serde_json::from_value::<ImportedAppleDeviceIdentityKind>(json.clone()).unwrap();

        match &identity {
            ImportedAppleDeviceIdentityKind::Result(result) => {
                assert_eq!(result.status, Some(true));
                assert_eq!(result.imported_apple_device_identity.platform, Some(Platform::MacOs));
            }
            other => panic!("expected an import result, found {:?}", other),
        }
        assert_eq!(serde_json::to_value(&identity).unwrap(), json);
    }

    #[test]
    fn timestamps_with_offsets_are_normalized_to_utc() {
        let identity = serde_json::from_value::<ImportedAppleDeviceIdentity>(json!({
            "lastContactedDateTime": "2024-06-01T12:00:00+02:00"
        }))
        .unwrap();

        assert_eq!(identity.last_contacted_date_time, Some(Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()));
        assert_eq!(
            serde_json::to_value(&identity).unwrap(),
            json!({ "lastContactedDateTime": "2024-06-01T10:00:00Z" })
        );
    }
}
