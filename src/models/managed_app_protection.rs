use crate::models::{Entity, KeyValuePair};
use crate::serialization::{Flags, IsoDuration, Timestamp};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ManagedAppDataStorageLocation {
    OneDriveForBusiness,
    SharePoint,
    Box,
    LocalStorage,
    PhotoLibrary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ManagedAppDataTransferLevel {
    AllApps,
    ManagedApps,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ManagedAppClipboardSharingLevel {
    AllApps,
    ManagedAppsWithPasteIn,
    ManagedApps,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ManagedAppRemediationAction {
    Block,
    Wipe,
    Warn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ManagedAppPinCharacterSet {
    Numeric,
    AlphanumericAndSymbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ManagedAppDeviceThreatLevel {
    NotConfigured,
    Secured,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ManagedAppDataEncryptionType {
    UseDeviceSettings,
    AfterDeviceRestart,
    WhenDeviceLockedExceptOpenFiles,
    WhenDeviceLocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum ManagedBrowserType {
    NotConfigured,
    MicrosoftEdge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum AppManagementLevel {
    Unspecified,
    Unmanaged,
    Mdm,
    AndroidEnterprise,
    AndroidEnterpriseDedicatedDevicesWithAzureAdSharedMode,
    AndroidOpenSourceProjectUserAssociated,
    AndroidOpenSourceProjectUserless,
    UnknownFutureValue,
}

/// Common properties of app management policies.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedAppPolicy {
    #[serde(flatten)]
    pub entity: Entity,
    pub created_date_time: Option<Timestamp>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub last_modified_date_time: Option<Timestamp>,
    pub role_scope_tag_ids: Option<Vec<String>>,
    pub version: Option<String>,
}

model!(ManagedAppPolicy => "#microsoft.graph.managedAppPolicy", via entity);

/// Restrictions applied to managed apps on a device, e.g. where data may go and how often a PIN is asked for.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedAppProtection {
    #[serde(flatten)]
    pub managed_app_policy: ManagedAppPolicy,
    pub allowed_data_storage_locations: Option<Vec<ManagedAppDataStorageLocation>>,
    pub allowed_inbound_data_transfer_sources: Option<ManagedAppDataTransferLevel>,
    pub allowed_outbound_clipboard_sharing_exception_length: Option<i32>,
    pub allowed_outbound_clipboard_sharing_level: Option<ManagedAppClipboardSharingLevel>,
    pub allowed_outbound_data_transfer_destinations: Option<ManagedAppDataTransferLevel>,
    pub app_action_if_device_compliance_required: Option<ManagedAppRemediationAction>,
    pub app_action_if_maximum_pin_retries_exceeded: Option<ManagedAppRemediationAction>,
    pub app_action_if_unable_to_authenticate_user: Option<ManagedAppRemediationAction>,
    pub block_data_ingestion_into_organization_documents: Option<bool>,
    pub contact_sync_blocked: Option<bool>,
    pub data_backup_blocked: Option<bool>,
    pub device_compliance_required: Option<bool>,
    pub disable_app_pin_if_device_pin_is_set: Option<bool>,
    pub fingerprint_blocked: Option<bool>,
    pub grace_period_to_block_apps_during_off_clock_hours: Option<IsoDuration>,
    pub managed_browser: Option<Flags<ManagedBrowserType>>,
    pub managed_browser_to_open_links_required: Option<bool>,
    pub maximum_allowed_device_threat_level: Option<ManagedAppDeviceThreatLevel>,
    pub maximum_pin_retries: Option<i32>,
    pub maximum_required_os_version: Option<String>,
    pub minimum_pin_length: Option<i32>,
    pub minimum_required_app_version: Option<String>,
    pub minimum_required_os_version: Option<String>,
    pub minimum_warning_app_version: Option<String>,
    pub minimum_warning_os_version: Option<String>,
    pub minimum_wipe_app_version: Option<String>,
    pub minimum_wipe_os_version: Option<String>,
    pub mobile_threat_defense_remediation_action: Option<ManagedAppRemediationAction>,
    pub organizational_credentials_required: Option<bool>,
    /// How long a PIN may be used before the user must reset it.
    pub period_before_pin_reset: Option<IsoDuration>,
    pub period_offline_before_access_check: Option<IsoDuration>,
    pub period_offline_before_wipe_is_enforced: Option<IsoDuration>,
    pub period_online_before_access_check: Option<IsoDuration>,
    pub pin_character_set: Option<ManagedAppPinCharacterSet>,
    pub pin_required: Option<bool>,
    pub pin_required_instead_of_biometric_timeout: Option<IsoDuration>,
    pub previous_pin_block_count: Option<i32>,
    pub print_blocked: Option<bool>,
    pub save_as_blocked: Option<bool>,
    pub simple_pin_blocked: Option<bool>,
}

model!(ManagedAppProtection => "#microsoft.graph.managedAppProtection", via managed_app_policy.entity);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetedManagedAppProtection {
    #[serde(flatten)]
    pub managed_app_protection: ManagedAppProtection,
    pub is_assigned: Option<bool>,
    pub targeted_app_management_levels: Option<Flags<AppManagementLevel>>,
}

model!(
    TargetedManagedAppProtection => "#microsoft.graph.targetedManagedAppProtection",
    via managed_app_protection.managed_app_policy.entity,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosManagedAppProtection {
    #[serde(flatten)]
    pub targeted_managed_app_protection: TargetedManagedAppProtection,
    pub allowed_ios_device_models: Option<String>,
    pub app_action_if_ios_device_model_not_allowed: Option<ManagedAppRemediationAction>,
    pub app_data_encryption_type: Option<ManagedAppDataEncryptionType>,
    pub custom_browser_protocol: Option<String>,
    pub custom_dialer_app_protocol: Option<String>,
    pub deployed_app_count: Option<i32>,
    pub exempted_universal_links: Option<Vec<String>>,
    pub face_id_blocked: Option<bool>,
    pub filter_open_in_to_only_managed_apps: Option<bool>,
    pub managed_universal_links: Option<Vec<String>>,
    pub minimum_required_sdk_version: Option<String>,
    pub minimum_warning_sdk_version: Option<String>,
    pub minimum_wipe_sdk_version: Option<String>,
    pub protect_inbound_data_from_unknown_sources: Option<bool>,
    pub third_party_keyboards_blocked: Option<bool>,
}

model!(
    IosManagedAppProtection => "#microsoft.graph.iosManagedAppProtection",
    via targeted_managed_app_protection.managed_app_protection.managed_app_policy.entity,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidManagedAppProtection {
    #[serde(flatten)]
    pub targeted_managed_app_protection: TargetedManagedAppProtection,
    pub allowed_android_device_manufacturers: Option<String>,
    pub allowed_android_device_models: Option<Vec<String>>,
    pub custom_browser_display_name: Option<String>,
    pub custom_browser_package_id: Option<String>,
    pub deployed_app_count: Option<i32>,
    pub disable_app_encryption_if_device_encryption_is_enabled: Option<bool>,
    pub encrypt_app_data: Option<bool>,
    pub exempted_app_packages: Option<Vec<KeyValuePair>>,
    pub minimum_required_patch_version: Option<String>,
    pub screen_capture_blocked: Option<bool>,
}

model!(
    AndroidManagedAppProtection => "#microsoft.graph.androidManagedAppProtection",
    via targeted_managed_app_protection.managed_app_protection.managed_app_policy.entity,
    stamped
);

/// Protection applied to users who are not targeted by any other policy.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultManagedAppProtection {
    #[serde(flatten)]
    pub managed_app_protection: ManagedAppProtection,
    pub app_data_encryption_type: Option<ManagedAppDataEncryptionType>,
    pub custom_settings: Option<Vec<KeyValuePair>>,
    pub deployed_app_count: Option<i32>,
    pub disable_app_encryption_if_device_encryption_is_enabled: Option<bool>,
    pub encrypt_app_data: Option<bool>,
    pub face_id_blocked: Option<bool>,
    pub minimum_required_sdk_version: Option<String>,
    pub screen_capture_blocked: Option<bool>,
}

model!(
    DefaultManagedAppProtection => "#microsoft.graph.defaultManagedAppProtection",
    via managed_app_protection.managed_app_policy.entity,
    stamped
);

family! {
    pub enum ManagedAppProtectionKind {
        Targeted(TargetedManagedAppProtection),
        Ios(IosManagedAppProtection),
        Android(AndroidManagedAppProtection),
        Default(DefaultManagedAppProtection),
        _ => Protection(ManagedAppProtection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Model;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn ios_protection_reads_durations_and_enums_through_all_levels() {
        let json = json!({
            "@odata.type": "#microsoft.graph.iosManagedAppProtection",
            "id": "T_1",
            "displayName": "iOS baseline",
            "roleScopeTagIds": ["0"],
            "periodOfflineBeforeAccessCheck": "PT12H",
            "periodBeforePinReset": "P90D",
            "allowedDataStorageLocations": ["oneDriveForBusiness", "sharePoint"],
            "managedBrowser": "microsoftEdge",
            "pinCharacterSet": "alphanumericAndSymbol",
            "isAssigned": true,
            "targetedAppManagementLevels": "unmanaged,mdm",
            "appDataEncryptionType": "whenDeviceLocked",
            "faceIdBlocked": false,
            "allowedIosDeviceModels": "iPhone14,2"
        });

        let protection = serde_json::from_value::<ManagedAppProtectionKind>(json.clone()).unwrap();

        let ManagedAppProtectionKind::Ios(ios) = &protection else {
            panic!("expected an iOS protection, found {:?}", protection);
        };
        let base = &ios.targeted_managed_app_protection.managed_app_protection;
        assert_eq!(
            base.period_offline_before_access_check.and_then(|p| p.to_std()),
            Some(Duration::from_secs(12 * 60 * 60))
        );
        assert_eq!(
            base.allowed_data_storage_locations,
            Some(vec![ManagedAppDataStorageLocation::OneDriveForBusiness, ManagedAppDataStorageLocation::SharePoint])
        );
        assert_eq!(base.managed_app_policy.display_name.as_deref(), Some("iOS baseline"));
        assert_eq!(ios.app_data_encryption_type, Some(ManagedAppDataEncryptionType::WhenDeviceLocked));
        assert_eq!(protection.odata_type(), Some("#microsoft.graph.iosManagedAppProtection"));
        assert_eq!(serde_json::to_value(&protection).unwrap(), json);
    }

    #[test]
    fn a_malformed_duration_fails_the_object() {
        let result = serde_json::from_value::<ManagedAppProtection>(json!({ "periodBeforePinReset": "ninety days" }));
        assert!(result.is_err());
    }

    #[test]
    fn new_protections_are_stamped_with_their_own_type() {
        assert_eq!(
            DefaultManagedAppProtection::new().odata_type(),
            Some("#microsoft.graph.defaultManagedAppProtection")
        );
        assert_eq!(
            AndroidManagedAppProtection::new().odata_type(),
            Some("#microsoft.graph.androidManagedAppProtection")
        );
        assert_eq!(ManagedAppProtection::new().odata_type(), None);
    }
}
