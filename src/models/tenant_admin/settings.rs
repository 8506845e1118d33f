use crate::models::Entity;
use crate::serialization::AdditionalData;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageTaggingChoice {
    Disabled,
    Basic,
    Enhanced,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SharingCapabilities {
    Disabled,
    ExternalUserSharingOnly,
    ExternalUserAndGuestSharing,
    ExistingExternalUserSharingOnly,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SharingDomainRestrictionMode {
    None,
    AllowList,
    BlockList,
    UnknownFutureValue,
}

/// Tenant wide SharePoint settings.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(flatten)]
    pub entity: Entity,
    pub allowed_domain_guids_for_sync_app: Option<Vec<Uuid>>,
    pub available_managed_paths_for_site_creation: Option<Vec<String>>,
    pub deleted_user_personal_site_retention_period_in_days: Option<i32>,
    pub excluded_file_extensions_for_sync_app: Option<Vec<String>>,
    pub idle_session_sign_out: Option<IdleSessionSignOut>,
    pub image_tagging_option: Option<ImageTaggingChoice>,
    pub is_commenting_on_site_pages_enabled: Option<bool>,
    pub is_file_activity_notification_enabled: Option<bool>,
    pub is_legacy_auth_protocols_enabled: Option<bool>,
    pub is_loop_enabled: Option<bool>,
    pub is_mac_sync_app_enabled: Option<bool>,
    pub is_require_accepting_user_to_match_invited_user_enabled: Option<bool>,
    pub is_resharing_by_external_users_enabled: Option<bool>,
    pub is_share_point_mobile_notification_enabled: Option<bool>,
    pub is_share_point_newsfeed_enabled: Option<bool>,
    pub is_site_creation_enabled: Option<bool>,
    #[serde(rename = "isSiteCreationUIEnabled")]
    pub is_site_creation_ui_enabled: Option<bool>,
    pub is_site_pages_creation_enabled: Option<bool>,
    pub is_sites_storage_limit_automatic: Option<bool>,
    pub is_sync_button_hidden_on_personal_site: Option<bool>,
    pub is_unmanaged_sync_app_for_tenant_restricted: Option<bool>,
    #[serde(rename = "personalSiteDefaultStorageLimitInMB")]
    pub personal_site_default_storage_limit_in_mb: Option<i64>,
    pub sharing_allowed_domain_list: Option<Vec<String>>,
    pub sharing_blocked_domain_list: Option<Vec<String>>,
    pub sharing_capability: Option<SharingCapabilities>,
    pub sharing_domain_restriction_mode: Option<SharingDomainRestrictionMode>,
    pub site_creation_default_managed_path: Option<String>,
    #[serde(rename = "siteCreationDefaultStorageLimitInMB")]
    pub site_creation_default_storage_limit_in_mb: Option<i32>,
    pub tenant_default_timezone: Option<String>,
}

model!(Settings => "#microsoft.graph.tenantAdmin.settings", via entity);

/// Signs users out of SharePoint and OneDrive after a period of inactivity.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdleSessionSignOut {
    pub is_enabled: Option<bool>,
    pub sign_out_after_in_seconds: Option<i64>,
    pub warn_after_in_seconds: Option<i64>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(IdleSessionSignOut => "#microsoft.graph.tenantAdmin.idleSessionSignOut");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Model;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn settings_keep_irregular_property_names() {
        let json = json!({
            "@odata.type": "#microsoft.graph.tenantAdmin.settings",
            "isSiteCreationUIEnabled": true,
            "isSharePointNewsfeedEnabled": false,
            "personalSiteDefaultStorageLimitInMB": 1048576,
            "siteCreationDefaultStorageLimitInMB": 26214400,
            "sharingCapability": "externalUserAndGuestSharing",
            "sharingDomainRestrictionMode": "none",
            "allowedDomainGuidsForSyncApp": ["29f4ca52-44c7-4d0b-98b7-e91c6a6b6c44"],
            "idleSessionSignOut": { "isEnabled": true, "warnAfterInSeconds": 3600, "signOutAfterInSeconds": 7200 }
        });

        let settings = serde_json::from_value::<Settings>(json.clone()).unwrap();

        assert_eq!(settings.is_site_creation_ui_enabled, Some(true));
        assert_eq!(settings.is_share_point_newsfeed_enabled, Some(false));
        assert_eq!(settings.personal_site_default_storage_limit_in_mb, Some(1048576));
        assert!(settings.additional_data().is_empty());
        assert_eq!(serde_json::to_value(&settings).unwrap(), json);
    }
}
