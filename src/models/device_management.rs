use crate::serialization::{AdditionalData, Flags, TimeOnly, Timestamp};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StateManagementSetting {
    NotConfigured,
    Blocked,
    Allowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DerivedCredentialProviderType {
    NotConfigured,
    EntrustDataCard,
    Purebred,
    XTec,
    Intercede,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowsFirewallRuleTrafficDirectionType {
    NotConfigured,
    Out,
    In,
}

/// Flagged: a rule applies to any combination of interface types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum WindowsFirewallRuleInterfaceTypes {
    NotConfigured,
    RemoteAccess,
    Wireless,
    Lan,
}

/// Flagged: a rule applies to any combination of network profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum WindowsFirewallRuleNetworkProfileTypes {
    NotConfigured,
    Domain,
    Private,
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZebraFotaNetworkType {
    Any,
    Wifi,
    Cellular,
    WifiAndCellular,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZebraFotaScheduleMode {
    InstallNow,
    Scheduled,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZebraFotaUpdateType {
    Custom,
    Latest,
    AutoUpdate,
    UnknownFutureValue,
}

/// Tenant wide device management settings.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceManagementSettings {
    pub android_device_administrator_enrollment_enabled: Option<bool>,
    pub derived_credential_provider: Option<DerivedCredentialProviderType>,
    pub derived_credential_url: Option<String>,
    /// Number of days a device may go without checking in before it is considered noncompliant.
    pub device_compliance_checkin_threshold_days: Option<i32>,
    pub device_inactivity_before_retirement_in_day: Option<i32>,
    pub enable_autopilot_diagnostics: Option<bool>,
    pub enable_device_group_membership_report: Option<bool>,
    pub enable_enhanced_troubleshooting_experience: Option<bool>,
    pub enable_log_collection: Option<bool>,
    pub enhanced_jail_break: Option<bool>,
    pub ignore_devices_for_unsupported_settings_enabled: Option<bool>,
    pub is_scheduled_action_enabled: Option<bool>,
    /// Devices without a compliance policy are treated as noncompliant when set.
    pub secure_by_default: Option<bool>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(DeviceManagementSettings => "#microsoft.graph.deviceManagementSettings");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowsFirewallRule {
    pub action: Option<StateManagementSetting>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub edge_traversal: Option<StateManagementSetting>,
    pub file_path: Option<String>,
    pub interface_types: Option<Flags<WindowsFirewallRuleInterfaceTypes>>,
    pub local_address_ranges: Option<Vec<String>>,
    pub local_port_ranges: Option<Vec<String>>,
    /// SDDL string describing the local users allowed by this rule.
    pub local_user_authorizations: Option<String>,
    pub package_family_name: Option<String>,
    pub profile_types: Option<Flags<WindowsFirewallRuleNetworkProfileTypes>>,
    /// IP protocol number, 0 to 255.
    pub protocol: Option<i32>,
    pub remote_address_ranges: Option<Vec<String>>,
    pub remote_port_ranges: Option<Vec<String>>,
    pub service_name: Option<String>,
    pub traffic_direction: Option<WindowsFirewallRuleTrafficDirectionType>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(WindowsFirewallRule => "#microsoft.graph.windowsFirewallRule");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowsFirewallNetworkProfile {
    pub authorized_application_rules_from_group_policy_merged: Option<bool>,
    pub authorized_application_rules_from_group_policy_not_merged: Option<bool>,
    pub connection_security_rules_from_group_policy_merged: Option<bool>,
    pub connection_security_rules_from_group_policy_not_merged: Option<bool>,
    pub firewall_enabled: Option<StateManagementSetting>,
    pub global_port_rules_from_group_policy_merged: Option<bool>,
    pub global_port_rules_from_group_policy_not_merged: Option<bool>,
    pub inbound_connections_blocked: Option<bool>,
    pub inbound_connections_required: Option<bool>,
    pub inbound_notifications_blocked: Option<bool>,
    pub inbound_notifications_required: Option<bool>,
    pub incoming_traffic_blocked: Option<bool>,
    pub incoming_traffic_required: Option<bool>,
    pub outbound_connections_blocked: Option<bool>,
    pub outbound_connections_required: Option<bool>,
    pub policy_rules_from_group_policy_merged: Option<bool>,
    pub policy_rules_from_group_policy_not_merged: Option<bool>,
    pub secured_packet_exemption_allowed: Option<bool>,
    pub secured_packet_exemption_blocked: Option<bool>,
    pub stealth_mode_blocked: Option<bool>,
    pub stealth_mode_required: Option<bool>,
    pub unicast_responses_to_multicast_broadcasts_blocked: Option<bool>,
    pub unicast_responses_to_multicast_broadcasts_required: Option<bool>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(WindowsFirewallNetworkProfile => "#microsoft.graph.windowsFirewallNetworkProfile");

/// When and how a firmware-over-the-air update is rolled out to Zebra devices.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZebraFotaDeploymentSettings {
    pub battery_rule_minimum_battery_level_percentage: Option<i32>,
    pub battery_rule_require_charger: Option<bool>,
    pub device_model: Option<String>,
    pub download_rule_network_type: Option<ZebraFotaNetworkType>,
    pub download_rule_start_date_time: Option<Timestamp>,
    pub firmware_target_artifact_description: Option<String>,
    pub firmware_target_board_support_package_version: Option<String>,
    pub firmware_target_os_version: Option<String>,
    pub firmware_target_patch: Option<String>,
    pub install_rule_start_date_time: Option<Timestamp>,
    /// Daily install window, in the device's local time.
    pub install_rule_window_end_time: Option<TimeOnly>,
    pub install_rule_window_start_time: Option<TimeOnly>,
    pub schedule_duration_in_days: Option<i32>,
    pub schedule_mode: Option<ZebraFotaScheduleMode>,
    pub time_zone_offset_in_minutes: Option<i32>,
    pub update_type: Option<ZebraFotaUpdateType>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(ZebraFotaDeploymentSettings => "#microsoft.graph.zebraFotaDeploymentSettings");
