//! Generated-style models of the Graph beta schema.
//!
//! Root namespace (`#microsoft.graph.`) types live directly in this module, sub-namespaces in their own modules. Derived types
//! embed their parent as the first, flattened field, so a `Contract` reaches its `id` through
//! `contract.directory_object.entity.id`.

mod common;
mod device_management;
mod device_management_setting;
mod directory_object;
mod employee;
mod entity;
mod entity_kind;
mod group_policy;
mod imported_apple_device_identity;
mod ios_lob_app_provisioning_configuration;
mod managed_app_protection;
mod sensitive_content;
mod site;
mod site_page;
mod vpp_token;

pub mod ediscovery;
pub mod identity_governance;
pub mod managed_tenants;
pub mod search;
pub mod security;
pub mod tenant_admin;

pub use common::*;
pub use device_management::*;
pub use device_management_setting::*;
pub use directory_object::*;
pub use employee::*;
pub use entity::Entity;
pub use entity_kind::EntityKind;
pub use group_policy::*;
pub use imported_apple_device_identity::*;
pub use ios_lob_app_provisioning_configuration::*;
pub use managed_app_protection::*;
pub use sensitive_content::*;
pub use site::*;
pub use site_page::*;
pub use vpp_token::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Model, codec};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::fmt::Debug;
    use std::fs;

    /// A payload setting every property of `T`, stored under its `@odata.type`.
    fn fully_populated<T: Model>() -> Value {
        let path = format!(
            "{}/tests/resources/models/{}.json",
            env!("CARGO_MANIFEST_DIR"),
            T::ODATA_TYPE.trim_start_matches('#')
        );
        let content = fs::read_to_string(&path).unwrap_or_else(|e| panic!("unable to read '{}': {}", path, e));
        serde_json::from_str(&content).unwrap()
    }

    fn assert_round_trips<T: Model + PartialEq + Debug>() {
        let payload = fully_populated::<T>();
        let model = serde_json::from_value::<T>(payload.clone()).unwrap();

        assert!(
            model.additional_data().is_empty(),
            "{} left properties untyped: {:?}",
            T::ODATA_TYPE,
            model.additional_data().keys().collect::<Vec<_>>()
        );
        assert_eq!(serde_json::to_value(&model).unwrap(), payload);
        assert_eq!(codec::round_trip(&model).unwrap(), model);

        let empty = serde_json::from_value::<T>(json!({})).unwrap();
        assert_eq!(codec::round_trip(&empty).unwrap(), empty);
        assert_eq!(codec::serialize(&empty).unwrap(), b"{}");
    }

    #[rstest]
    #[case::administrative_unit(assert_round_trips::<AdministrativeUnit>)]
    #[case::android_managed_app_protection(assert_round_trips::<AndroidManagedAppProtection>)]
    #[case::base_item(assert_round_trips::<BaseItem>)]
    #[case::canvas_layout(assert_round_trips::<CanvasLayout>)]
    #[case::classification_attribute(assert_round_trips::<ClassificationAttribute>)]
    #[case::content_type_info(assert_round_trips::<ContentTypeInfo>)]
    #[case::contract(assert_round_trips::<Contract>)]
    #[case::default_managed_app_protection(assert_round_trips::<DefaultManagedAppProtection>)]
    #[case::deleted(assert_round_trips::<Deleted>)]
    #[case::detected_sensitive_content(assert_round_trips::<DetectedSensitiveContent>)]
    #[case::detected_sensitive_content_base(assert_round_trips::<DetectedSensitiveContentBase>)]
    #[case::device_management_abstract_complex_setting_definition(assert_round_trips::<DeviceManagementAbstractComplexSettingDefinition>)]
    #[case::device_management_abstract_complex_setting_instance(assert_round_trips::<DeviceManagementAbstractComplexSettingInstance>)]
    #[case::device_management_boolean_setting_instance(assert_round_trips::<DeviceManagementBooleanSettingInstance>)]
    #[case::device_management_collection_setting_definition(assert_round_trips::<DeviceManagementCollectionSettingDefinition>)]
    #[case::device_management_collection_setting_instance(assert_round_trips::<DeviceManagementCollectionSettingInstance>)]
    #[case::device_management_complex_setting_definition(assert_round_trips::<DeviceManagementComplexSettingDefinition>)]
    #[case::device_management_complex_setting_instance(assert_round_trips::<DeviceManagementComplexSettingInstance>)]
    #[case::device_management_integer_setting_instance(assert_round_trips::<DeviceManagementIntegerSettingInstance>)]
    #[case::device_management_setting_definition(assert_round_trips::<DeviceManagementSettingDefinition>)]
    #[case::device_management_setting_instance(assert_round_trips::<DeviceManagementSettingInstance>)]
    #[case::device_management_settings(assert_round_trips::<DeviceManagementSettings>)]
    #[case::device_management_string_setting_instance(assert_round_trips::<DeviceManagementStringSettingInstance>)]
    #[case::directory_object(assert_round_trips::<DirectoryObject>)]
    #[case::email_identity(assert_round_trips::<EmailIdentity>)]
    #[case::employee(assert_round_trips::<Employee>)]
    #[case::entity(assert_round_trips::<Entity>)]
    #[case::exact_match_detected_sensitive_content(assert_round_trips::<ExactMatchDetectedSensitiveContent>)]
    #[case::group_policy_definition(assert_round_trips::<GroupPolicyDefinition>)]
    #[case::group_policy_presentation(assert_round_trips::<GroupPolicyPresentation>)]
    #[case::group_policy_presentation_check_box(assert_round_trips::<GroupPolicyPresentationCheckBox>)]
    #[case::group_policy_presentation_combo_box(assert_round_trips::<GroupPolicyPresentationComboBox>)]
    #[case::group_policy_presentation_decimal_text_box(assert_round_trips::<GroupPolicyPresentationDecimalTextBox>)]
    #[case::group_policy_presentation_dropdown_list(assert_round_trips::<GroupPolicyPresentationDropdownList>)]
    #[case::group_policy_presentation_dropdown_list_item(assert_round_trips::<GroupPolicyPresentationDropdownListItem>)]
    #[case::group_policy_presentation_list_box(assert_round_trips::<GroupPolicyPresentationListBox>)]
    #[case::group_policy_presentation_long_decimal_text_box(assert_round_trips::<GroupPolicyPresentationLongDecimalTextBox>)]
    #[case::group_policy_presentation_multi_text_box(assert_round_trips::<GroupPolicyPresentationMultiTextBox>)]
    #[case::group_policy_presentation_text(assert_round_trips::<GroupPolicyPresentationText>)]
    #[case::group_policy_presentation_text_box(assert_round_trips::<GroupPolicyPresentationTextBox>)]
    #[case::horizontal_section(assert_round_trips::<HorizontalSection>)]
    #[case::horizontal_section_column(assert_round_trips::<HorizontalSectionColumn>)]
    #[case::identity(assert_round_trips::<Identity>)]
    #[case::identity_set(assert_round_trips::<IdentitySet>)]
    #[case::imported_apple_device_identity(assert_round_trips::<ImportedAppleDeviceIdentity>)]
    #[case::imported_apple_device_identity_result(assert_round_trips::<ImportedAppleDeviceIdentityResult>)]
    #[case::ios_lob_app_provisioning_configuration(assert_round_trips::<IosLobAppProvisioningConfiguration>)]
    #[case::ios_managed_app_protection(assert_round_trips::<IosManagedAppProtection>)]
    #[case::item_reference(assert_round_trips::<ItemReference>)]
    #[case::key_value(assert_round_trips::<KeyValue>)]
    #[case::key_value_pair(assert_round_trips::<KeyValuePair>)]
    #[case::machine_learning_detected_sensitive_content(assert_round_trips::<MachineLearningDetectedSensitiveContent>)]
    #[case::managed_app_policy(assert_round_trips::<ManagedAppPolicy>)]
    #[case::managed_app_protection(assert_round_trips::<ManagedAppProtection>)]
    #[case::meta_data_key_string_pair(assert_round_trips::<MetaDataKeyStringPair>)]
    #[case::meta_data_key_value_pair(assert_round_trips::<MetaDataKeyValuePair>)]
    #[case::picture(assert_round_trips::<Picture>)]
    #[case::postal_address_type(assert_round_trips::<PostalAddressType>)]
    #[case::publication_facet(assert_round_trips::<PublicationFacet>)]
    #[case::reactions_facet(assert_round_trips::<ReactionsFacet>)]
    #[case::root(assert_round_trips::<Root>)]
    #[case::sensitive_content_evidence(assert_round_trips::<SensitiveContentEvidence>)]
    #[case::sensitive_content_location(assert_round_trips::<SensitiveContentLocation>)]
    #[case::server_processed_content(assert_round_trips::<ServerProcessedContent>)]
    #[case::sharepoint_ids(assert_round_trips::<SharepointIds>)]
    #[case::site(assert_round_trips::<Site>)]
    #[case::site_collection(assert_round_trips::<SiteCollection>)]
    #[case::site_page(assert_round_trips::<SitePage>)]
    #[case::site_settings(assert_round_trips::<SiteSettings>)]
    #[case::standard_web_part(assert_round_trips::<StandardWebPart>)]
    #[case::targeted_managed_app_protection(assert_round_trips::<TargetedManagedAppProtection>)]
    #[case::text_web_part(assert_round_trips::<TextWebPart>)]
    #[case::title_area(assert_round_trips::<TitleArea>)]
    #[case::user(assert_round_trips::<User>)]
    #[case::user_identity(assert_round_trips::<UserIdentity>)]
    #[case::vertical_section(assert_round_trips::<VerticalSection>)]
    #[case::vpp_token(assert_round_trips::<VppToken>)]
    #[case::vpp_token_action_result(assert_round_trips::<VppTokenActionResult>)]
    #[case::vpp_token_revoke_licenses_action_result(assert_round_trips::<VppTokenRevokeLicensesActionResult>)]
    #[case::web_part(assert_round_trips::<WebPart>)]
    #[case::web_part_data(assert_round_trips::<WebPartData>)]
    #[case::windows_firewall_network_profile(assert_round_trips::<WindowsFirewallNetworkProfile>)]
    #[case::windows_firewall_rule(assert_round_trips::<WindowsFirewallRule>)]
    #[case::zebra_fota_deployment_settings(assert_round_trips::<ZebraFotaDeploymentSettings>)]
    #[case::ediscovery_legal_hold(assert_round_trips::<ediscovery::LegalHold>)]
    #[case::identity_governance_on_demand_execution_only(assert_round_trips::<identity_governance::OnDemandExecutionOnly>)]
    #[case::identity_governance_rule_based_subject_set(assert_round_trips::<identity_governance::RuleBasedSubjectSet>)]
    #[case::identity_governance_run(assert_round_trips::<identity_governance::Run>)]
    #[case::identity_governance_subject_set(assert_round_trips::<identity_governance::SubjectSet>)]
    #[case::identity_governance_task(assert_round_trips::<identity_governance::Task>)]
    #[case::identity_governance_task_report(assert_round_trips::<identity_governance::TaskReport>)]
    #[case::identity_governance_time_based_attribute_trigger(assert_round_trips::<identity_governance::TimeBasedAttributeTrigger>)]
    #[case::identity_governance_trigger_and_scope_based_conditions(assert_round_trips::<identity_governance::TriggerAndScopeBasedConditions>)]
    #[case::identity_governance_workflow(assert_round_trips::<identity_governance::Workflow>)]
    #[case::identity_governance_workflow_base(assert_round_trips::<identity_governance::WorkflowBase>)]
    #[case::identity_governance_workflow_execution_conditions(assert_round_trips::<identity_governance::WorkflowExecutionConditions>)]
    #[case::identity_governance_workflow_execution_trigger(assert_round_trips::<identity_governance::WorkflowExecutionTrigger>)]
    #[case::identity_governance_workflow_version(assert_round_trips::<identity_governance::WorkflowVersion>)]
    #[case::managed_tenants_alert_data(assert_round_trips::<managed_tenants::AlertData>)]
    #[case::managed_tenants_alert_data_reference_string(assert_round_trips::<managed_tenants::AlertDataReferenceString>)]
    #[case::managed_tenants_managed_tenant_alert(assert_round_trips::<managed_tenants::ManagedTenantAlert>)]
    #[case::search_answer_keyword(assert_round_trips::<search::AnswerKeyword>)]
    #[case::search_answer_variant(assert_round_trips::<search::AnswerVariant>)]
    #[case::search_bookmark(assert_round_trips::<search::Bookmark>)]
    #[case::search_qna(assert_round_trips::<search::Qna>)]
    #[case::search_search_answer(assert_round_trips::<search::SearchAnswer>)]
    #[case::security_attack_simulation_info(assert_round_trips::<security::AttackSimulationInfo>)]
    #[case::security_email_content_threat_submission(assert_round_trips::<security::EmailContentThreatSubmission>)]
    #[case::security_email_threat_submission(assert_round_trips::<security::EmailThreatSubmission>)]
    #[case::security_email_url_threat_submission(assert_round_trips::<security::EmailUrlThreatSubmission>)]
    #[case::security_file_content_threat_submission(assert_round_trips::<security::FileContentThreatSubmission>)]
    #[case::security_file_threat_submission(assert_round_trips::<security::FileThreatSubmission>)]
    #[case::security_file_url_threat_submission(assert_round_trips::<security::FileUrlThreatSubmission>)]
    #[case::security_submission_admin_review(assert_round_trips::<security::SubmissionAdminReview>)]
    #[case::security_submission_detected_file(assert_round_trips::<security::SubmissionDetectedFile>)]
    #[case::security_submission_result(assert_round_trips::<security::SubmissionResult>)]
    #[case::security_submission_user_identity(assert_round_trips::<security::SubmissionUserIdentity>)]
    #[case::security_tenant_allow_or_block_list_action(assert_round_trips::<security::TenantAllowOrBlockListAction>)]
    #[case::security_threat_submission(assert_round_trips::<security::ThreatSubmission>)]
    #[case::security_url_threat_submission(assert_round_trips::<security::UrlThreatSubmission>)]
    #[case::tenant_admin_idle_session_sign_out(assert_round_trips::<tenant_admin::IdleSessionSignOut>)]
    #[case::tenant_admin_settings(assert_round_trips::<tenant_admin::Settings>)]
    fn every_model_round_trips_fully_populated_and_empty(#[case] check: fn()) {
        check();
    }
}
