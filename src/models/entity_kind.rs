use crate::models::ediscovery::LegalHold;
use crate::models::identity_governance::{Run, Task, TaskReport};
use crate::models::managed_tenants::ManagedTenantAlert;
use crate::models::search::{Bookmark, Qna, SearchAnswer};
use crate::models::security::*;
use crate::models::tenant_admin::Settings;
use crate::models::*;

family! {
    /// Every resource of the catalogue, resolved from its discriminator. Anything else becomes a plain [`Entity`].
    pub enum EntityKind {
        DirectoryObject(DirectoryObject),
        Contract(Contract),
        AdministrativeUnit(AdministrativeUnit),
        User(User),
        Employee(Employee),
        Picture(Picture),
        BaseItem(BaseItem),
        Site(Site),
        SitePage(SitePage),
        CanvasLayout(CanvasLayout),
        HorizontalSection(HorizontalSection),
        HorizontalSectionColumn(HorizontalSectionColumn),
        VerticalSection(VerticalSection),
        WebPart(WebPart),
        StandardWebPart(StandardWebPart),
        TextWebPart(TextWebPart),
        SettingInstance(DeviceManagementSettingInstance),
        BooleanSettingInstance(DeviceManagementBooleanSettingInstance),
        IntegerSettingInstance(DeviceManagementIntegerSettingInstance),
        StringSettingInstance(DeviceManagementStringSettingInstance),
        ComplexSettingInstance(DeviceManagementComplexSettingInstance),
        CollectionSettingInstance(DeviceManagementCollectionSettingInstance),
        AbstractComplexSettingInstance(DeviceManagementAbstractComplexSettingInstance),
        SettingDefinition(DeviceManagementSettingDefinition),
        CollectionSettingDefinition(DeviceManagementCollectionSettingDefinition),
        ComplexSettingDefinition(DeviceManagementComplexSettingDefinition),
        AbstractComplexSettingDefinition(DeviceManagementAbstractComplexSettingDefinition),
        GroupPolicyDefinition(GroupPolicyDefinition),
        GroupPolicyPresentation(GroupPolicyPresentation),
        GroupPolicyPresentationCheckBox(GroupPolicyPresentationCheckBox),
        GroupPolicyPresentationText(GroupPolicyPresentationText),
        GroupPolicyPresentationTextBox(GroupPolicyPresentationTextBox),
        GroupPolicyPresentationDecimalTextBox(GroupPolicyPresentationDecimalTextBox),
        GroupPolicyPresentationLongDecimalTextBox(GroupPolicyPresentationLongDecimalTextBox),
        GroupPolicyPresentationDropdownList(GroupPolicyPresentationDropdownList),
        GroupPolicyPresentationListBox(GroupPolicyPresentationListBox),
        GroupPolicyPresentationMultiTextBox(GroupPolicyPresentationMultiTextBox),
        GroupPolicyPresentationComboBox(GroupPolicyPresentationComboBox),
        ManagedAppPolicy(ManagedAppPolicy),
        ManagedAppProtection(ManagedAppProtection),
        TargetedManagedAppProtection(TargetedManagedAppProtection),
        IosManagedAppProtection(IosManagedAppProtection),
        AndroidManagedAppProtection(AndroidManagedAppProtection),
        DefaultManagedAppProtection(DefaultManagedAppProtection),
        IosLobAppProvisioningConfiguration(IosLobAppProvisioningConfiguration),
        VppToken(VppToken),
        ImportedAppleDeviceIdentity(ImportedAppleDeviceIdentity),
        ImportedAppleDeviceIdentityResult(ImportedAppleDeviceIdentityResult),
        ThreatSubmission(ThreatSubmission),
        EmailThreatSubmission(EmailThreatSubmission),
        EmailContentThreatSubmission(EmailContentThreatSubmission),
        EmailUrlThreatSubmission(EmailUrlThreatSubmission),
        FileThreatSubmission(FileThreatSubmission),
        FileContentThreatSubmission(FileContentThreatSubmission),
        FileUrlThreatSubmission(FileUrlThreatSubmission),
        UrlThreatSubmission(UrlThreatSubmission),
        LifecycleTask(Task),
        LifecycleRun(Run),
        TaskReport(TaskReport),
        SearchAnswer(SearchAnswer),
        Bookmark(Bookmark),
        Qna(Qna),
        LegalHold(LegalHold),
        ManagedTenantAlert(ManagedTenantAlert),
        TenantSettings(Settings),
        _ => Entity(Entity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::collections::HashSet;

    #[test]
    fn every_known_type_is_listed_once() {
        let unique = EntityKind::KNOWN_TYPES.iter().collect::<HashSet<_>>();

        assert_eq!(unique.len(), EntityKind::KNOWN_TYPES.len());
        assert!(!EntityKind::KNOWN_TYPES.contains(&"#microsoft.graph.entity"));
    }

    #[rstest]
    #[case::contract("#microsoft.graph.contract")]
    #[case::site_page("#microsoft.graph.sitePage")]
    #[case::presentation("#microsoft.graph.groupPolicyPresentationMultiTextBox")]
    #[case::android("#microsoft.graph.androidManagedAppProtection")]
    #[case::url_submission("#microsoft.graph.security.urlThreatSubmission")]
    #[case::lifecycle_task("#microsoft.graph.identityGovernance.task")]
    #[case::legal_hold("#microsoft.graph.ediscovery.legalHold")]
    #[case::tenant_settings("#microsoft.graph.tenantAdmin.settings")]
    fn resolves_members_of_every_namespace(#[case] odata_type: &str) {
        let entity = serde_json::from_value::<EntityKind>(json!({ "@odata.type": odata_type, "id": "1" })).unwrap();

        assert!(!entity.is_base());
        assert_eq!(entity.odata_type(), Some(odata_type));
    }

    #[rstest]
    #[case::missing(json!({ "id": "1" }))]
    #[case::unknown(json!({ "@odata.type": "#microsoft.graph.driveItem", "id": "1" }))]
    #[case::entity_itself(json!({ "@odata.type": "#microsoft.graph.entity", "id": "1" }))]
    fn falls_back_to_entity(#[case] json: Value) {
        let entity = serde_json::from_value::<EntityKind>(json.clone()).unwrap();

        assert!(entity.is_base());
        assert_eq!(serde_json::to_value(&entity).unwrap(), json);
    }

    #[test]
    fn non_string_discriminator_is_an_error() {
        let result = serde_json::from_value::<EntityKind>(json!({ "@odata.type": 7, "id": "1" }));
        assert!(result.is_err());
    }
}
