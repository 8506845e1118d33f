use crate::models::Entity;
use crate::serialization::{AdditionalData, Timestamp};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupPolicyDefinitionClassType {
    User,
    Machine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupPolicyType {
    AdmxBacked,
    AdmxIngested,
}

/// A single group policy, as described by its ADMX file.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicyDefinition {
    #[serde(flatten)]
    pub entity: Entity,
    /// The localized full category path for the policy.
    pub category_path: Option<String>,
    pub class_type: Option<GroupPolicyDefinitionClassType>,
    pub display_name: Option<String>,
    /// The localized help text of the policy. Empty by default.
    pub explain_text: Option<String>,
    pub group_policy_category_id: Option<Uuid>,
    pub has_related_definitions: Option<bool>,
    pub last_modified_date_time: Option<Timestamp>,
    pub min_device_csp_version: Option<String>,
    pub min_user_csp_version: Option<String>,
    pub next_version_definition: Option<Box<GroupPolicyDefinition>>,
    pub policy_type: Option<GroupPolicyType>,
    pub presentations: Option<Vec<GroupPolicyPresentationKind>>,
    pub previous_version_definition: Option<Box<GroupPolicyDefinition>>,
    pub supported_on: Option<String>,
    pub version: Option<String>,
}

model!(GroupPolicyDefinition => "#microsoft.graph.groupPolicyDefinition", via entity);

/// A UI element of a group policy's settings dialog.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicyPresentation {
    #[serde(flatten)]
    pub entity: Entity,
    pub label: Option<String>,
    pub last_modified_date_time: Option<Timestamp>,
}

model!(GroupPolicyPresentation => "#microsoft.graph.groupPolicyPresentation", via entity);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicyPresentationCheckBox {
    #[serde(flatten)]
    pub presentation: GroupPolicyPresentation,
    pub default_checked: Option<bool>,
}

model!(GroupPolicyPresentationCheckBox => "#microsoft.graph.groupPolicyPresentationCheckBox", via presentation.entity, stamped);

/// Static text shown in the dialog. Carries nothing besides the label.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicyPresentationText {
    #[serde(flatten)]
    pub presentation: GroupPolicyPresentation,
}

model!(GroupPolicyPresentationText => "#microsoft.graph.groupPolicyPresentationText", via presentation.entity, stamped);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicyPresentationTextBox {
    #[serde(flatten)]
    pub presentation: GroupPolicyPresentation,
    pub default_value: Option<String>,
    pub max_length: Option<i64>,
    pub required: Option<bool>,
}

model!(GroupPolicyPresentationTextBox => "#microsoft.graph.groupPolicyPresentationTextBox", via presentation.entity, stamped);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicyPresentationDecimalTextBox {
    #[serde(flatten)]
    pub presentation: GroupPolicyPresentation,
    pub default_value: Option<i64>,
    pub max_value: Option<i64>,
    pub min_value: Option<i64>,
    pub required: Option<bool>,
    /// Whether a spin control is shown next to the text box.
    pub spin: Option<bool>,
    pub spin_step: Option<i64>,
}

model!(
    GroupPolicyPresentationDecimalTextBox => "#microsoft.graph.groupPolicyPresentationDecimalTextBox",
    via presentation.entity,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicyPresentationLongDecimalTextBox {
    #[serde(flatten)]
    pub presentation: GroupPolicyPresentation,
    pub default_value: Option<i64>,
    pub max_value: Option<i64>,
    pub min_value: Option<i64>,
    pub required: Option<bool>,
    pub spin: Option<bool>,
    pub spin_step: Option<i64>,
}

model!(
    GroupPolicyPresentationLongDecimalTextBox => "#microsoft.graph.groupPolicyPresentationLongDecimalTextBox",
    via presentation.entity,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicyPresentationDropdownListItem {
    pub display_name: Option<String>,
    pub value: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(GroupPolicyPresentationDropdownListItem => "#microsoft.graph.groupPolicyPresentationDropdownListItem");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicyPresentationDropdownList {
    #[serde(flatten)]
    pub presentation: GroupPolicyPresentation,
    pub default_item: Option<GroupPolicyPresentationDropdownListItem>,
    pub items: Option<Vec<GroupPolicyPresentationDropdownListItem>>,
    pub required: Option<bool>,
}

model!(
    GroupPolicyPresentationDropdownList => "#microsoft.graph.groupPolicyPresentationDropdownList",
    via presentation.entity,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicyPresentationListBox {
    #[serde(flatten)]
    pub presentation: GroupPolicyPresentation,
    pub explicit_value: Option<bool>,
    pub value_prefix: Option<String>,
}

model!(GroupPolicyPresentationListBox => "#microsoft.graph.groupPolicyPresentationListBox", via presentation.entity, stamped);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicyPresentationMultiTextBox {
    #[serde(flatten)]
    pub presentation: GroupPolicyPresentation,
    pub max_length: Option<i64>,
    pub max_strings: Option<i64>,
    pub required: Option<bool>,
}

model!(
    GroupPolicyPresentationMultiTextBox => "#microsoft.graph.groupPolicyPresentationMultiTextBox",
    via presentation.entity,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicyPresentationComboBox {
    #[serde(flatten)]
    pub presentation: GroupPolicyPresentation,
    pub default_value: Option<String>,
    pub max_length: Option<i64>,
    pub required: Option<bool>,
    pub suggestions: Option<Vec<String>>,
}

model!(GroupPolicyPresentationComboBox => "#microsoft.graph.groupPolicyPresentationComboBox", via presentation.entity, stamped);

family! {
    pub enum GroupPolicyPresentationKind {
        CheckBox(GroupPolicyPresentationCheckBox),
        Text(GroupPolicyPresentationText),
        TextBox(GroupPolicyPresentationTextBox),
        DecimalTextBox(GroupPolicyPresentationDecimalTextBox),
        LongDecimalTextBox(GroupPolicyPresentationLongDecimalTextBox),
        DropdownList(GroupPolicyPresentationDropdownList),
        ListBox(GroupPolicyPresentationListBox),
        MultiTextBox(GroupPolicyPresentationMultiTextBox),
        ComboBox(GroupPolicyPresentationComboBox),
        _ => Presentation(GroupPolicyPresentation),
    }
}
