use crate::models::Entity;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A single setting value of an intent or template. The concrete shape depends on the setting's value type.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceManagementSettingInstance {
    #[serde(flatten)]
    pub entity: Entity,
    pub definition_id: Option<String>,
    /// JSON representation of the value, as a string.
    pub value_json: Option<String>,
}

model!(DeviceManagementSettingInstance => "#microsoft.graph.deviceManagementSettingInstance", via entity);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceManagementBooleanSettingInstance {
    #[serde(flatten)]
    pub setting_instance: DeviceManagementSettingInstance,
    pub value: Option<bool>,
}

model!(
    DeviceManagementBooleanSettingInstance => "#microsoft.graph.deviceManagementBooleanSettingInstance",
    via setting_instance.entity,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceManagementIntegerSettingInstance {
    #[serde(flatten)]
    pub setting_instance: DeviceManagementSettingInstance,
    pub value: Option<i32>,
}

model!(
    DeviceManagementIntegerSettingInstance => "#microsoft.graph.deviceManagementIntegerSettingInstance",
    via setting_instance.entity,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceManagementStringSettingInstance {
    #[serde(flatten)]
    pub setting_instance: DeviceManagementSettingInstance,
    pub value: Option<String>,
}

model!(
    DeviceManagementStringSettingInstance => "#microsoft.graph.deviceManagementStringSettingInstance",
    via setting_instance.entity,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceManagementComplexSettingInstance {
    #[serde(flatten)]
    pub setting_instance: DeviceManagementSettingInstance,
    pub value: Option<Vec<DeviceManagementSettingInstanceKind>>,
}

model!(
    DeviceManagementComplexSettingInstance => "#microsoft.graph.deviceManagementComplexSettingInstance",
    via setting_instance.entity,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceManagementCollectionSettingInstance {
    #[serde(flatten)]
    pub setting_instance: DeviceManagementSettingInstance,
    pub value: Option<Vec<DeviceManagementSettingInstanceKind>>,
}

model!(
    DeviceManagementCollectionSettingInstance => "#microsoft.graph.deviceManagementCollectionSettingInstance",
    via setting_instance.entity,
    stamped
);

/// A complex value whose concrete shape is picked by `implementation_id`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceManagementAbstractComplexSettingInstance {
    #[serde(flatten)]
    pub setting_instance: DeviceManagementSettingInstance,
    pub implementation_id: Option<String>,
    pub value: Option<Vec<DeviceManagementSettingInstanceKind>>,
}

model!(
    DeviceManagementAbstractComplexSettingInstance => "#microsoft.graph.deviceManagementAbstractComplexSettingInstance",
    via setting_instance.entity,
    stamped
);

family! {
    pub enum DeviceManagementSettingInstanceKind {
        Boolean(DeviceManagementBooleanSettingInstance),
        Integer(DeviceManagementIntegerSettingInstance),
        String(DeviceManagementStringSettingInstance),
        Complex(DeviceManagementComplexSettingInstance),
        Collection(DeviceManagementCollectionSettingInstance),
        AbstractComplex(DeviceManagementAbstractComplexSettingInstance),
        _ => SettingInstance(DeviceManagementSettingInstance),
    }
}

/// The value type of a setting definition. The misspelling is part of the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceManangementIntentValueType {
    Integer,
    Boolean,
    String,
    Complex,
    Collection,
    AbstractComplex,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceManagementSettingDefinition {
    #[serde(flatten)]
    pub entity: Entity,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub documentation_url: Option<String>,
    pub header_subtitle: Option<String>,
    pub header_title: Option<String>,
    /// Whether the setting is top level or only appears nested in a complex or collection setting.
    pub is_top_level: Option<bool>,
    pub keywords: Option<Vec<String>>,
    pub placeholder_text: Option<String>,
    pub value_type: Option<DeviceManangementIntentValueType>,
}

model!(DeviceManagementSettingDefinition => "#microsoft.graph.deviceManagementSettingDefinition", via entity);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceManagementCollectionSettingDefinition {
    #[serde(flatten)]
    pub setting_definition: DeviceManagementSettingDefinition,
    pub element_definition_id: Option<String>,
}

model!(
    DeviceManagementCollectionSettingDefinition => "#microsoft.graph.deviceManagementCollectionSettingDefinition",
    via setting_definition.entity,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceManagementComplexSettingDefinition {
    #[serde(flatten)]
    pub setting_definition: DeviceManagementSettingDefinition,
    pub property_definition_ids: Option<Vec<String>>,
}

model!(
    DeviceManagementComplexSettingDefinition => "#microsoft.graph.deviceManagementComplexSettingDefinition",
    via setting_definition.entity,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceManagementAbstractComplexSettingDefinition {
    #[serde(flatten)]
    pub setting_definition: DeviceManagementSettingDefinition,
    /// Definition ids of the complex settings that implement this one.
    pub implementations: Option<Vec<String>>,
}

model!(
    DeviceManagementAbstractComplexSettingDefinition => "#microsoft.graph.deviceManagementAbstractComplexSettingDefinition",
    via setting_definition.entity,
    stamped
);

family! {
    pub enum DeviceManagementSettingDefinitionKind {
        Collection(DeviceManagementCollectionSettingDefinition),
        Complex(DeviceManagementComplexSettingDefinition),
        AbstractComplex(DeviceManagementAbstractComplexSettingDefinition),
        _ => SettingDefinition(DeviceManagementSettingDefinition),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case::boolean(json!({ "@odata.type": "#microsoft.graph.deviceManagementBooleanSettingInstance", "value": true }))]
    #[case::integer(json!({ "@odata.type": "#microsoft.graph.deviceManagementIntegerSettingInstance", "value": 15 }))]
    #[case::string(json!({ "@odata.type": "#microsoft.graph.deviceManagementStringSettingInstance", "value": "contoso" }))]
    #[case::abstract_complex(json!({
        "@odata.type": "#microsoft.graph.deviceManagementAbstractComplexSettingInstance",
        "implementationId": "vpn",
        "value": [{ "@odata.type": "#microsoft.graph.deviceManagementStringSettingInstance", "definitionId": "server", "value": "vpn.contoso.com" }]
    }))]
    fn setting_instances_resolve_and_write_back(#[case] json: Value) {
        let instance = serde_json::from_value::<DeviceManagementSettingInstanceKind>(json.clone()).unwrap();

        assert!(!instance.is_base());
        assert_eq!(instance.odata_type(), json["@odata.type"].as_str());
        assert_eq!(serde_json::to_value(&instance).unwrap(), json);
    }

    #[test]
    fn collection_values_are_dispatched_per_element() {
        let json = json!({
            "@odata.type": "#microsoft.graph.deviceManagementCollectionSettingInstance",
            "definitionId": "allowedApps",
            "valueJson": "[\"a\",1]",
            "value": [
                { "@odata.type": "#microsoft.graph.deviceManagementStringSettingInstance", "value": "a" },
                { "@odata.type": "#microsoft.graph.deviceManagementIntegerSettingInstance", "value": 1 },
                { "definitionId": "untyped" }
            ]
        });

        let instance = serde_json::from_value::<DeviceManagementSettingInstanceKind>(json).unwrap();

        let values = match instance {
            DeviceManagementSettingInstanceKind::Collection(collection) => collection.value.unwrap_or_default(),
            other => panic!("expected a collection setting instance, found {:?}", other),
        };
        assert!(matches!(values[0], DeviceManagementSettingInstanceKind::String(_)));
        assert!(matches!(&values[1], DeviceManagementSettingInstanceKind::Integer(i) if i.value == Some(1)));
        assert!(values[2].is_base());
    }

    #[test]
    fn a_value_of_the_wrong_shape_fails() {
        let result = serde_json::from_value::<DeviceManagementSettingInstanceKind>(json!({
            "@odata.type": "#microsoft.graph.deviceManagementBooleanSettingInstance",
            "value": "yes"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn setting_definitions_resolve_their_family() {
        let json = json!({
            "@odata.type": "#microsoft.graph.deviceManagementComplexSettingDefinition",
            "displayName": "VPN server",
            "valueType": "abstractComplex",
            "isTopLevel": true,
            "propertyDefinitionIds": ["address", "description"]
        });

        let definition = serde_json::from_value::<DeviceManagementSettingDefinitionKind>(json.clone()).unwrap();

        match &definition {
            DeviceManagementSettingDefinitionKind::Complex(complex) => {
                assert_eq!(complex.setting_definition.value_type, Some(DeviceManangementIntentValueType::AbstractComplex));
                assert_eq!(complex.property_definition_ids.as_ref().map(Vec::len), Some(2));
            }
            other => panic!("expected a complex setting definition, found {:?}", other),
        }
        assert_eq!(serde_json::to_value(&definition).unwrap(), json);
    }
}
