use crate::serialization::AdditionalData;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Root of every addressable resource. Derived resources embed it through their parent chain.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// The unique identifier for an entity. Read-only.
    pub id: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(Entity => "#microsoft.graph.entity");

impl Entity {
    pub fn with_id(id: impl Into<String>) -> Self {
        Entity {
            id: Some(id.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Model;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn absent_properties_are_left_unset_and_not_written() {
        let entity = serde_json::from_value::<Entity>(json!({})).unwrap();

        assert_eq!(entity, Entity::default());
        assert_eq!(serde_json::to_value(&entity).unwrap(), json!({}));
    }

    #[test]
    fn unknown_properties_are_kept_and_written_back() {
        let json = json!({
            "id": "42",
            "@odata.type": "#microsoft.graph.entity",
            "@odata.etag": "W/\"1\"",
            "futureProperty": { "nested": [1, 2, 3] }
        });

        let entity = serde_json::from_value::<Entity>(json.clone()).unwrap();

        assert_eq!(entity.id.as_deref(), Some("42"));
        assert_eq!(entity.odata_type(), Some("#microsoft.graph.entity"));
        assert_eq!(entity.additional_data().len(), 2);
        assert_eq!(serde_json::to_value(&entity).unwrap(), json);
    }

    #[test]
    fn new_does_not_stamp_the_discriminator() {
        assert_eq!(Entity::new().odata_type(), None);
        assert_eq!(Entity::with_id("42").id.as_deref(), Some("42"));
    }

    #[test]
    fn a_mistyped_property_fails_the_whole_object() {
        let result = serde_json::from_value::<Entity>(json!({ "id": 42 }));
        assert!(result.is_err());
    }
}
