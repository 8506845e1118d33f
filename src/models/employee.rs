use crate::models::Entity;
use crate::serialization::{AdditionalData, DateOnly, Timestamp};
use serde::{Deserialize, Serialize};
use serde_with::base64::Base64;
use serde_with::{serde_as, skip_serializing_none};

/// An employee of a Dynamics 365 Business Central company.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(flatten)]
    pub entity: Entity,
    pub address: Option<PostalAddressType>,
    pub birth_date: Option<DateOnly>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub employment_date: Option<DateOnly>,
    pub given_name: Option<String>,
    pub job_title: Option<String>,
    pub last_modified_date_time: Option<Timestamp>,
    pub middle_name: Option<String>,
    pub mobile_phone: Option<String>,
    pub number: Option<String>,
    pub personal_email: Option<String>,
    pub phone_number: Option<String>,
    pub picture: Option<Vec<Picture>>,
    pub statistics_group_code: Option<String>,
    /// `active` or `inactive`, not an enum in the schema.
    pub status: Option<String>,
    pub surname: Option<String>,
    pub termination_date: Option<DateOnly>,
}

model!(Employee => "#microsoft.graph.employee", via entity);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddressType {
    pub city: Option<String>,
    pub country_letter_code: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub street: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(PostalAddressType => "#microsoft.graph.postalAddressType");

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Picture {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde_as(as = "Option<Base64>")]
    pub content: Option<Vec<u8>>,
    pub content_type: Option<String>,
    pub height: Option<i32>,
    pub width: Option<i32>,
}

model!(Picture => "#microsoft.graph.picture", via entity);
