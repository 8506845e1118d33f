use crate::models::Entity;
use crate::serialization::Timestamp;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;

/// An object of the directory, e.g. a user, an administrative unit or a partner contract.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryObject {
    #[serde(flatten)]
    pub entity: Entity,
    /// Date and time when this object was deleted. Always null when the object hasn't been deleted.
    pub deleted_date_time: Option<Timestamp>,
}

model!(DirectoryObject => "#microsoft.graph.directoryObject", via entity);

/// A partnership with a customer tenant.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    #[serde(flatten)]
    pub directory_object: DirectoryObject,
    /// Type of contract. Possible values: `SyndicationPartner`, `BreadthPartner`, `ResellerPartner`.
    pub contract_type: Option<String>,
    /// The unique identifier for the customer tenant referenced by this partnership.
    pub customer_id: Option<Uuid>,
    pub default_domain_name: Option<String>,
    pub display_name: Option<String>,
}

model!(Contract => "#microsoft.graph.contract", via directory_object.entity, stamped);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministrativeUnit {
    #[serde(flatten)]
    pub directory_object: DirectoryObject,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub is_member_management_restricted: Option<bool>,
    pub membership_rule: Option<String>,
    pub membership_rule_processing_state: Option<String>,
    pub membership_type: Option<String>,
    pub visibility: Option<String>,
    pub members: Option<Vec<DirectoryObjectKind>>,
}

model!(AdministrativeUnit => "#microsoft.graph.administrativeUnit", via directory_object.entity, stamped);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(flatten)]
    pub directory_object: DirectoryObject,
    pub account_enabled: Option<bool>,
    pub business_phones: Option<Vec<String>>,
    pub created_date_time: Option<Timestamp>,
    pub department: Option<String>,
    pub display_name: Option<String>,
    pub employee_hire_date: Option<Timestamp>,
    pub employee_leave_date_time: Option<Timestamp>,
    pub given_name: Option<String>,
    pub job_title: Option<String>,
    pub mail: Option<String>,
    pub mail_nickname: Option<String>,
    pub mobile_phone: Option<String>,
    pub office_location: Option<String>,
    pub preferred_language: Option<String>,
    pub surname: Option<String>,
    pub user_principal_name: Option<String>,
    pub user_type: Option<String>,
}

model!(User => "#microsoft.graph.user", via directory_object.entity, stamped);

family! {
    pub enum DirectoryObjectKind {
        Contract(Contract),
        AdministrativeUnit(AdministrativeUnit),
        User(User),
        _ => DirectoryObject(DirectoryObject),
    }
}
