use crate::models::{Entity, IdentitySet, SitePage, User};
use crate::serialization::{AdditionalData, Timestamp};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Properties shared by items of a SharePoint or OneDrive hierarchy.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseItem {
    #[serde(flatten)]
    pub entity: Entity,
    pub created_by: Option<IdentitySet>,
    pub created_by_user: Option<User>,
    pub created_date_time: Option<Timestamp>,
    pub description: Option<String>,
    /// ETag for the item. Read-only.
    pub e_tag: Option<String>,
    pub last_modified_by: Option<IdentitySet>,
    pub last_modified_by_user: Option<User>,
    pub last_modified_date_time: Option<Timestamp>,
    pub name: Option<String>,
    pub parent_reference: Option<ItemReference>,
    /// URL that displays the item in the browser.
    pub web_url: Option<String>,
}

model!(BaseItem => "#microsoft.graph.baseItem", via entity);

family! {
    pub enum BaseItemKind {
        Site(Site),
        SitePage(SitePage),
        _ => BaseItem(BaseItem),
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    #[serde(flatten)]
    pub base_item: BaseItem,
    pub deleted: Option<Deleted>,
    pub display_name: Option<String>,
    pub root: Option<Root>,
    pub settings: Option<SiteSettings>,
    pub sharepoint_ids: Option<SharepointIds>,
    pub site_collection: Option<SiteCollection>,
    pub items: Option<Vec<BaseItemKind>>,
    pub pages: Option<Vec<SitePage>>,
    pub sites: Option<Vec<Site>>,
}

model!(Site => "#microsoft.graph.site", via base_item.entity, stamped);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemReference {
    pub drive_id: Option<String>,
    pub drive_type: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    /// Percent-encoded path that can be used to navigate to the item.
    pub path: Option<String>,
    pub share_id: Option<String>,
    pub sharepoint_ids: Option<SharepointIds>,
    pub site_id: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(ItemReference => "#microsoft.graph.itemReference");

/// SharePoint REST identifiers of an item.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharepointIds {
    pub list_id: Option<String>,
    pub list_item_id: Option<String>,
    pub list_item_unique_id: Option<String>,
    pub site_id: Option<String>,
    pub site_url: Option<String>,
    pub tenant_id: Option<String>,
    pub web_id: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(SharepointIds => "#microsoft.graph.sharepointIds");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteCollection {
    pub data_location_code: Option<String>,
    pub hostname: Option<String>,
    pub root: Option<Root>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(SiteCollection => "#microsoft.graph.siteCollection");

/// Marks the top-level site of a collection. Carries no properties of its own.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Root {
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(Root => "#microsoft.graph.root");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deleted {
    pub state: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(Deleted => "#microsoft.graph.deleted");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub language_tag: Option<String>,
    pub time_zone: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(SiteSettings => "#microsoft.graph.siteSettings");
