use crate::models::{BaseItem, Entity, IdentitySet, MetaDataKeyStringPair, MetaDataKeyValuePair};
use crate::serialization::{AdditionalData, Json};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageLayoutType {
    MicrosoftReserved,
    Article,
    Home,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PagePromotionType {
    MicrosoftReserved,
    Page,
    NewsPost,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TitleAreaLayoutType {
    ImageAndTitle,
    Plain,
    ColorBlock,
    Overlap,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TitleAreaTextAlignmentType {
    Left,
    Center,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionEmphasisType {
    None,
    Neutral,
    Soft,
    Strong,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizontalSectionLayoutType {
    None,
    OneColumn,
    TwoColumns,
    ThreeColumns,
    OneThirdLeftColumn,
    OneThirdRightColumn,
    FullWidth,
    UnknownFutureValue,
}

/// A modern page of a SharePoint site.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitePage {
    #[serde(flatten)]
    pub base_item: BaseItem,
    pub canvas_layout: Option<CanvasLayout>,
    pub content_type: Option<ContentTypeInfo>,
    pub page_layout: Option<PageLayoutType>,
    pub promotion_kind: Option<PagePromotionType>,
    pub publishing_state: Option<PublicationFacet>,
    pub reactions: Option<ReactionsFacet>,
    /// Whether comments are shown at the bottom of the page.
    pub show_comments: Option<bool>,
    pub show_recommended_pages: Option<bool>,
    pub thumbnail_web_url: Option<String>,
    pub title: Option<String>,
    pub title_area: Option<TitleArea>,
    pub web_parts: Option<Vec<WebPartKind>>,
}

model!(SitePage => "#microsoft.graph.sitePage", via base_item.entity, stamped);

/// The layout of a page's content: horizontal sections stacked on top of each other, plus an optional vertical one.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasLayout {
    #[serde(flatten)]
    pub entity: Entity,
    pub horizontal_sections: Option<Vec<HorizontalSection>>,
    pub vertical_section: Option<VerticalSection>,
}

model!(CanvasLayout => "#microsoft.graph.canvasLayout", via entity);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizontalSection {
    #[serde(flatten)]
    pub entity: Entity,
    pub columns: Option<Vec<HorizontalSectionColumn>>,
    pub emphasis: Option<SectionEmphasisType>,
    pub layout: Option<HorizontalSectionLayoutType>,
}

model!(HorizontalSection => "#microsoft.graph.horizontalSection", via entity);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizontalSectionColumn {
    #[serde(flatten)]
    pub entity: Entity,
    pub webparts: Option<Vec<WebPartKind>>,
    /// Width of the column, in twelfths of the section.
    pub width: Option<i32>,
}

model!(HorizontalSectionColumn => "#microsoft.graph.horizontalSectionColumn", via entity);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalSection {
    #[serde(flatten)]
    pub entity: Entity,
    pub emphasis: Option<SectionEmphasisType>,
    pub webparts: Option<Vec<WebPartKind>>,
}

model!(VerticalSection => "#microsoft.graph.verticalSection", via entity);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleArea {
    pub alternative_text: Option<String>,
    pub enable_gradient_effect: Option<bool>,
    pub image_web_url: Option<String>,
    pub layout: Option<TitleAreaLayoutType>,
    pub server_processed_content: Option<ServerProcessedContent>,
    pub show_author: Option<bool>,
    pub show_published_date: Option<bool>,
    pub show_text_block_above_title: Option<bool>,
    pub text_above_title: Option<String>,
    pub text_alignment: Option<TitleAreaTextAlignmentType>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(TitleArea => "#microsoft.graph.titleArea");

/// Content the server extracted from a web part so it can be searched and rendered without the client.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerProcessedContent {
    pub component_dependencies: Option<Vec<MetaDataKeyStringPair>>,
    pub custom_metadata: Option<Vec<MetaDataKeyValuePair>>,
    pub html_strings: Option<Vec<MetaDataKeyStringPair>>,
    pub image_sources: Option<Vec<MetaDataKeyStringPair>>,
    pub links: Option<Vec<MetaDataKeyStringPair>>,
    pub searchable_plain_texts: Option<Vec<MetaDataKeyStringPair>>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(ServerProcessedContent => "#microsoft.graph.serverProcessedContent");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPart {
    #[serde(flatten)]
    pub entity: Entity,
}

model!(WebPart => "#microsoft.graph.webPart", via entity);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardWebPart {
    #[serde(flatten)]
    pub web_part: WebPart,
    pub data: Option<WebPartData>,
    /// Identifier of the web part type, e.g. the image or quick links web part.
    pub web_part_type: Option<String>,
}

model!(StandardWebPart => "#microsoft.graph.standardWebPart", via web_part.entity, stamped);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextWebPart {
    #[serde(flatten)]
    pub web_part: WebPart,
    pub inner_html: Option<String>,
}

model!(TextWebPart => "#microsoft.graph.textWebPart", via web_part.entity, stamped);

family! {
    pub enum WebPartKind {
        Standard(StandardWebPart),
        Text(TextWebPart),
        _ => WebPart(WebPart),
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPartData {
    pub audiences: Option<Vec<String>>,
    pub data_version: Option<String>,
    pub description: Option<String>,
    /// Web part specific settings, kept as untyped JSON.
    pub properties: Option<Json>,
    pub server_processed_content: Option<ServerProcessedContent>,
    pub title: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(WebPartData => "#microsoft.graph.webPartData");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(ContentTypeInfo => "#microsoft.graph.contentTypeInfo");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationFacet {
    pub checked_out_by: Option<IdentitySet>,
    /// The state of publication for this document, either `published` or `checkout`.
    pub level: Option<String>,
    pub version_id: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(PublicationFacet => "#microsoft.graph.publicationFacet");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionsFacet {
    pub comment_count: Option<i32>,
    pub like_count: Option<i32>,
    pub share_count: Option<i32>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(ReactionsFacet => "#microsoft.graph.reactionsFacet");
