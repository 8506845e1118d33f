use crate::models::{Entity, IdentitySet};
use crate::serialization::{AdditionalData, Timestamp};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnswerState {
    Published,
    Draft,
    Excluded,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DevicePlatformType {
    Android,
    AndroidForWork,
    Ios,
    #[serde(rename = "macOS")]
    MacOs,
    WindowsPhone81,
    Windows81AndLater,
    Windows10AndLater,
    AndroidWorkProfile,
    Unknown,
    #[serde(rename = "androidASOP")]
    AndroidAsop,
    AndroidMobileApplicationManagement,
    #[serde(rename = "iOSMobileApplicationManagement")]
    IosMobileApplicationManagement,
    UnknownFutureValue,
}

/// A promoted search result.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnswer {
    #[serde(flatten)]
    pub entity: Entity,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub last_modified_by: Option<IdentitySet>,
    pub last_modified_date_time: Option<Timestamp>,
    pub web_url: Option<String>,
}

model!(SearchAnswer => "#microsoft.graph.search.searchAnswer", via entity);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    #[serde(flatten)]
    pub search_answer: SearchAnswer,
    pub availability_end_date_time: Option<Timestamp>,
    pub availability_start_date_time: Option<Timestamp>,
    pub categories: Option<Vec<String>>,
    pub group_ids: Option<Vec<String>>,
    pub is_suggested: Option<bool>,
    pub keywords: Option<AnswerKeyword>,
    pub language_tags: Option<Vec<String>>,
    pub platforms: Option<Vec<DevicePlatformType>>,
    pub power_app_ids: Option<Vec<String>>,
    pub state: Option<AnswerState>,
    pub targeted_variations: Option<Vec<AnswerVariant>>,
}

model!(Bookmark => "#microsoft.graph.search.bookmark", via search_answer.entity, stamped);

/// A question and its answer, shown on top of the results for matching queries.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qna {
    #[serde(flatten)]
    pub search_answer: SearchAnswer,
    pub availability_end_date_time: Option<Timestamp>,
    pub availability_start_date_time: Option<Timestamp>,
    pub group_ids: Option<Vec<String>>,
    pub is_suggested: Option<bool>,
    pub keywords: Option<AnswerKeyword>,
    pub language_tags: Option<Vec<String>>,
    pub platforms: Option<Vec<DevicePlatformType>>,
    pub state: Option<AnswerState>,
    pub targeted_variations: Option<Vec<AnswerVariant>>,
}

model!(Qna => "#microsoft.graph.search.qna", via search_answer.entity, stamped);

family! {
    pub enum SearchAnswerKind {
        Bookmark(Bookmark),
        Qna(Qna),
        _ => SearchAnswer(SearchAnswer),
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerKeyword {
    pub keywords: Option<Vec<String>>,
    pub match_similar_keywords: Option<bool>,
    /// Keywords that trigger this answer only.
    pub reserved_keywords: Option<Vec<String>>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(AnswerKeyword => "#microsoft.graph.search.answerKeyword");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerVariant {
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub language_tag: Option<String>,
    pub platform: Option<DevicePlatformType>,
    pub web_url: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(AnswerVariant => "#microsoft.graph.search.answerVariant");
