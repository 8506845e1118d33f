use crate::serialization::{AdditionalData, Flags};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{Display, EnumString};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClassificationMethod {
    PatternMatch,
    ExactDataMatch,
    Fingerprint,
    MachineLearning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum SensitiveTypeScope {
    FullDocument,
    PartialDocument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SensitiveTypeSource {
    OutOfBox,
    Tenant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MlClassificationMatchTolerance {
    Exact,
    Near,
}

/// A sensitive information type found in a piece of content.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedSensitiveContentBase {
    pub confidence: Option<i32>,
    pub display_name: Option<String>,
    pub id: Option<Uuid>,
    pub recommended_confidence: Option<i32>,
    pub unique_count: Option<i32>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(DetectedSensitiveContentBase => "#microsoft.graph.detectedSensitiveContentBase");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedSensitiveContent {
    #[serde(flatten)]
    pub detected_sensitive_content_base: DetectedSensitiveContentBase,
    pub classification_attributes: Option<Vec<ClassificationAttribute>>,
    pub classification_method: Option<ClassificationMethod>,
    pub matches: Option<Vec<SensitiveContentLocation>>,
    pub scope: Option<Flags<SensitiveTypeScope>>,
    pub sensitive_type_source: Option<SensitiveTypeSource>,
}

model!(
    DetectedSensitiveContent => "#microsoft.graph.detectedSensitiveContent",
    via detected_sensitive_content_base,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineLearningDetectedSensitiveContent {
    #[serde(flatten)]
    pub detected_sensitive_content: DetectedSensitiveContent,
    pub match_tolerance: Option<MlClassificationMatchTolerance>,
    pub model_version: Option<String>,
}

model!(
    MachineLearningDetectedSensitiveContent => "#microsoft.graph.machineLearningDetectedSensitiveContent",
    via detected_sensitive_content.detected_sensitive_content_base,
    stamped
);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExactMatchDetectedSensitiveContent {
    #[serde(flatten)]
    pub detected_sensitive_content_base: DetectedSensitiveContentBase,
    pub matches: Option<Vec<SensitiveContentLocation>>,
}

model!(
    ExactMatchDetectedSensitiveContent => "#microsoft.graph.exactMatchDetectedSensitiveContent",
    via detected_sensitive_content_base,
    stamped
);

family! {
    /// Sensitive-content detectors.
    pub enum DetectedSensitiveContentKind {
        Detected(DetectedSensitiveContent),
        MachineLearning(MachineLearningDetectedSensitiveContent),
        ExactMatch(ExactMatchDetectedSensitiveContent),
        _ => Base(DetectedSensitiveContentBase),
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitiveContentLocation {
    pub confidence: Option<i32>,
    pub evidences: Option<Vec<SensitiveContentEvidence>>,
    pub id_match: Option<String>,
    pub length: Option<i32>,
    pub offset: Option<i32>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(SensitiveContentLocation => "#microsoft.graph.sensitiveContentLocation");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitiveContentEvidence {
    pub length: Option<i32>,
    /// The matched text.
    pub r#match: Option<String>,
    pub offset: Option<i32>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(SensitiveContentEvidence => "#microsoft.graph.sensitiveContentEvidence");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationAttribute {
    pub confidence: Option<i32>,
    pub count: Option<i32>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

model!(ClassificationAttribute => "#microsoft.graph.classificationAttribute");
