use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Writes a model as JSON bytes, the form it is stored in.
pub fn serialize<T: Serialize>(model: &T) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(model).map_err(CodecError::Serialization)
}

pub fn deserialize<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(CodecError::Empty);
    }
    serde_json::from_slice(bytes).map_err(CodecError::Deserialization)
}

/// Serializes and deserializes again, yielding the model as a reader of the stored bytes would see it.
pub fn round_trip<T: Serialize + DeserializeOwned>(model: &T) -> Result<T, CodecError> {
    deserialize(&serialize(model)?)
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("nothing to deserialize")]
    Empty,
    #[error("json serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("json deserialization error: {0}")]
    Deserialization(#[source] serde_json::Error),
}
