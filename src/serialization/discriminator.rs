use serde::de::{DeserializeOwned, Error};
use serde_json::Value;

pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Reads the `@odata.type` tag of a JSON object, if it is present and a string.
pub fn discriminator(value: &Value) -> Option<&str> {
    value.get(ODATA_TYPE_KEY).and_then(Value::as_str)
}

/// Deserializes an already buffered JSON value into `T`, reporting failures through the caller's error type.
pub fn from_value<T, E>(value: Value) -> Result<T, E>
where
    T: DeserializeOwned,
    E: Error,
{
    T::deserialize(value).map_err(E::custom)
}
