use crate::codec::{self, CodecError};
use crate::models::EntityKind;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

/// What a payload looked like after it went through a read/write/read cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTripReport {
    /// The payload's `@odata.type`, if it had one.
    pub odata_type: Option<String>,
    /// Whether the discriminator resolved to a type of the catalogue rather than falling back to a plain entity.
    pub recognized: bool,
    /// Top level properties the catalogue has no field for. They survive, but only as untyped JSON.
    pub unmapped_properties: Vec<String>,
}

impl RoundTripReport {
    pub fn is_fully_typed(&self) -> bool {
        self.recognized && self.unmapped_properties.is_empty()
    }
}

/// Reads an entity payload, writes it back and reads the result again, failing when the two reads differ.
#[instrument(skip_all)]
pub fn verify_round_trip(json: &str) -> Result<RoundTripReport, VerifyError> {
    let value = serde_json::from_str::<Value>(json).map_err(VerifyError::Json)?;
    if !value.is_object() {
        return Err(VerifyError::NotAnObject);
    }

    let entity = serde_json::from_value::<EntityKind>(value).map_err(VerifyError::Decode)?;
    let odata_type = entity.odata_type().map(str::to_owned);

    let read_back = codec::round_trip(&entity)?;
    if read_back != entity {
        return Err(VerifyError::Mismatch { odata_type });
    }

    let mut unmapped_properties = entity.additional_data().keys().cloned().collect::<Vec<_>>();
    unmapped_properties.sort();

    debug!(odata_type = odata_type.as_deref(), unmapped = unmapped_properties.len(), "round trip succeeded");
    Ok(RoundTripReport {
        odata_type,
        recognized: !entity.is_base(),
        unmapped_properties,
    })
}

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("invalid json: {0}")]
    Json(#[source] serde_json::Error),
    #[error("payload is not a json object")]
    NotAnObject,
    #[error("payload does not match its schema: {0}")]
    Decode(#[source] serde_json::Error),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("payload of type '{}' changed after a round trip", odata_type.as_deref().unwrap_or("unknown"))]
    Mismatch { odata_type: Option<String> },
}
