mod discriminator;
mod flags;
mod iso_duration;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

pub use discriminator::{ODATA_TYPE_KEY, discriminator, from_value};
pub use flags::{Flags, FlagsParseError};
pub use iso_duration::{DurationParseError, DurationParseReason, IsoDuration};

/// Properties found on the wire that the schema did not describe at generation time.
pub type AdditionalData = serde_json::Map<String, serde_json::Value>;

/// Untyped JSON property (`Edm.Json` / `microsoft.graph.Json`).
pub type Json = serde_json::Value;

/// `Edm.DateTimeOffset`.
pub type Timestamp = DateTime<Utc>;

/// `Edm.Date`, written as `2024-03-01`.
pub type DateOnly = NaiveDate;

/// `Edm.TimeOfDay`. Graph writes seven fractional digits (`08:00:00.0000000`), any precision is read and the value is written
/// back without trailing zero fractions.
pub type TimeOnly = NaiveTime;
