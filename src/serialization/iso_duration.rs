use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

const DATE_DESIGNATORS: [char; 4] = ['Y', 'M', 'W', 'D'];
const TIME_DESIGNATORS: [char; 3] = ['H', 'M', 'S'];

/// An ISO 8601 duration (`Edm.Duration`), e.g. `P1DT12H` or `PT30.5S`.
///
/// Components are kept as written so that a value survives a read/write cycle unchanged, `PT36H` stays `PT36H`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IsoDuration {
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl IsoDuration {
    /// Returns `None` when the day count does not fit the `days` component.
    pub fn from_std(duration: Duration) -> Option<Self> {
        let total = duration.as_secs();
        let remainder = total % SECONDS_PER_DAY;

        Some(IsoDuration {
            days: u32::try_from(total / SECONDS_PER_DAY).ok()?,
            hours: (remainder / SECONDS_PER_HOUR) as u32,
            minutes: (remainder % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u32,
            seconds: (remainder % SECONDS_PER_MINUTE) as f64 + f64::from(duration.subsec_nanos()) / 1e9,
            ..Default::default()
        })
    }

    /// Returns `None` for negative durations and for durations with year or month components, as those have no fixed length.
    pub fn to_std(&self) -> Option<Duration> {
        if self.negative || self.years != 0 || self.months != 0 {
            return None;
        }

        let days = u64::from(self.weeks) * 7 + u64::from(self.days);
        let whole_seconds = days * SECONDS_PER_DAY + u64::from(self.hours) * SECONDS_PER_HOUR + u64::from(self.minutes) * SECONDS_PER_MINUTE;
        let seconds = Duration::try_from_secs_f64(self.seconds).ok()?;
        Duration::from_secs(whole_seconds).checked_add(seconds)
    }

    fn has_date(&self) -> bool {
        self.years != 0 || self.months != 0 || self.weeks != 0 || self.days != 0
    }

    fn has_time(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0.0
    }
}

impl Display for IsoDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;

        for (value, designator) in [(self.years, 'Y'), (self.months, 'M'), (self.weeks, 'W'), (self.days, 'D')] {
            if value != 0 {
                write!(f, "{}{}", value, designator)?;
            }
        }

        if self.has_time() || !self.has_date() {
            f.write_str("T")?;
            if self.hours != 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes != 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds != 0.0 || (self.hours == 0 && self.minutes == 0) {
                write!(f, "{}S", self.seconds)?;
            }
        }

        Ok(())
    }
}

impl FromStr for IsoDuration {
    type Err = DurationParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| DurationParseError {
            input: value.to_owned(),
            reason,
        };

        let (negative, rest) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value),
        };
        let rest = rest.strip_prefix('P').ok_or_else(|| invalid(DurationParseReason::MissingPeriodDesignator))?;

        let (date, time) = match rest.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (rest, None),
        };
        if time == Some("") {
            return Err(invalid(DurationParseReason::EmptyTimePart));
        }
        if date.is_empty() && time.is_none() {
            return Err(invalid(DurationParseReason::NoComponents));
        }

        let mut duration = IsoDuration {
            negative,
            ..Default::default()
        };

        for (number, designator) in ordered_components(date, &DATE_DESIGNATORS).map_err(invalid)? {
            let number = parse_integer(number).map_err(invalid)?;
            match designator {
                'Y' => duration.years = number,
                'M' => duration.months = number,
                'W' => duration.weeks = number,
                _ => duration.days = number,
            }
        }

        for (number, designator) in ordered_components(time.unwrap_or_default(), &TIME_DESIGNATORS).map_err(invalid)? {
            match designator {
                'H' => duration.hours = parse_integer(number).map_err(invalid)?,
                'M' => duration.minutes = parse_integer(number).map_err(invalid)?,
                _ => duration.seconds = parse_seconds(number).map_err(invalid)?,
            }
        }

        Ok(duration)
    }
}

/// Splits `12H30M` into `[("12", 'H'), ("30", 'M')]`, enforcing that designators appear at most once and in `allowed` order.
fn ordered_components<'a>(part: &'a str, allowed: &[char]) -> Result<Vec<(&'a str, char)>, DurationParseReason> {
    let mut components = Vec::new();
    let mut start = 0;
    let mut next_allowed = 0;

    for (index, c) in part.char_indices() {
        if !c.is_ascii_alphabetic() {
            continue;
        }

        let position = allowed
            .iter()
            .position(|designator| *designator == c)
            .ok_or(DurationParseReason::UnexpectedDesignator(c))?;
        if position < next_allowed {
            return Err(DurationParseReason::UnexpectedDesignator(c));
        }

        let number = &part[start..index];
        if number.is_empty() {
            return Err(DurationParseReason::MissingNumber(c));
        }

        components.push((number, c));
        next_allowed = position + 1;
        start = index + c.len_utf8();
    }

    if start < part.len() {
        return Err(DurationParseReason::MissingDesignator(part[start..].to_owned()));
    }

    Ok(components)
}

fn parse_integer(number: &str) -> Result<u32, DurationParseReason> {
    if !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(DurationParseReason::InvalidNumber(number.to_owned()));
    }
    number.parse().map_err(|_| DurationParseReason::InvalidNumber(number.to_owned()))
}

fn parse_seconds(number: &str) -> Result<f64, DurationParseReason> {
    let digits = number.chars().filter(|c| c.is_ascii_digit()).count();
    let separators = number.chars().filter(|c| *c == '.' || *c == ',').count();
    if digits == 0 || separators > 1 || digits + separators != number.chars().count() {
        return Err(DurationParseReason::InvalidNumber(number.to_owned()));
    }
    number
        .replace(',', ".")
        .parse()
        .map_err(|_| DurationParseReason::InvalidNumber(number.to_owned()))
}

impl Serialize for IsoDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IsoDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(Error::custom)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("'{input}' is not an ISO 8601 duration: {reason}")]
pub struct DurationParseError {
    input: String,
    reason: DurationParseReason,
}

impl DurationParseError {
    pub fn reason(&self) -> &DurationParseReason {
        &self.reason
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DurationParseReason {
    #[error("expected it to start with 'P'")]
    MissingPeriodDesignator,
    #[error("it has no components")]
    NoComponents,
    #[error("the time part after 'T' is empty")]
    EmptyTimePart,
    #[error("designator '{0}' has no value")]
    MissingNumber(char),
    #[error("'{0}' is not followed by a designator")]
    MissingDesignator(String),
    #[error("unexpected designator '{0}'")]
    UnexpectedDesignator(char),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}
