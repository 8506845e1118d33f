use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// A flagged enum value: a set of members written on the wire as one comma separated string, e.g. `"lan,wireless"`.
///
/// Members keep the order they were read in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flags<T>(Vec<T>);

impl<T> Flags<T> {
    pub fn new(members: Vec<T>) -> Self {
        Flags(members)
    }

    pub fn members(&self) -> &[T] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T: PartialEq> Flags<T> {
    pub fn contains(&self, member: &T) -> bool {
        self.0.contains(member)
    }

    pub fn insert(&mut self, member: T) {
        if !self.contains(&member) {
            self.0.push(member);
        }
    }
}

impl<T> Default for Flags<T> {
    fn default() -> Self {
        Flags(Vec::new())
    }
}

impl<T> From<Vec<T>> for Flags<T> {
    fn from(members: Vec<T>) -> Self {
        Flags(members)
    }
}

impl<T> FromIterator<T> for Flags<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Flags(iter.into_iter().collect())
    }
}

impl<T: Display> Display for Flags<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, member) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", member)?;
        }
        Ok(())
    }
}

impl<T: FromStr> FromStr for Flags<T> {
    type Err = FlagsParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .split(',')
            .map(str::trim)
            .filter(|member| !member.is_empty())
            .map(|member| {
                member.parse().map_err(|_| FlagsParseError {
                    member: member.to_owned(),
                })
            })
            .collect()
    }
}

impl<T: Display> Serialize for Flags<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, T: FromStr> Deserialize<'de> for Flags<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(Error::custom)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown flag member '{member}'")]
pub struct FlagsParseError {
    member: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;
    use strum::{Display, EnumString};

    #[derive(Debug, Clone, Copy, PartialEq, Display, EnumString)]
    #[strum(serialize_all = "camelCase")]
    enum InterfaceType {
        NotConfigured,
        RemoteAccess,
        Wireless,
        Lan,
    }

    #[rstest]
    #[case::single("lan", vec![InterfaceType::Lan])]
    #[case::multiple("remoteAccess,wireless", vec![InterfaceType::RemoteAccess, InterfaceType::Wireless])]
    #[case::spaces_around_members("lan, wireless", vec![InterfaceType::Lan, InterfaceType::Wireless])]
    #[case::empty("", vec![])]
    fn parses_comma_separated_members(#[case] value: &str, #[case] expected: Vec<InterfaceType>) {
        assert_eq!(value.parse::<Flags<InterfaceType>>(), Ok(Flags::new(expected)));
    }

    #[test]
    fn rejects_an_unknown_member() {
        let result = "lan,bluetooth".parse::<Flags<InterfaceType>>();
        assert_eq!(result, Err(FlagsParseError { member: "bluetooth".to_string() }));
    }

    #[test]
    fn serializes_as_a_single_string_in_read_order() {
        let flags = Flags::new(vec![InterfaceType::Wireless, InterfaceType::NotConfigured]);
        assert_eq!(serde_json::to_value(&flags).unwrap(), json!("wireless,notConfigured"));
    }

    #[test]
    fn insert_ignores_members_already_present() {
        let mut flags = Flags::new(vec![InterfaceType::Lan]);
        flags.insert(InterfaceType::Lan);
        flags.insert(InterfaceType::Wireless);

        assert_eq!(flags.members(), &[InterfaceType::Lan, InterfaceType::Wireless]);
    }

    #[test]
    fn deserialization_fails_for_an_unknown_member() {
        let result = serde_json::from_value::<Flags<InterfaceType>>(json!("lan,bluetooth"));
        assert!(result.is_err());
    }
}
