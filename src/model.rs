use crate::serialization::AdditionalData;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A resource or complex type of the Graph beta schema.
///
/// Every model owns an `@odata.type` tag and a bag of properties the schema did not describe, either directly or through the
/// parent it embeds.
pub trait Model: Serialize + DeserializeOwned {
    /// The `@odata.type` literal identifying this shape on the wire.
    const ODATA_TYPE: &'static str;

    fn odata_type(&self) -> Option<&str>;

    fn additional_data(&self) -> &AdditionalData;

    fn additional_data_mut(&mut self) -> &mut AdditionalData;
}

/// Implements [`Model`] and `new()` for a model struct.
///
/// `via a.b` names the path to the embedded root that owns `odata_type` and `additional_data`. `stamped` makes `new()` set the
/// discriminator, which derived members of a polymorphic family do so the server can tell them apart.
macro_rules! model {
    ($ty:ident => $odata_type:literal) => {
        model!(@model $ty, $odata_type, []);
        model!(@new $ty);
    };
    ($ty:ident => $odata_type:literal, stamped) => {
        model!(@model $ty, $odata_type, []);
        model!(@stamped $ty, []);
    };
    ($ty:ident => $odata_type:literal, via $($path:ident).+) => {
        model!(@model $ty, $odata_type, [$($path)+]);
        model!(@new $ty);
    };
    ($ty:ident => $odata_type:literal, via $($path:ident).+, stamped) => {
        model!(@model $ty, $odata_type, [$($path)+]);
        model!(@stamped $ty, [$($path)+]);
    };
    (@model $ty:ident, $odata_type:literal, [$($path:ident)*]) => {
        impl $crate::model::Model for $ty {
            const ODATA_TYPE: &'static str = $odata_type;

            fn odata_type(&self) -> Option<&str> {
                self$(.$path)*.odata_type.as_deref()
            }

            fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                &self$(.$path)*.additional_data
            }

            fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                &mut self$(.$path)*.additional_data
            }
        }
    };
    (@new $ty:ident) => {
        impl $ty {
            pub fn new() -> Self {
                Self::default()
            }
        }
    };
    (@stamped $ty:ident, [$($path:ident)*]) => {
        impl $ty {
            pub fn new() -> Self {
                let mut model = Self::default();
                model$(.$path)*.odata_type = Some(<Self as $crate::model::Model>::ODATA_TYPE.to_owned());
                model
            }
        }
    };
}

/// Declares a polymorphic family: an enum over the concrete types sharing a base, dispatched on `@odata.type` when read.
///
/// The arm after `_ =>` is the base type. Payloads whose discriminator is missing or names no member of the family become the
/// base type, so types added to the service later still deserialize.
macro_rules! family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident($ty:ty),)*
            _ => $base:ident($base_ty:ty) $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        #[serde(untagged)]
        $vis enum $name {
            $($variant($ty),)*
            $base($base_ty),
        }

        impl $name {
            /// Discriminators this family resolves to a concrete type other than the base.
            pub const KNOWN_TYPES: &'static [&'static str] = &[$(<$ty as $crate::model::Model>::ODATA_TYPE,)*];

            pub fn odata_type(&self) -> Option<&str> {
                match self {
                    $(Self::$variant(model) => $crate::model::Model::odata_type(model),)*
                    Self::$base(model) => $crate::model::Model::odata_type(model),
                }
            }

            pub fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                match self {
                    $(Self::$variant(model) => $crate::model::Model::additional_data(model),)*
                    Self::$base(model) => $crate::model::Model::additional_data(model),
                }
            }

            /// Whether the payload was resolved to the base type rather than one of the family members.
            pub fn is_base(&self) -> bool {
                matches!(self, Self::$base(_))
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(model: $ty) -> Self {
                    Self::$variant(model)
                }
            }
        )*

        impl From<$base_ty> for $name {
            fn from(model: $base_ty) -> Self {
                Self::$base(model)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                let odata_type = $crate::serialization::discriminator(&value).map(str::to_owned);

                match odata_type.as_deref() {
                    $(
                        Some(kind) if kind == <$ty as $crate::model::Model>::ODATA_TYPE => {
                            $crate::serialization::from_value(value).map(Self::$variant)
                        }
                    )*
                    kind => {
                        if let Some(kind) = kind.filter(|kind| *kind != <$base_ty as $crate::model::Model>::ODATA_TYPE) {
                            ::tracing::debug!(odata_type = kind, family = stringify!($name), "unknown discriminator, falling back to the base type");
                        }
                        $crate::serialization::from_value(value).map(Self::$base)
                    }
                }
            }
        }
    };
}
