//! Numbers supplied by callers that may not be valid.
//!
//! Catalog data is produced outside the carousel, so a price or rating can be
//! missing, a string, `null` or a non-finite float. These wrappers keep that
//! distinction explicit instead of failing deserialization: anything that is
//! not a finite number becomes the invalid state.

macro_rules! lenient_number {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name(Option<f64>);

        impl $name {
            /// Wrap a raw value. Non-finite values are stored as invalid.
            pub fn new(value: f64) -> Self {
                Self::from_raw(Some(value))
            }

            pub fn invalid() -> Self {
                Self(None)
            }

            pub fn from_raw(value: Option<f64>) -> Self {
                Self(value.filter(|v| v.is_finite()))
            }

            /// The finite value, if any.
            pub fn value(&self) -> Option<f64> {
                self.0
            }

            pub fn is_valid(&self) -> bool {
                self.0.is_some()
            }
        }

        impl From<f64> for $name {
            fn from(value: f64) -> Self {
                Self::new(value)
            }
        }

        impl From<Option<f64>> for $name {
            fn from(value: Option<f64>) -> Self {
                Self::from_raw(value)
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                match self.0 {
                    Some(value) => serializer.serialize_f64(value),
                    None => serializer.serialize_none(),
                }
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                lenient::deserialize(deserializer).map(Self::from_raw)
            }
        }
    };
}

lenient_number!(
    /// Product price in currency units.
    Price
);

lenient_number!(
    /// Average review rating.
    Rating
);

#[cfg(feature = "serde")]
mod lenient {
    use serde::{Deserialize, Deserializer, de::IgnoredAny};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Other(IgnoredAny),
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Some(value),
            Raw::Other(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_values_are_invalid() {
        assert!(!Price::new(f64::NAN).is_valid());
        assert!(!Price::new(f64::INFINITY).is_valid());
        assert!(!Rating::from_raw(None).is_valid());
        assert_eq!(Price::new(19.5).value(), Some(19.5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_anything_without_failing() {
        let price: Price = serde_json::from_str("349.95").unwrap();
        assert_eq!(price.value(), Some(349.95));

        let whole: Price = serde_json::from_str("12").unwrap();
        assert_eq!(whole.value(), Some(12.0));

        let text: Price = serde_json::from_str("\"bad\"").unwrap();
        assert!(!text.is_valid());

        let null: Rating = serde_json::from_str("null").unwrap();
        assert!(!null.is_valid());

        let object: Rating = serde_json::from_str("{\"stars\": 4}").unwrap();
        assert!(!object.is_valid());
    }
}
