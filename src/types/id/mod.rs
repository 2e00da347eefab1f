use serde::de::{Error as DeError, Unexpected};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    marker::PhantomData,
    num::NonZeroU64,
};

use self::marker::Marker;

pub mod marker;

/// Store-assigned identifier branded with the entity it names.
///
/// Identifiers are positive integers; zero is never issued and is
/// rejected at the boundary.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Id<T: Marker> {
    value: NonZeroU64,
    phantom: PhantomData<T>,
}

impl<T: Marker> Id<T> {
    /// # Panics
    ///
    /// It will panic if the value is 0.
    #[must_use]
    #[track_caller]
    pub const fn new(n: u64) -> Self {
        if let Some(id) = Self::new_checked(n) {
            id
        } else {
            panic!("value is zero")
        }
    }

    /// Creates an ID from a [`NonZeroU64`] value.
    #[must_use]
    pub const fn from_nonzero(n: NonZeroU64) -> Self {
        Self {
            value: n,
            phantom: PhantomData,
        }
    }

    #[must_use]
    pub const fn new_checked(n: u64) -> Option<Self> {
        if let Some(n) = NonZeroU64::new(n) {
            Some(Self::from_nonzero(n))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.value.get()
    }

    #[must_use]
    pub const fn into_nonzero(self) -> NonZeroU64 {
        self.value
    }
}

impl<T: Marker> Debug for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let type_name = std::any::type_name::<T>();
        let type_name = type_name.rsplit("::").next().unwrap_or(type_name);
        write!(f, "Id::<{type_name}>({})", self.value.get())
    }
}

impl<T: Marker> Display for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.value.get(), f)
    }
}

impl<T: Marker> Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.value.get());
    }
}

impl<'de, T: Marker> serde::Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor<T: Marker>(PhantomData<T>);

        impl<'de, T: Marker> serde::de::Visitor<'de> for Visitor<T> {
            type Value = Id<T>;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a positive integer id")
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: DeError,
            {
                let value = u64::try_from(v)
                    .map_err(|_| DeError::invalid_value(Unexpected::Signed(v), &"nonzero u64"))?;

                self.visit_u64(value)
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: DeError,
            {
                let value = NonZeroU64::new(v)
                    .ok_or_else(|| DeError::invalid_value(Unexpected::Unsigned(v), &"nonzero u64"))?;

                Ok(Id::<T>::from_nonzero(value))
            }

            // Route path segments arrive as strings
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: DeError,
            {
                let value = v.parse().map_err(|_| {
                    let unexpected = Unexpected::Str(v);
                    DeError::invalid_value(unexpected, &"nonzero u64 string")
                })?;

                self.visit_u64(value)
            }
        }

        deserializer.deserialize_any(Visitor(PhantomData))
    }
}

impl<T: Marker> serde::Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.value.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::id::marker::AnyMarker;
    use serde_test::Token;
    use static_assertions::{assert_eq_size, assert_impl_all};

    assert_eq_size!(Id<AnyMarker>, u64);
    assert_impl_all!(Id<AnyMarker>: Debug, Display, Clone, Copy, Send, Sync, Hash, Ord);

    #[test]
    #[should_panic(expected = "value is zero")]
    fn test_new_with_zero() {
        _ = Id::<AnyMarker>::new(0);
    }

    #[test]
    fn test_initializers() {
        assert!(Id::<AnyMarker>::new_checked(0).is_none());
        assert_eq!(Some(1), Id::<AnyMarker>::new_checked(1).map(Id::get));
    }

    #[test]
    fn test_fmt_display_impl() {
        assert_eq!("1234567890", Id::<AnyMarker>::new(1234567890).to_string());
    }

    #[test]
    fn test_fmt_debug_impl() {
        assert_eq!(
            "Id::<AnyMarker>(1234567890)",
            format!("{:?}", Id::<AnyMarker>::new(1234567890))
        );
    }

    #[test]
    fn test_serde_impl() {
        let id = Id::<AnyMarker>::new(1234567890);
        serde_test::assert_de_tokens(&id, &[Token::U64(1234567890)]);
        serde_test::assert_de_tokens(&id, &[Token::Str("1234567890")]);
        serde_test::assert_de_tokens(&id, &[Token::I64(1234567890)]);
        serde_test::assert_ser_tokens(&id, &[Token::U64(1234567890)]);
    }
}
