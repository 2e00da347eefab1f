use indexmap::IndexMap;
use serde::{de::IgnoredAny, ser::SerializeMap, Serialize};
use std::borrow::Cow;

fn serialize_index_map<K: Serialize, V: Serialize, S: serde::Serializer>(
    map: &IndexMap<K, V>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map_ser = serializer.serialize_map(Some(map.len()))?;
    for (key, value) in map {
        map_ser.serialize_entry(key, value)?;
    }
    map_ser.end()
}

pub struct MessageBuilder(Option<Vec<Cow<'static, str>>>);

// The inner option always holds a value until build() takes it
#[allow(clippy::unwrap_used)]
impl MessageBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self(Some(Vec::new()))
    }

    pub fn insert(&mut self, message: impl Into<Cow<'static, str>>) -> &mut Self {
        self.0.as_mut().unwrap().push(message.into());
        self
    }

    #[must_use]
    pub fn build(&mut self) -> ValidateError {
        ValidateError::Messages(self.0.take().unwrap())
    }
}

pub struct FieldBuilder(Option<IndexMap<Cow<'static, str>, ValidateError>>);

// The inner option always holds a value until build() takes it
#[allow(clippy::new_without_default)]
#[allow(clippy::unwrap_used)]
impl FieldBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(Some(IndexMap::default()))
    }

    pub fn insert(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: ValidateError,
    ) -> &mut Self {
        if !value.is_empty() {
            self.0.as_mut().unwrap().insert(key.into(), value);
        }
        self
    }

    #[must_use]
    pub fn build(&mut self) -> ValidateError {
        ValidateError::Fields(self.0.take().unwrap())
    }
}

// ---------------------------------------------------- //

#[derive(PartialEq, Eq)]
pub enum ValidateError {
    Fields(IndexMap<Cow<'static, str>, ValidateError>),
    Messages(Vec<Cow<'static, str>>),
}

impl std::fmt::Display for ValidateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Invalid data occurred")
    }
}

impl std::error::Error for ValidateError {}

impl std::fmt::Debug for ValidateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidateError::Fields(n) => n.fmt(f),
            ValidateError::Messages(n) => f.debug_map().entry(&"_errors", &n).finish(),
        }
    }
}

impl ValidateError {
    #[must_use]
    pub fn field_builder() -> FieldBuilder {
        FieldBuilder::new()
    }

    #[must_use]
    pub fn msg_builder() -> MessageBuilder {
        MessageBuilder::new()
    }

    #[must_use]
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        MessageBuilder::new().insert(message.into()).build()
    }
}

impl ValidateError {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            ValidateError::Fields(n) => n.is_empty(),
            ValidateError::Messages(n) => n.is_empty(),
        }
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl<'de> serde::Deserialize<'de> for ValidateError {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = ValidateError;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("ValidateError type")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut fields = IndexMap::new();
                let mut messages = None;

                while let Some(key) = map.next_key::<String>()? {
                    if key.as_str() == "_errors" {
                        if messages.is_some() {
                            return Err(serde::de::Error::duplicate_field("_errors"));
                        }
                        messages = Some(map.next_value::<Vec<Cow<'static, str>>>()?);
                        continue;
                    }

                    if messages.is_none() {
                        fields.insert(Cow::Owned(key), map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }

                if let Some(data) = messages {
                    Ok(ValidateError::Messages(data))
                } else if !fields.is_empty() {
                    Ok(ValidateError::Fields(fields))
                } else {
                    Err(serde::de::Error::custom("error fields must not be empty"))
                }
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

impl Serialize for ValidateError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            ValidateError::Fields(n) => serialize_index_map(n, serializer),
            ValidateError::Messages(n) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("_errors", &n)?;
                map.end()
            }
        }
    }
}
