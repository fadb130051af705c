mod encode;
mod tag;


use crate::types::Float64;
use serde::{Deserialize, Serialize};

// re-exports
pub(crate) use encode::encode_canonical;
pub(crate) use tag::ValueTag;

///
/// Value
///
/// Self-describing dynamic value for collection items and resolved fields.
///
/// Null → the field is absent or explicitly null. Absence is a value here:
/// it participates in composite-key equality like any other variant.
/// Map entries preserve insertion order; lookup is by first matching key.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Float64(Float64),
    Int(i64),
    List(Vec<Self>),
    Map(Vec<(String, Self)>),
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::Map` from owned key/value entries.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Build a `Value::List` from owned items.
    pub fn list<T: Into<Self>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a `Value::Blob` from owned bytes.
    pub fn blob(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Blob(bytes.into())
    }

    ///
    /// TYPES
    ///

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_) | Self::Map(_))
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.canonical_tag().label()
    }

    /// Stable canonical variant tag used by the key-encoding surface.
    #[must_use]
    pub(crate) const fn canonical_tag(&self) -> ValueTag {
        tag::canonical_tag(self)
    }

    ///
    /// ACCESS
    ///

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(items) = self {
            Some(items.as_slice())
        } else {
            None
        }
    }

    /// Look up a map entry by key. Returns `None` for non-map values.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        if let Self::Map(entries) = self {
            entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
        } else {
            None
        }
    }

    /// Look up a list entry by position. Returns `None` for non-list values.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Self> {
        if let Self::List(items) = self {
            items.get(index)
        } else {
            None
        }
    }
}

macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool    => Bool,
    f32     => Float64,
    f64     => Float64,
    Float64 => Float64,
    i8      => Int,
    i16     => Int,
    i32     => Int,
    i64     => Int,
    &str    => Text,
    String  => Text,
    u8      => Uint,
    u16     => Uint,
    u32     => Uint,
    u64     => Uint,
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}
