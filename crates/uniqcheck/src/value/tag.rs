use crate::value::Value;

///
/// ValueTag
///
/// Stable canonical value-variant tag used by the key-encoding surface.
///
/// IMPORTANT:
/// Tag values participate in composite-key equality and must remain fixed;
/// two values with different tags can never canonicalize to the same key.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueTag {
    Blob = 1,
    Bool = 2,
    Float64 = 3,
    Int = 4,
    List = 5,
    Map = 6,
    Null = 7,
    Text = 8,
    Uint = 9,
}

impl ValueTag {
    /// Stable hash/encoding byte tag for this variant.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blob => "Blob",
            Self::Bool => "Bool",
            Self::Float64 => "Float64",
            Self::Int => "Int",
            Self::List => "List",
            Self::Map => "Map",
            Self::Null => "Null",
            Self::Text => "Text",
            Self::Uint => "Uint",
        }
    }
}

/// Stable canonical variant tag used by the key-encoding surface.
#[must_use]
pub(super) const fn canonical_tag(value: &Value) -> ValueTag {
    match value {
        Value::Blob(_) => ValueTag::Blob,
        Value::Bool(_) => ValueTag::Bool,
        Value::Float64(_) => ValueTag::Float64,
        Value::Int(_) => ValueTag::Int,
        Value::List(_) => ValueTag::List,
        Value::Map(_) => ValueTag::Map,
        Value::Null => ValueTag::Null,
        Value::Text(_) => ValueTag::Text,
        Value::Uint(_) => ValueTag::Uint,
    }
}
