use crate::{traits::Record, value::Value};
use std::fmt;
use thiserror::Error as ThisError;

///
/// PathParseError
///
/// Malformed field-path strings are rejected at rule construction time,
/// so checking never sees an unparseable path.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PathParseError {
    #[error("field path cannot be empty")]
    Empty,

    #[error("field path '{path}' contains an empty segment")]
    EmptySegment { path: String },

    #[error("field path '{path}' has unbalanced brackets")]
    UnbalancedBracket { path: String },
}

///
/// PathSegment
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, "{name}"),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

///
/// FieldPath
///
/// Parsed field path denoting how to reach a value inside an item.
///
/// Accepted forms:
/// - dot-chained: `customer.email`
/// - bracketed:   `[customer][email]`, `[0]`
/// - mixed:       `items[0].name`
///
/// Bracketed all-digit segments index lists; every other segment is a
/// named field. Dotted segments are always named fields, even if numeric.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FieldPath {
    raw: String,
    segments: Vec<PathSegment>,
}

impl FieldPath {
    pub fn parse(input: &str) -> Result<Self, PathParseError> {
        if input.is_empty() {
            return Err(PathParseError::Empty);
        }

        let empty_segment = || PathParseError::EmptySegment {
            path: input.to_string(),
        };
        let unbalanced = || PathParseError::UnbalancedBracket {
            path: input.to_string(),
        };

        let bytes = input.as_bytes();
        let mut segments = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'[' => {
                    let rest = &input[i + 1..];
                    let Some(end) = rest.find(']') else {
                        return Err(unbalanced());
                    };

                    let inner = &rest[..end];
                    if inner.is_empty() {
                        return Err(empty_segment());
                    }
                    if inner.contains('[') {
                        return Err(unbalanced());
                    }

                    segments.push(bracket_segment(inner));
                    i += end + 2;
                }
                b'.' => return Err(empty_segment()),
                b']' => return Err(unbalanced()),
                _ => {
                    let start = i;
                    while i < bytes.len() && !matches!(bytes[i], b'.' | b'[' | b']') {
                        i += 1;
                    }
                    if i < bytes.len() && bytes[i] == b']' {
                        return Err(unbalanced());
                    }

                    segments.push(PathSegment::Field(input[start..i].to_string()));
                }
            }

            // A dot separator must be followed by a dotted segment.
            if i < bytes.len() && bytes[i] == b'.' {
                i += 1;
                if i == bytes.len() || bytes[i] == b'[' {
                    return Err(empty_segment());
                }
            }
        }

        Ok(Self {
            raw: input.to_string(),
            segments,
        })
    }

    /// The original path string as supplied by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Resolve this path against an item.
    ///
    /// Any miss (absent key, out-of-range index, scalar intermediate)
    /// yields `Value::Null`; resolution never fails.
    #[must_use]
    pub fn resolve(&self, item: &Value) -> Value {
        let mut current = item;

        for segment in &self.segments {
            let next = match segment {
                PathSegment::Field(name) => current.get(name),
                PathSegment::Index(index) => current.at(*index),
            };

            match next {
                Some(value) => current = value,
                None => return Value::Null,
            }
        }

        current.clone()
    }

    /// Resolve this path against a record-capable item.
    ///
    /// The first segment resolves through [`Record::field`]; deeper
    /// segments resolve through the returned value. Records are
    /// name-addressed, so an index-first path yields `Value::Null`.
    #[must_use]
    pub fn resolve_record<R: Record + ?Sized>(&self, item: &R) -> Value {
        let Some((head, rest)) = self.segments.split_first() else {
            return Value::Null;
        };

        let current = match head {
            PathSegment::Field(name) => item.field(name).unwrap_or(Value::Null),
            PathSegment::Index(_) => Value::Null,
        };

        if rest.is_empty() {
            return current;
        }

        let tail = Self {
            raw: String::new(),
            segments: rest.to_vec(),
        };
        tail.resolve(&current)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

fn bracket_segment(inner: &str) -> PathSegment {
    if inner.bytes().all(|b| b.is_ascii_digit())
        && let Ok(index) = inner.parse::<usize>()
    {
        return PathSegment::Index(index);
    }

    PathSegment::Field(inner.to_string())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(path: &FieldPath) -> Vec<String> {
        path.segments()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn parses_dot_chained_paths() {
        let path = FieldPath::parse("customer.email").unwrap();
        assert_eq!(fields(&path), vec!["customer", "email"]);
    }

    #[test]
    fn parses_bracketed_paths() {
        let path = FieldPath::parse("[customer][email]").unwrap();
        assert_eq!(fields(&path), vec!["customer", "email"]);
    }

    #[test]
    fn parses_mixed_paths_with_indexes() {
        let path = FieldPath::parse("items[0].name").unwrap();
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Field("items".to_string()),
                PathSegment::Index(0),
                PathSegment::Field("name".to_string()),
            ]
        );
    }

    #[test]
    fn dotted_numeric_segments_are_fields() {
        let path = FieldPath::parse("a.0").unwrap();
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Field("a".to_string()),
                PathSegment::Field("0".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_empty_path() {
        assert_eq!(FieldPath::parse(""), Err(PathParseError::Empty));
    }

    #[test]
    fn rejects_empty_segments() {
        for input in ["a..b", "a.", "[]", "a.[b]"] {
            assert!(
                matches!(
                    FieldPath::parse(input),
                    Err(PathParseError::EmptySegment { .. })
                ),
                "expected empty-segment error for {input:?}"
            );
        }
    }

    #[test]
    fn rejects_unbalanced_brackets() {
        for input in ["a[b", "a]b", "[a[b]]"] {
            assert!(
                matches!(
                    FieldPath::parse(input),
                    Err(PathParseError::UnbalancedBracket { .. })
                ),
                "expected unbalanced-bracket error for {input:?}"
            );
        }
    }

    #[test]
    fn resolves_top_level_fields() {
        let item = Value::map([("e", Value::from("a"))]);
        let path = FieldPath::parse("e").unwrap();
        assert_eq!(path.resolve(&item), Value::Text("a".to_string()));
    }

    #[test]
    fn resolves_nested_fields() {
        let item = Value::map([("c", Value::map([("e", Value::from("x"))]))]);
        let path = FieldPath::parse("c.e").unwrap();
        assert_eq!(path.resolve(&item), Value::Text("x".to_string()));
    }

    #[test]
    fn resolves_list_indexes() {
        let item = Value::map([("items", Value::list([Value::from("first")]))]);
        let path = FieldPath::parse("items[0]").unwrap();
        assert_eq!(path.resolve(&item), Value::Text("first".to_string()));
    }

    #[test]
    fn misses_resolve_to_null() {
        let item = Value::map([("a", Value::from(1u64))]);

        for input in ["b", "a.b", "a[0]", "b.c.d"] {
            let path = FieldPath::parse(input).unwrap();
            assert_eq!(path.resolve(&item), Value::Null, "path {input:?}");
        }
    }

    #[test]
    fn resolve_record_walks_nested_values() {
        let item = Value::map([("c", Value::map([("e", Value::from("x"))]))]);
        let path = FieldPath::parse("c.e").unwrap();
        assert_eq!(path.resolve_record(&item), Value::Text("x".to_string()));
    }

    #[test]
    fn resolve_record_index_first_is_null() {
        let item = Value::list([Value::from("x")]);
        let path = FieldPath::parse("[0]").unwrap();
        assert_eq!(path.resolve_record(&item), Value::Null);
    }

    #[test]
    fn display_round_trips_the_raw_path() {
        let path = FieldPath::parse("items[0].name").unwrap();
        assert_eq!(path.to_string(), "items[0].name");
    }
}
