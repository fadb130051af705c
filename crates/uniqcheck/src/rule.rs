use crate::path::{FieldPath, PathParseError};
use serde::Deserialize;

/// Message shown per violation when no override is configured.
pub const DEFAULT_MESSAGE: &str = "Must be unique within collection.";

///
/// FieldSpec
///
/// `fields` in an options bag accepts either a single path string or a
/// list of path strings.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum FieldSpec {
    One(String),
    Many(Vec<String>),
}

///
/// RuleOptions
///
/// Structured options bag for rule construction, deserializable from
/// caller-supplied configuration:
///
/// `{ "fields": "email" | ["group", "name"], "message": ..., "target_path": ... }`
///

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RuleOptions {
    #[serde(default)]
    pub fields: Option<FieldSpec>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub target_path: Option<String>,
}

///
/// UniqueRule
///
/// Immutable rule descriptor: ordered field paths, violation message, and
/// an optional violation-target path. Pure data; all normalization happens
/// at construction time.
///
/// `fields: None` means unset. Checking an unset rule is a configuration
/// error, not a validation outcome.
///

#[derive(Clone, Debug)]
pub struct UniqueRule {
    fields: Option<Vec<FieldPath>>,
    message: String,
    target_path: Option<String>,
}

impl UniqueRule {
    /// Build a rule over a single field path.
    pub fn new(path: &str) -> Result<Self, PathParseError> {
        Self::from_fields([path])
    }

    /// Build a rule over an ordered list of field paths.
    pub fn from_fields<I, S>(paths: I) -> Result<Self, PathParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields = paths
            .into_iter()
            .map(|path| FieldPath::parse(path.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            fields: Some(fields),
            message: DEFAULT_MESSAGE.to_string(),
            target_path: None,
        })
    }

    /// Build a rule from a structured options bag.
    pub fn from_options(options: RuleOptions) -> Result<Self, PathParseError> {
        let mut rule = match options.fields {
            Some(FieldSpec::One(path)) => Self::new(&path)?,
            Some(FieldSpec::Many(paths)) => Self::from_fields(paths)?,
            None => Self::unset(),
        };

        if let Some(message) = options.message {
            rule.message = message;
        }
        rule.target_path = options.target_path;

        Ok(rule)
    }

    /// Build a rule with no fields configured. Checking fails fast.
    #[must_use]
    pub fn unset() -> Self {
        Self {
            fields: None,
            message: DEFAULT_MESSAGE.to_string(),
            target_path: None,
        }
    }

    /// Override the violation message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Render violation paths as `[<index>].<target_path>`.
    #[must_use]
    pub fn with_target_path(mut self, path: impl Into<String>) -> Self {
        self.target_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn fields(&self) -> Option<&[FieldPath]> {
        self.fields.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn target_path(&self) -> Option<&str> {
        self.target_path.as_deref()
    }
}

///
/// TESTS
///
