use thiserror::Error as ThisError;

///
/// CheckError
///
/// Fatal, caller-facing failures of one check invocation. Both variants
/// abort before any violations are produced; there is no partial mode.
///
/// Per-item resolution misses are not errors — they resolve to
/// `Value::Null` and participate in duplicate comparison like any other
/// value.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CheckError {
    #[error("invalid rule configuration: {0}")]
    InvalidConfig(String),

    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
