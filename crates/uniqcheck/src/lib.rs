//! Composite-field uniqueness validation for collections of dynamic records.
//!
//! Given a collection and an ordered set of field paths, `check` flags every
//! item whose composite field value was already produced by an earlier item.
//! The first occurrence of a key is never flagged; every later occurrence is
//! reported as its own violation.

pub mod check;
pub mod error;
pub mod key;
pub mod path;
pub mod rule;
pub mod traits;
pub mod types;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, encoders, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        check::{Violation, check},
        path::FieldPath,
        rule::UniqueRule,
        value::Value,
    };
}
