use crate::{
    error::CheckError,
    key::CompositeKey,
    path::FieldPath,
    rule::UniqueRule,
    traits::Record,
    value::Value,
};
use serde::Serialize;
use std::collections::HashSet;

///
/// Violation
///
/// One reported duplicate: the offending item position, the rule's
/// message, and an optional rendered path. Emitted, never mutated.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Violation {
    pub index: usize,
    pub message: String,
    pub path: Option<String>,
}

///
/// ViolationSink
///
/// Push-style consumer for duplicate reports. The checker calls `report`
/// once per duplicate found, in index order.
///

pub trait ViolationSink {
    fn report(&mut self, violation: Violation);
}

impl ViolationSink for Vec<Violation> {
    fn report(&mut self, violation: Violation) {
        self.push(violation);
    }
}

///
/// check
///
/// Validate intra-collection uniqueness of the rule's composite key.
///
/// - `Value::Null` collection → empty result (no-op, not an error).
/// - Non-list collection → `TypeMismatch`.
/// - Rule with unset or empty fields → `InvalidConfig`, before any item
///   is inspected.
///
/// One sequential pass, O(n·f) for n items and f fields. The first
/// occurrence of a key is never flagged; every later occurrence is
/// flagged exactly once. Reordering the collection changes which index
/// is reported.
///

pub fn check(collection: &Value, rule: &UniqueRule) -> Result<Vec<Violation>, CheckError> {
    let mut violations = Vec::new();
    check_with_sink(collection, rule, &mut violations)?;

    Ok(violations)
}

/// Push-style variant of [`check`]; reports each duplicate to `sink`.
pub fn check_with_sink(
    collection: &Value,
    rule: &UniqueRule,
    sink: &mut dyn ViolationSink,
) -> Result<(), CheckError> {
    if collection.is_null() {
        return Ok(());
    }

    let Some(items) = collection.as_list() else {
        return Err(CheckError::TypeMismatch {
            expected: "a list-shaped collection",
            found: collection.kind(),
        });
    };

    let fields = configured_fields(rule)?;
    let mut seen: HashSet<CompositeKey> = HashSet::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let values: Vec<Value> = fields.iter().map(|field| field.resolve(item)).collect();

        // `insert` keeps the key on a duplicate hit, so every later repeat
        // still counts against the original sighting.
        if !seen.insert(CompositeKey::of(&values)) {
            sink.report(build_violation(index, rule));
        }
    }

    Ok(())
}

/// Typed variant of [`check`] over record-capable items.
///
/// The type system rules out `TypeMismatch` here; `InvalidConfig` still
/// applies for unset or empty fields.
pub fn check_records<'a, I, R>(items: I, rule: &UniqueRule) -> Result<Vec<Violation>, CheckError>
where
    I: IntoIterator<Item = &'a R>,
    R: Record + 'a,
{
    let fields = configured_fields(rule)?;
    let mut seen: HashSet<CompositeKey> = HashSet::new();
    let mut violations = Vec::new();

    for (index, item) in items.into_iter().enumerate() {
        let values: Vec<Value> = fields
            .iter()
            .map(|field| field.resolve_record(item))
            .collect();

        if !seen.insert(CompositeKey::of(&values)) {
            violations.push(build_violation(index, rule));
        }
    }

    Ok(violations)
}

fn configured_fields(rule: &UniqueRule) -> Result<&[FieldPath], CheckError> {
    match rule.fields() {
        Some(fields) if !fields.is_empty() => Ok(fields),
        _ => Err(CheckError::InvalidConfig(
            "fields cannot be null or empty".to_string(),
        )),
    }
}

fn build_violation(index: usize, rule: &UniqueRule) -> Violation {
    let path = rule
        .target_path()
        .map(|target| format!("[{index}].{target}"));

    Violation {
        index,
        message: rule.message().to_string(),
        path,
    }
}

///
/// TESTS
///
