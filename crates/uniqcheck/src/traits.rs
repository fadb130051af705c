use crate::value::Value;

///
/// Record
///
/// Capability for items addressable by named field. Implement this to run
/// uniqueness checks over plain structs without going through `Value::Map`.
///
/// `field` returns the value for one top-level field name, or `None` when
/// the record has no such field. Deeper path segments resolve through the
/// returned `Value`.
///

pub trait Record {
    fn field(&self, name: &str) -> Option<Value>;
}

impl Record for Value {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

///
/// TESTS
///
