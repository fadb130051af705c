use crate::value::{Value, encode_canonical};
use xxhash_rust::xxh3::xxh3_64;

///
/// CompositeKey
///
/// Canonical fingerprint of one item's ordered tuple of resolved field
/// values. The tuple is serialized through the tagged canonical encoding
/// (arity prefix, per-value tag byte, length-prefixed payloads) and then
/// collapsed to an xxh3-64 fingerprint.
///
/// Keys are ephemeral: created per item during one checker pass and kept
/// only inside that pass's seen-key set.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CompositeKey(u64);

impl CompositeKey {
    /// Canonicalize an ordered tuple of resolved field values.
    #[must_use]
    pub fn of(values: &[Value]) -> Self {
        let mut buf = Vec::with_capacity(16 * values.len() + 8);
        buf.extend_from_slice(&(values.len() as u64).to_be_bytes());

        for value in values {
            encode_canonical(value, &mut buf);
        }

        Self(xxh3_64(&buf))
    }

    #[must_use]
    pub const fn fingerprint(self) -> u64 {
        self.0
    }
}

///
/// TESTS
///
