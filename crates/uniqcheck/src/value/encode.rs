use crate::value::Value;

///
/// Canonical tagged encoding.
///
/// Every value is written as a variant tag byte followed by its payload.
/// Variable-length payloads carry a big-endian u64 length prefix, so two
/// different tuples can never produce the same byte stream by shifting
/// content across segment boundaries (`"12","3"` vs `"1","23"`).
///
/// The encoding is injective over `Value`; it is not order-preserving.
///

pub(crate) fn encode_canonical(value: &Value, out: &mut Vec<u8>) {
    out.push(value.canonical_tag().to_u8());

    match value {
        Value::Null => {}
        Value::Bool(b) => out.push(u8::from(*b)),
        Value::Int(i) => out.extend_from_slice(&i.to_be_bytes()),
        Value::Uint(u) => out.extend_from_slice(&u.to_be_bytes()),
        Value::Float64(f) => out.extend_from_slice(&f.ordered_bits().to_be_bytes()),
        Value::Text(s) => {
            push_len(out, s.len());
            out.extend_from_slice(s.as_bytes());
        }
        Value::Blob(bytes) => {
            push_len(out, bytes.len());
            out.extend_from_slice(bytes);
        }
        Value::List(items) => {
            push_len(out, items.len());
            for item in items {
                encode_canonical(item, out);
            }
        }
        Value::Map(entries) => {
            push_len(out, entries.len());
            for (key, entry) in entries {
                push_len(out, key.len());
                out.extend_from_slice(key.as_bytes());
                encode_canonical(entry, out);
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn push_len(out: &mut Vec<u8>, len: usize) {
    out.extend_from_slice(&(len as u64).to_be_bytes());
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(value: &Value) -> Vec<u8> {
        let mut out = Vec::new();
        encode_canonical(value, &mut out);
        out
    }

    #[test]
    fn same_payload_different_tag_differs() {
        assert_ne!(encoded(&Value::from("123")), encoded(&Value::from(123i64)));
        assert_ne!(encoded(&Value::from(1i64)), encoded(&Value::from(1u64)));
        assert_ne!(encoded(&Value::from(false)), encoded(&Value::from(0i64)));
    }

    #[test]
    fn text_and_blob_with_same_bytes_differ() {
        assert_ne!(
            encoded(&Value::from("ab")),
            encoded(&Value::blob(*b"ab")),
        );
    }

    #[test]
    fn length_prefix_blocks_boundary_shifts() {
        let a = encoded(&Value::list([Value::from("12"), Value::from("3")]));
        let b = encoded(&Value::list([Value::from("1"), Value::from("23")]));
        assert_ne!(a, b);
    }

    #[test]
    fn nested_structures_encode_distinctly() {
        let flat = Value::map([("a", Value::from(1u64))]);
        let nested = Value::map([("a", Value::list([Value::from(1u64)]))]);
        assert_ne!(encoded(&flat), encoded(&nested));
    }

    #[test]
    fn null_is_a_single_tag_byte() {
        assert_eq!(encoded(&Value::Null).len(), 1);
    }

    #[test]
    fn equal_values_encode_identically() {
        let left = Value::map([("k", Value::from("v")), ("n", Value::Null)]);
        let right = Value::map([("k", Value::from("v")), ("n", Value::Null)]);
        assert_eq!(encoded(&left), encoded(&right));
    }
}
