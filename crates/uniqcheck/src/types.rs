use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

///
/// Float64
///
/// f64 wrapper with total equality and ordering over the IEEE bit pattern,
/// so float-bearing values remain usable as set keys.
///
/// Construction canonicalizes NaN payloads and negative zero, which means
/// NaN equals NaN and `-0.0` equals `0.0` under this wrapper.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(from = "f64", into = "f64")]
pub struct Float64(f64);

impl Float64 {
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(f64::NAN)
        } else if value == 0.0 {
            Self(0.0)
        } else {
            Self(value)
        }
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Sign-flipped bit pattern whose unsigned order matches numeric order.
    #[must_use]
    pub(crate) const fn ordered_bits(self) -> u64 {
        let bits = self.0.to_bits();
        if bits >> 63 == 1 { !bits } else { bits | (1 << 63) }
    }
}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Float64 {}

impl PartialOrd for Float64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Float64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordered_bits().cmp(&other.ordered_bits())
    }
}

impl Hash for Float64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered_bits().hash(state);
    }
}

impl From<f64> for Float64 {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<f32> for Float64 {
    fn from(value: f32) -> Self {
        Self::new(f64::from(value))
    }
}

impl From<Float64> for f64 {
    fn from(value: Float64) -> Self {
        value.get()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_equals_nan() {
        assert_eq!(Float64::new(f64::NAN), Float64::new(f64::NAN));
    }

    #[test]
    fn negative_zero_equals_zero() {
        assert_eq!(Float64::new(-0.0), Float64::new(0.0));
    }

    #[test]
    fn ordering_matches_numeric_order() {
        let mut values = vec![
            Float64::new(1.5),
            Float64::new(-3.0),
            Float64::new(0.0),
            Float64::new(-0.5),
        ];
        values.sort();

        let raw: Vec<f64> = values.into_iter().map(Float64::get).collect();
        assert_eq!(raw, vec![-3.0, -0.5, 0.0, 1.5]);
    }

    #[test]
    fn distinct_values_are_not_equal() {
        assert_ne!(Float64::new(1.0), Float64::new(2.0));
    }
}
