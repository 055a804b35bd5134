// file: src/analyzer/statistics.rs
// description: descriptive statistics over a numeric dataset
// reference: population variance, insertion-order mode

use super::frequency::{count_occurrences, first_most_frequent};
use crate::error::{PipelineError, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub variance: f64,
    pub standard_deviation: f64,
}

impl Statistics {
    /// Computes every measure from the same dataset snapshot.
    pub fn compute(numbers: &[f64]) -> Result<Self> {
        let empty = || PipelineError::EmptyDataset("No valid numeric data found.".to_string());

        let mean = mean(numbers).ok_or_else(empty)?;
        let median = median(numbers).ok_or_else(empty)?;
        let mode = mode(numbers).ok_or_else(empty)?;
        let variance = variance(numbers, mean).ok_or_else(empty)?;

        Ok(Self {
            count: numbers.len(),
            mean,
            median,
            mode,
            variance,
            standard_deviation: standard_deviation(variance),
        })
    }
}

pub fn mean(numbers: &[f64]) -> Option<f64> {
    if numbers.is_empty() {
        return None;
    }
    let total: f64 = numbers.iter().sum();
    Some(total / numbers.len() as f64)
}

pub fn median(numbers: &[f64]) -> Option<f64> {
    if numbers.is_empty() {
        return None;
    }

    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[middle - 1] + sorted[middle]) / 2.0)
    } else {
        Some(sorted[middle])
    }
}

/// Most frequent value; on a tie the value seen first in the input wins.
pub fn mode(numbers: &[f64]) -> Option<f64> {
    let keys = numbers
        .iter()
        .enumerate()
        .map(|(position, &value)| FloatKey::new(position, value));
    let frequencies = count_occurrences(keys);

    first_most_frequent(&frequencies).map(|key| match *key {
        FloatKey::Bits(bits) => f64::from_bits(bits),
        FloatKey::Zero(first) => first.to_f64(),
        FloatKey::NotANumber(position) => numbers[position],
    })
}

/// Population variance around a previously computed mean.
pub fn variance(numbers: &[f64], mean: f64) -> Option<f64> {
    if numbers.is_empty() {
        return None;
    }
    let total: f64 = numbers.iter().map(|n| (n - mean).powi(2)).sum();
    Some(total / numbers.len() as f64)
}

pub fn standard_deviation(variance: f64) -> f64 {
    variance.sqrt()
}

/// Equality classes of `f64` values as used by the mode's frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum FloatKey {
    Bits(u64),
    /// `0.0` and `-0.0` compare equal; the sign of the first one seen is kept.
    Zero(ZeroSign),
    /// NaN equals nothing, so every occurrence is its own entry.
    NotANumber(usize),
}

#[derive(Debug, Clone, Copy)]
struct ZeroSign(bool);

impl ZeroSign {
    fn to_f64(self) -> f64 {
        if self.0 { -0.0 } else { 0.0 }
    }
}

// Any two zeros are the same key regardless of sign.
impl PartialEq for ZeroSign {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ZeroSign {}

impl std::hash::Hash for ZeroSign {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {}
}

impl FloatKey {
    fn new(position: usize, value: f64) -> Self {
        if value.is_nan() {
            Self::NotANumber(position)
        } else if value == 0.0 {
            Self::Zero(ZeroSign(value.is_sign_negative()))
        } else {
            Self::Bits(value.to_bits())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_reference_dataset() {
        let stats = Statistics::compute(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();

        assert_eq!(stats.count, 8);
        assert!((stats.mean - 5.0).abs() < EPSILON);
        assert!((stats.median - 4.5).abs() < EPSILON);
        assert_eq!(stats.mode, 4.0);
        assert!((stats.variance - 4.0).abs() < EPSILON);
        assert!((stats.standard_deviation - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[7.0]), Some(7.0));
    }

    #[test]
    fn test_mode_tie_prefers_first_seen() {
        assert_eq!(mode(&[9.0, 1.0, 1.0, 9.0]), Some(9.0));
        assert_eq!(mode(&[1.0, 2.0, 3.0]), Some(1.0));
        assert_eq!(mode(&[1.0, 2.0, 2.0]), Some(2.0));
    }

    #[test]
    fn test_mode_keeps_sign_of_first_zero() {
        assert_eq!(
            mode(&[1.0, -0.0, 0.0]).map(f64::to_bits),
            Some((-0.0_f64).to_bits())
        );
        assert_eq!(mode(&[-0.0]).map(f64::to_bits), Some((-0.0_f64).to_bits()));
        assert_eq!(
            mode(&[0.0, -0.0]).map(f64::to_bits),
            Some(0.0_f64.to_bits())
        );
    }

    #[test]
    fn test_mode_never_groups_nan() {
        assert_eq!(mode(&[1.0, f64::NAN, f64::NAN]), Some(1.0));
        assert!(mode(&[f64::NAN, 2.0]).unwrap().is_nan());
        assert_eq!(mode(&[f64::INFINITY, 3.0, f64::INFINITY]), Some(f64::INFINITY));
    }

    #[test]
    fn test_single_value() {
        let stats = Statistics::compute(&[3.5]).unwrap();
        assert_eq!(stats.mean, 3.5);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.standard_deviation, 0.0);
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        assert!(matches!(
            Statistics::compute(&[]),
            Err(PipelineError::EmptyDataset(_))
        ));
        assert_eq!(mean(&[]), None);
        assert_eq!(median(&[]), None);
        assert_eq!(mode(&[]), None);
        assert_eq!(variance(&[], 0.0), None);
    }

    proptest! {
        #[test]
        fn median_ignores_input_order(
            values in prop::collection::vec(-1.0e6f64..1.0e6, 1..64),
            seed in any::<u64>(),
        ) {
            let original = median(&values).unwrap();
            let mut values = values;

            let len = values.len();
            let mut state = seed;
            for i in (1..len).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let j = (state >> 33) as usize % (i + 1);
                values.swap(i, j);
            }

            prop_assert_eq!(median(&values).unwrap(), original);
        }

        #[test]
        fn variance_is_never_negative(values in prop::collection::vec(-1.0e3f64..1.0e3, 1..64)) {
            let m = mean(&values).unwrap();
            prop_assert!(variance(&values, m).unwrap() >= 0.0);
        }
    }
}
