//! Min/avg/max over numeric observations.
//!
//! Every function returns `None` for an empty slice. A single observation is
//! returned unchanged. For two or more observations a zero minimum or maximum
//! is reported as [`FeatureValue::Null`].

use pfe_model::{FeatureSet, FeatureValue};

pub fn avg(values: &[f64]) -> Option<f64> {
    match values {
        [] => None,
        [single] => Some(*single),
        _ => Some(values.iter().sum::<f64>() / values.len() as f64),
    }
}

pub fn min(values: &[f64]) -> Option<FeatureValue> {
    extreme(values, f64::min)
}

pub fn max(values: &[f64]) -> Option<FeatureValue> {
    extreme(values, f64::max)
}

fn extreme(values: &[f64], pick: fn(f64, f64) -> f64) -> Option<FeatureValue> {
    match values {
        [] => None,
        [single] => Some(FeatureValue::Number(*single)),
        [first, rest @ ..] => {
            let result = rest.iter().copied().fold(*first, pick);
            if result == 0.0 {
                Some(FeatureValue::Null)
            } else {
                Some(FeatureValue::Number(result))
            }
        }
    }
}

/// The three statistics of one non-empty observation list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min: FeatureValue,
    pub avg: FeatureValue,
    pub max: FeatureValue,
}

impl Summary {
    /// Writes `<prefix>_MIN`, `<prefix>_AVG` and `<prefix>_MAX` into `features`.
    pub fn write_into(&self, features: &mut FeatureSet, prefix: &str) {
        features.insert(format!("{prefix}_MIN"), self.min);
        features.insert(format!("{prefix}_AVG"), self.avg);
        features.insert(format!("{prefix}_MAX"), self.max);
    }
}

pub fn summarize(values: &[f64]) -> Option<Summary> {
    Some(Summary {
        min: min(values)?,
        avg: FeatureValue::Number(avg(values)?),
        max: max(values)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avg_of_single_and_pair() {
        assert_eq!(avg(&[5.0]), Some(5.0));
        assert_eq!(avg(&[2.0, 4.0]), Some(3.0));
        assert_eq!(avg(&[]), None);
    }

    #[test]
    fn zero_extremes_become_null() {
        assert_eq!(min(&[0.0, 0.0]), Some(FeatureValue::Null));
        assert_eq!(max(&[-3.0, 0.0]), Some(FeatureValue::Null));
        assert_eq!(min(&[0.0, 4.0]), Some(FeatureValue::Null));
    }

    #[test]
    fn single_value_is_returned_even_when_zero() {
        assert_eq!(min(&[3.0]), Some(FeatureValue::Number(3.0)));
        assert_eq!(min(&[0.0]), Some(FeatureValue::Number(0.0)));
        assert_eq!(max(&[0.0]), Some(FeatureValue::Number(0.0)));
    }

    #[test]
    fn empty_lists_produce_no_statistics() {
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[]), None);
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn summary_writes_suffixed_keys() {
        let mut features = FeatureSet::new();
        summarize(&[1.0, 2.0, 6.0])
            .unwrap()
            .write_into(&mut features, "bmi");
        assert_eq!(features.get("bmi_MIN"), Some(FeatureValue::Number(1.0)));
        assert_eq!(features.get("bmi_AVG"), Some(FeatureValue::Number(3.0)));
        assert_eq!(features.get("bmi_MAX"), Some(FeatureValue::Number(6.0)));
    }
}
