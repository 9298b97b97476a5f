//! Builds the single schema row handed to the classifier

use crate::input::PatientInput;
use crate::schema::{self, NUM_ATTRIBUTES};
use std::ops::Index;

/// One row of the thyroid schema. Columns the CLI does not collect stay at `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f64; NUM_ATTRIBUTES],
}

impl Default for FeatureVector {
    fn default() -> Self {
        FeatureVector {
            values: [0.0; NUM_ATTRIBUTES],
        }
    }
}

impl FeatureVector {
    pub fn from_input(input: &PatientInput) -> Self {
        let mut vector = FeatureVector::default();
        vector.values[schema::AGE] = f64::from(input.age);
        vector.values[schema::ON_THYROXINE] = nominal_flag(input.on_thyroxine);
        vector.values[schema::TSH] = input.tsh;
        vector.values[schema::T3_MEASURED] = nominal_flag(input.t3_measured);
        vector.values[schema::T3] = input.t3;
        vector.values[schema::TT4] = f64::from(input.tt4);
        vector.values[schema::FTI] = f64::from(input.fti);
        vector.values[schema::REFERRAL_SOURCE] = input.referral_source.index() as f64;
        vector
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Every column except the class attribute, in schema order
    pub fn predictors(&self) -> Vec<f64> {
        self.values
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != schema::CLASS)
            .map(|(_, v)| *v)
            .collect()
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, idx: usize) -> &f64 {
        &self.values[idx]
    }
}

// index into TRUE_FALSE: f = 0, t = 1
fn nominal_flag(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}
