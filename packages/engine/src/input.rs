//! Validation of the eight command-line values
//!
//! Every parser takes the raw flag value and either returns the typed value or an
//! [`InputError`] describing why it was refused. Downstream code assumes a
//! [`PatientInput`] is already valid.

use crate::error::{InputError, InputResult};
use crate::schema::REFERRAL_SOURCES;
use std::fmt;
use std::str::FromStr;

/// External factor the patient was referred through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferralSource {
    Svhc = 0,
    Other = 1,
    Svi = 2,
    Stmw = 3,
    Svhd = 4,
    West = 5,
}

impl ReferralSource {
    pub const ALL: [ReferralSource; 6] = [
        ReferralSource::Svhc,
        ReferralSource::Other,
        ReferralSource::Svi,
        ReferralSource::Stmw,
        ReferralSource::Svhd,
        ReferralSource::West,
    ];

    /// Position in the `referral_source` label list
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        REFERRAL_SOURCES[self.index()]
    }
}

impl FromStr for ReferralSource {
    type Err = InputError;

    // Case-sensitive: `svi` is not `SVI`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REFERRAL_SOURCES
            .iter()
            .position(|label| *label == s)
            .map(|idx| ReferralSource::ALL[idx])
            .ok_or_else(|| InputError::UnknownReferralSource(s.to_string()))
    }
}

impl fmt::Display for ReferralSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A fully validated hormone panel for one patient
#[derive(Debug, Clone, PartialEq)]
pub struct PatientInput {
    pub t3: f64,
    pub tt4: u32,
    pub fti: u32,
    pub tsh: f64,
    pub age: u8,
    pub referral_source: ReferralSource,
    pub on_thyroxine: bool,
    pub t3_measured: bool,
}

fn non_negative_decimal(field: &'static str, raw: &str) -> InputResult<f64> {
    let value: f64 = raw.parse().map_err(|_| InputError::InvalidNumber {
        field,
        value: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::InvalidNumber {
            field,
            value: raw.to_string(),
        });
    }
    if value < 0.0 {
        return Err(InputError::Negative {
            field,
            value: raw.to_string(),
        });
    }
    // -0.0 passes the check above; store it as plain zero
    Ok(value.abs())
}

fn non_negative_integer(field: &'static str, raw: &str) -> InputResult<u32> {
    let value: i32 = raw.parse().map_err(|_| InputError::InvalidNumber {
        field,
        value: raw.to_string(),
    })?;
    u32::try_from(value).map_err(|_| InputError::Negative {
        field,
        value: raw.to_string(),
    })
}

fn binary_flag(field: &'static str, raw: &str) -> InputResult<bool> {
    let invalid = || InputError::InvalidFlag {
        field,
        value: raw.to_string(),
    };
    match raw.parse::<i32>() {
        Ok(1) => Ok(true),
        Ok(0) => Ok(false),
        Ok(_) => Err(invalid()),
        Err(_) => match raw {
            "t" | "T" => Ok(true),
            "f" | "F" => Ok(false),
            _ => Err(invalid()),
        },
    }
}

pub fn parse_t3(raw: &str) -> InputResult<f64> {
    non_negative_decimal("T3", raw)
}

pub fn parse_tsh(raw: &str) -> InputResult<f64> {
    non_negative_decimal("TSH", raw)
}

pub fn parse_tt4(raw: &str) -> InputResult<u32> {
    non_negative_integer("TT4", raw)
}

pub fn parse_fti(raw: &str) -> InputResult<u32> {
    non_negative_integer("FTI", raw)
}

/// Age in whole years, strictly between 0 and 120
pub fn parse_age(raw: &str) -> InputResult<u8> {
    let value: i32 = raw.parse().map_err(|_| InputError::InvalidNumber {
        field: "age",
        value: raw.to_string(),
    })?;
    if value > 0 && value < 120 {
        Ok(value as u8)
    } else {
        Err(InputError::AgeOutOfRange(value))
    }
}

pub fn parse_referral_source(raw: &str) -> InputResult<ReferralSource> {
    raw.parse()
}

pub fn parse_on_thyroxine(raw: &str) -> InputResult<bool> {
    binary_flag("Thyroxine usage", raw)
}

pub fn parse_t3_measured(raw: &str) -> InputResult<bool> {
    binary_flag("Measured T3", raw)
}
