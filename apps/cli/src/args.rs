//! Command-line surface
//!
//! The hormone flags are traditionally spelled with a single dash (`-t3`, `-fti`, ...),
//! which clap reserves for single-character shorts. [`normalize_args`] rewrites those
//! spellings to their `--` form before parsing.

use clap::{ArgAction, Parser};
use std::ffi::OsString;
use thyroid_verdict::input;
use thyroid_verdict::{PatientInput, ReferralSource};

/// Multi-character options that may be given with a single dash
const SINGLE_DASH_LONGS: &[&str] = &["t3", "t4", "fti", "tsh", "m3"];

#[derive(Parser, Debug)]
#[command(
    name = "thyroid-verdict",
    version,
    about = "Predict whether a hormone panel is Healthy or Sick with a pre-trained decision tree",
    allow_negative_numbers = true
)]
pub struct Args {
    /// The T3 - Hormone expression value for the T3 hormone
    #[arg(long = "t3", visible_alias = "T3", value_name = "T3", value_parser = input::parse_t3)]
    pub t3: f64,

    /// The TT4 - Hormone expression value for the TT4 hormone
    #[arg(long = "t4", visible_alias = "TT4", value_name = "TT4", value_parser = input::parse_tt4)]
    pub tt4: u32,

    /// The FTI - Hormone expression value for the free TT4 index
    #[arg(long = "fti", visible_alias = "FTI", value_name = "FTI", value_parser = input::parse_fti)]
    pub fti: u32,

    /// The TSH - Hormone expression value for thyroid stimulating hormone
    #[arg(long = "tsh", visible_alias = "TSH", value_name = "TSH", value_parser = input::parse_tsh)]
    pub tsh: f64,

    /// The age - The age of the person in years (1 to 119)
    #[arg(short = 'a', long = "age", value_name = "YEARS", value_parser = input::parse_age)]
    pub age: u8,

    /// The referral source - one of SVHC, other, SVI, STMW, SVHD, WEST
    #[arg(
        short = 'r',
        long = "referralsource",
        value_name = "SOURCE",
        value_parser = input::parse_referral_source
    )]
    pub referral_source: ReferralSource,

    /// The thyroxine usage - whether the person uses thyroxine, this can be 1, t, T or 0, f, F
    #[arg(
        short = 'o',
        long = "on_thyroxine",
        value_name = "FLAG",
        action = ArgAction::Set,
        required = true,
        value_parser = input::parse_on_thyroxine
    )]
    pub on_thyroxine: bool,

    /// The measured T3 - whether T3 was measured for the person, this can be 1, t, T or 0, f, F
    #[arg(
        long = "m3",
        visible_alias = "measuredT3",
        value_name = "FLAG",
        action = ArgAction::Set,
        required = true,
        value_parser = input::parse_t3_measured
    )]
    pub t3_measured: bool,
}

impl Args {
    pub fn into_input(self) -> PatientInput {
        PatientInput {
            t3: self.t3,
            tt4: self.tt4,
            fti: self.fti,
            tsh: self.tsh,
            age: self.age,
            referral_source: self.referral_source,
            on_thyroxine: self.on_thyroxine,
            t3_measured: self.t3_measured,
        }
    }
}

/// Rewrite `-t3 1.5` / `-t3=1.5` style options to `--t3 1.5` / `--t3=1.5`.
///
/// The first item (program name) and everything after a bare `--` are left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .enumerate()
        .map(|(idx, arg)| {
            if idx == 0 || passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                    if SINGLE_DASH_LONGS.contains(&name) {
                        OsString::from(format!("-{text}"))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}
