//! Fixed attribute layout of the thyroid dataset
//!
//! The pre-trained classifier was fitted on exactly these 30 columns in exactly this
//! order. The last column is the class attribute; the classifier only ever sees the
//! 29 columns before it.

/// Labels of the boolean nominal attributes, `f` is index 0
pub const TRUE_FALSE: &[&str] = &["f", "t"];

/// Labels of the `referral_source` attribute
pub const REFERRAL_SOURCES: &[&str] = &["SVHC", "other", "SVI", "STMW", "SVHD", "WEST"];

/// Labels of the class attribute
pub const CLASS_LABELS: &[&str] = &["Healthy", "Sick"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Numeric,
    /// Values are stored as an index into the label list
    Nominal(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub kind: AttributeKind,
}

impl Attribute {
    const fn numeric(name: &'static str) -> Self {
        Attribute {
            name,
            kind: AttributeKind::Numeric,
        }
    }

    const fn nominal(name: &'static str, labels: &'static [&'static str]) -> Self {
        Attribute {
            name,
            kind: AttributeKind::Nominal(labels),
        }
    }

    /// Position of `label` within a nominal attribute
    pub fn index_of(&self, label: &str) -> Option<usize> {
        match self.kind {
            AttributeKind::Nominal(labels) => labels.iter().position(|l| *l == label),
            AttributeKind::Numeric => None,
        }
    }
}

pub const NUM_ATTRIBUTES: usize = 30;

pub const AGE: usize = 0;
pub const ON_THYROXINE: usize = 2;
pub const TSH: usize = 17;
pub const T3_MEASURED: usize = 18;
pub const T3: usize = 19;
pub const TT4: usize = 21;
pub const FTI: usize = 25;
pub const REFERRAL_SOURCE: usize = 28;
pub const CLASS: usize = 29;

// The *_measured flags of T4U, FTI and TBG are declared numeric in the trained model.
pub const ATTRIBUTES: [Attribute; NUM_ATTRIBUTES] = [
    Attribute::numeric("age"),
    Attribute::numeric("sex"),
    Attribute::nominal("on_thyroxine", TRUE_FALSE),
    Attribute::nominal("query_on_thyroxine", TRUE_FALSE),
    Attribute::nominal("on_antithyroid_medication", TRUE_FALSE),
    Attribute::nominal("sick", TRUE_FALSE),
    Attribute::nominal("pregnant", TRUE_FALSE),
    Attribute::nominal("thyroid_surgery", TRUE_FALSE),
    Attribute::nominal("I131_treatment", TRUE_FALSE),
    Attribute::nominal("query_hypothyroid", TRUE_FALSE),
    Attribute::nominal("query_hyperthyroid", TRUE_FALSE),
    Attribute::nominal("lithium", TRUE_FALSE),
    Attribute::nominal("goitre", TRUE_FALSE),
    Attribute::nominal("tumor", TRUE_FALSE),
    Attribute::nominal("hypopituitary", TRUE_FALSE),
    Attribute::nominal("psych", TRUE_FALSE),
    Attribute::nominal("TSH_measured", TRUE_FALSE),
    Attribute::numeric("TSH"),
    Attribute::nominal("T3_measured", TRUE_FALSE),
    Attribute::numeric("T3"),
    Attribute::nominal("TT4_measured", TRUE_FALSE),
    Attribute::numeric("TT4"),
    Attribute::numeric("T4U_measured"),
    Attribute::numeric("T4U"),
    Attribute::numeric("FTI_measured"),
    Attribute::numeric("FTI"),
    Attribute::numeric("TBG_measured"),
    Attribute::numeric("TBG"),
    Attribute::nominal("referral_source", REFERRAL_SOURCES),
    Attribute::nominal("Class", CLASS_LABELS),
];

pub fn class_attribute() -> &'static Attribute {
    &ATTRIBUTES[CLASS]
}

/// Names of every attribute the classifier consumes, in column order
pub fn predictor_names() -> impl Iterator<Item = &'static str> {
    ATTRIBUTES
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != CLASS)
        .map(|(_, attr)| attr.name)
}

pub fn num_predictors() -> usize {
    NUM_ATTRIBUTES - 1
}
