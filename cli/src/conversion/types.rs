use serde::{Deserialize, Serialize};

/// A single conversion request as supplied by a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(value: f64, from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        Self {
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }
}

/// How a unit pair was resolved against the factor table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "lowercase")]
pub enum Resolution {
    /// (from, to) is stored; multiply by the factor
    Direct { factor: f64 },
    /// Only (to, from) is stored; divide by its factor
    Inverse { factor: f64 },
}

impl Resolution {
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            Resolution::Direct { factor } => value * factor,
            Resolution::Inverse { factor } => value / factor,
        }
    }
}

/// Result of a successful conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    #[serde(flatten)]
    pub request: ConversionRequest,
    pub result: f64,
    pub resolution: Resolution,
}

/// One canonical row of the factor table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorEntry {
    pub from: &'static str,
    pub to: &'static str,
    pub factor: f64,
}
