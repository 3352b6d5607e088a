use crate::conversion::types::FactorEntry;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Canonical factor rows in declaration order: (from, to, factor).
/// Multiplying a quantity in `from` by `factor` expresses it in `to`.
pub const FACTOR_ROWS: &[(&str, &str, f64)] = &[
    // Concentration
    ("%w/v", "mg/mL", 10.0),
    ("%w/v", "g/L", 10.0),
    ("%w/v", "ppm", 10000.0),
    ("%w/w", "ppm", 10000.0),
    ("ppm", "mg/L", 1.0),
    ("mg/mL", "g/L", 1.0),
    ("g/L", "mg/mL", 1000.0),
    ("mg/L", "ppm", 1.0),
    // Molarity
    ("mM", "M", 0.001),
    ("M", "mM", 1000.0),
    // Mass
    ("mg", "g", 0.001),
    ("g", "mg", 1000.0),
    ("g", "kg", 0.001),
    ("kg", "g", 1000.0),
    // Volume
    ("mL", "L", 0.001),
    ("L", "mL", 1000.0),
    ("µL", "mL", 0.001),
    ("mL", "µL", 1000.0),
];

lazy_static! {
    /// Lookup index over FACTOR_ROWS: from -> (to -> factor)
    static ref FACTOR_TABLE: HashMap<&'static str, HashMap<&'static str, f64>> = {
        let mut table: HashMap<&'static str, HashMap<&'static str, f64>> = HashMap::new();
        for &(from, to, factor) in FACTOR_ROWS {
            table.entry(from).or_default().insert(to, factor);
        }
        table
    };
}

/// Stored factor for the ordered pair, if present. No inversion is attempted here.
pub fn factor(from_unit: &str, to_unit: &str) -> Option<f64> {
    FACTOR_TABLE
        .get(from_unit)
        .and_then(|targets| targets.get(to_unit))
        .copied()
}

/// Iterate canonical rows in declaration order
pub fn entries() -> impl Iterator<Item = FactorEntry> {
    FACTOR_ROWS
        .iter()
        .map(|&(from, to, factor)| FactorEntry { from, to, factor })
}

/// Every unit label that appears in the table, in order of first appearance
pub fn known_units() -> Vec<&'static str> {
    let mut units: Vec<&'static str> = Vec::new();
    for &(from, to, _) in FACTOR_ROWS {
        for unit in [from, to] {
            if !units.contains(&unit) {
                units.push(unit);
            }
        }
    }
    units
}
