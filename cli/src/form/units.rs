/// Units offered as conversion sources
pub const FROM_UNITS: &[&str] = &[
    "%w/v", "mg/mL", "g/L", "%w/w", "ppm", "mM", "M", "mg", "g", "kg", "mL", "L", "µL",
];

/// Units offered as conversion targets
pub const TO_UNITS: &[&str] = &[
    "mg/mL", "g/L", "%w/v", "%w/w", "ppm", "mM", "M", "mg", "g", "kg", "mL", "L", "µL",
];

pub const FROM_PLACEHOLDER: &str = "Select 'From' Unit";
pub const TO_PLACEHOLDER: &str = "Select 'To' Unit";

/// Prefix shared by both placeholders
pub(crate) const PLACEHOLDER_PREFIX: &str = "Select";
