use crate::config::DisplayConfig;

/// Renders successful conversions for display
#[derive(Debug, Clone)]
pub struct ResultFormatter {
    precision: usize,
    label: String,
}

impl ResultFormatter {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            precision: display.precision,
            label: display.label.clone(),
        }
    }

    /// Format as "<label><value> <unit>", e.g. "Result: 1000.0000 mg/mL"
    pub fn format(&self, value: f64, unit: &str) -> String {
        format!("{}{:.*} {}", self.label, self.precision, value, unit)
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new(&DisplayConfig::default())
    }
}
