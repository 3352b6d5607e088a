use crate::form::error::FormError;
use crate::form::units::PLACEHOLDER_PREFIX;

/// Parse the value field. Surrounding whitespace is ignored; NaN and infinities are rejected.
pub fn parse_value(text: &str) -> Result<f64, FormError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FormError::InvalidNumber(trimmed.to_string())),
    }
}

/// A selection counts as unselected when it is empty or still shows a placeholder.
/// Labels are compared as given, without trimming.
pub fn is_unselected(selection: &str) -> bool {
    selection.is_empty() || selection.starts_with(PLACEHOLDER_PREFIX)
}

/// Guard run before the engine is called
pub fn check_selection(from_unit: &str, to_unit: &str) -> Result<(), FormError> {
    if is_unselected(from_unit) || is_unselected(to_unit) {
        return Err(FormError::UnitsNotSelected);
    }
    Ok(())
}
