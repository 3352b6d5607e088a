use crate::conversion::ConversionError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// The value text is not a finite real number
    InvalidNumber(String),
    /// One or both unit selections are still the placeholder
    UnitsNotSelected,
    Conversion(ConversionError),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::InvalidNumber(text) => {
                write!(f, "Invalid value: '{}' is not a number.", text)
            }
            FormError::UnitsNotSelected => write!(f, "Please select both units."),
            FormError::Conversion(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::Conversion(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConversionError> for FormError {
    fn from(e: ConversionError) -> Self {
        FormError::Conversion(e)
    }
}
