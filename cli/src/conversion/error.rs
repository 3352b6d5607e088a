use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Neither (from, to) nor (to, from) is present in the factor table
    Unsupported { from: String, to: String },
}

impl ConversionError {
    pub fn unsupported(from: &str, to: &str) -> Self {
        ConversionError::Unsupported {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// The unit pair that caused the failure
    pub fn units(&self) -> (&str, &str) {
        match self {
            ConversionError::Unsupported { from, to } => (from, to),
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::Unsupported { from, to } => {
                write!(f, "Conversion from {} to {} not supported.", from, to)
            }
        }
    }
}

impl std::error::Error for ConversionError {}
