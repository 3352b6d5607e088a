use crate::config::Config;
use crate::conversion::{self, Conversion, ConversionRequest};
use crate::form::error::FormError;
use crate::form::formatter::ResultFormatter;
use crate::form::validator::{check_selection, parse_value};
use serde::Serialize;

/// A converted value together with its display string
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormResult {
    #[serde(flatten)]
    pub conversion: Conversion,
    pub display: String,
}

/// Runs a submission the way the conversion form does:
/// parse the value, guard the selections, then ask the engine
pub struct FormProcessor {
    formatter: ResultFormatter,
}

impl FormProcessor {
    pub fn new(config: &Config) -> Self {
        Self {
            formatter: ResultFormatter::new(&config.display),
        }
    }

    pub fn submit(
        &self,
        value_text: &str,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<FormResult, FormError> {
        let value = parse_value(value_text)?;
        check_selection(from_unit, to_unit)?;

        let request = ConversionRequest::new(value, from_unit, to_unit);
        let conversion = conversion::convert_request(&request)?;
        let display = self.formatter.format(conversion.result, &request.to_unit);

        Ok(FormResult {
            conversion,
            display,
        })
    }
}

impl Default for FormProcessor {
    fn default() -> Self {
        Self::new(&Config::empty())
    }
}
