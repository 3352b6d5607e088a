use crate::conversion::error::ConversionError;
use crate::conversion::table;
use crate::conversion::types::{Conversion, ConversionRequest, Resolution};
use log::debug;

/// Resolve a unit pair against the factor table.
/// The direct entry (from, to) wins; otherwise the reverse entry (to, from) is inverted.
pub fn resolve(from_unit: &str, to_unit: &str) -> Option<Resolution> {
    if let Some(factor) = table::factor(from_unit, to_unit) {
        return Some(Resolution::Direct { factor });
    }

    table::factor(to_unit, from_unit).map(|factor| Resolution::Inverse { factor })
}

pub fn is_supported(from_unit: &str, to_unit: &str) -> bool {
    resolve(from_unit, to_unit).is_some()
}

/// Convert `value` from `from_unit` to `to_unit`.
///
/// Unit labels are matched exactly (case-sensitive). The value itself is not
/// validated: negative or non-finite inputs go straight through the arithmetic.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    let resolution = resolve(from_unit, to_unit)
        .ok_or_else(|| ConversionError::unsupported(from_unit, to_unit))?;

    let result = resolution.apply(value);
    debug!(
        "converted {} {} -> {} {} ({:?})",
        value, from_unit, result, to_unit, resolution
    );

    Ok(result)
}

/// Same as [`convert`], but keeps the request and the resolution rule alongside the result
pub fn convert_request(request: &ConversionRequest) -> Result<Conversion, ConversionError> {
    let resolution = resolve(&request.from_unit, &request.to_unit)
        .ok_or_else(|| ConversionError::unsupported(&request.from_unit, &request.to_unit))?;

    Ok(Conversion {
        request: request.clone(),
        result: resolution.apply(request.value),
        resolution,
    })
}
