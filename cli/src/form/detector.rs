use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A number followed by whitespace and a single unit label
    /// Examples: "100 %w/v", "2.5 mg/mL", "-1e3 µL", "5 g"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^(?P<value>[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?)\s+(?P<unit>\S+)$"
    )
    .unwrap();
}

/// Split "<number> <unit>" into its value text and unit label.
/// The value text is returned unparsed so it goes through the usual value validation.
pub fn split_quantity(s: &str) -> Option<(&str, &str)> {
    let captures = QUANTITY_PATTERN.captures(s.trim())?;
    let value = captures.name("value")?.as_str();
    let unit = captures.name("unit")?.as_str();
    Some((value, unit))
}
