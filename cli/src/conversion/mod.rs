// Unit conversion engine
// A fixed table of direct factors plus an inversion rule for the reverse direction.
// Conversions never chain through an intermediate unit.

pub mod engine;
pub mod error;
pub mod table;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::{convert, convert_request, is_supported, resolve};
pub use error::ConversionError;
pub use table::{entries, known_units};
pub use types::{Conversion, ConversionRequest, FactorEntry, Resolution};
