// Caller-side handling around the conversion engine: unit vocabularies,
// value parsing, the unselected-unit guard and result formatting

pub mod detector;
pub mod error;
pub mod formatter;
pub mod processor;
pub mod units;
pub mod validator;

pub use detector::split_quantity;
pub use error::FormError;
pub use formatter::ResultFormatter;
pub use processor::{FormProcessor, FormResult};
pub use units::{FROM_PLACEHOLDER, FROM_UNITS, TO_PLACEHOLDER, TO_UNITS};
pub use validator::{check_selection, is_unselected, parse_value};
