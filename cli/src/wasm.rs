// WebAssembly bindings for the conversion engine and form
use crate::config::Config;
use crate::conversion;
use crate::form::{self, FormProcessor};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct MediMetricsWasm {
    processor: FormProcessor,
}

impl Default for MediMetricsWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl MediMetricsWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            processor: FormProcessor::default(),
        }
    }

    /// Build an instance whose display settings come from TOML config content
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<MediMetricsWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;

        Ok(Self {
            processor: FormProcessor::new(&config),
        })
    }

    /// Convert a number between two units
    #[wasm_bindgen]
    pub fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> Result<f64, JsValue> {
        conversion::convert(value, from_unit, to_unit).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Submit the raw form fields
    /// Returns JSON string of the result, including the display text
    #[wasm_bindgen]
    pub fn submit(&self, value_text: &str, from_unit: &str, to_unit: &str) -> Result<String, JsValue> {
        let result = self
            .processor
            .submit(value_text, from_unit, to_unit)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// Units offered as conversion sources
    #[wasm_bindgen]
    pub fn from_units(&self) -> js_sys::Array {
        form::FROM_UNITS.iter().map(|u| JsValue::from_str(u)).collect()
    }

    /// Units offered as conversion targets
    #[wasm_bindgen]
    pub fn to_units(&self) -> js_sys::Array {
        form::TO_UNITS.iter().map(|u| JsValue::from_str(u)).collect()
    }

    /// Canonical factor table
    /// Returns JSON string array of {from, to, factor}
    #[wasm_bindgen]
    pub fn table(&self) -> Result<String, JsValue> {
        let entries: Vec<_> = conversion::entries().collect();
        serde_json::to_string(&entries)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize table: {}", e)))
    }
}
