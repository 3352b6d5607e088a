pub mod config;
pub mod conversion;
pub mod form;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
