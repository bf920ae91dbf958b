//! Import options.

use serde::Deserialize;

use crate::error::ImportError;
use crate::sql::Dialect;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportOptions {
    pub dialect: Dialect,
    /// Entities per placeholder row before wrapping
    pub grid_columns: usize,
    pub origin_x: f64,
    pub origin_y: f64,
    pub spacing_x: f64,
    pub spacing_y: f64,
    /// String columns declared with this length get no `Size` rule
    pub default_string_length: u32,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::Auto,
            grid_columns: 4,
            origin_x: 100.0,
            origin_y: 100.0,
            spacing_x: 350.0,
            spacing_y: 300.0,
            default_string_length: 255,
        }
    }
}

impl ImportOptions {
    /// Parse options from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        serde_json::from_str(json).map_err(ImportError::Options)
    }
}
