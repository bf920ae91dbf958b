pub mod builder;
pub mod design;
pub mod error;
pub mod naming;
pub mod options;
pub mod sql;

use wasm_bindgen::prelude::*;

use builder::{ImportOutcome, build_design};
use design::ErDesign;
use error::ImportError;
use options::ImportOptions;
use sql::parse_ddl;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Reverse-engineer DDL text into entities and relations with default
/// options. Never fails; unparsable input yields an empty design.
pub fn import_ddl(source: &str) -> ErDesign {
    import_ddl_with(source, &ImportOptions::default()).design
}

/// Reverse-engineer DDL text and report what was skipped along the way.
pub fn import_ddl_with(source: &str, options: &ImportOptions) -> ImportOutcome {
    let dialect = options.dialect.resolve(source);
    let schema = parse_ddl(source);
    build_design(schema, dialect, options)
}

/// Import DDL and return the design as JSON. `options` is an optional JSON
/// object of `ImportOptions` fields.
#[wasm_bindgen(js_name = "importDdl")]
pub fn import_ddl_json(source: &str, options: Option<String>) -> Result<String, String> {
    let options = match options.as_deref() {
        Some(json) => ImportOptions::from_json(json).map_err(|e| e.to_string())?,
        None => ImportOptions::default(),
    };

    let design = import_ddl_with(source, &options).design;
    to_json(&design, false).map_err(|e| e.to_string())
}

/// Serialize a design for the canvas and code generators.
pub fn to_json(design: &ErDesign, pretty: bool) -> Result<String, ImportError> {
    let json = if pretty {
        serde_json::to_string_pretty(design)
    } else {
        serde_json::to_string(design)
    };
    json.map_err(ImportError::Serialize)
}
