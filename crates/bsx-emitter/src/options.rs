//! Transpile configuration.

use bsx_common::NewLineKind;
use serde::{Deserialize, Serialize};

/// Options controlling how a file is transpiled.
///
/// Deserializes from a camelCase JSON object; omitted fields take their
/// defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranspileOptions {
    /// Text repeated once per block level.
    pub indent_unit: String,
    pub new_line: NewLineKind,
    /// Build a source map alongside the output text.
    pub source_map: bool,
    pub source_root: Option<String>,
    /// Prefix of the runtime support helpers (`<prefix>_simpleTernary`, ...).
    pub helper_prefix: String,
    /// Emit the line break before `end if` / `end for` even when the body
    /// is empty, as `while` always does.
    pub newline_before_empty_block_end: bool,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        TranspileOptions {
            indent_unit: "    ".to_string(),
            new_line: NewLineKind::default(),
            source_map: true,
            source_root: None,
            helper_prefix: "bslib".to_string(),
            newline_before_empty_block_end: false,
        }
    }
}

impl TranspileOptions {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn new_line_str(&self) -> &'static str {
        self.new_line.as_str()
    }
}
