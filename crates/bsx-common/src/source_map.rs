//! Source Map generation (revision 3).
//!
//! Mappings are collected as absolute positions and only delta/VLQ encoded
//! when the map is generated, so callers may add them in any order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Base64 VLQ encoding as used by the `mappings` field.
pub mod vlq {
    const BASE64_CHARS: &[u8; 64] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    const VLQ_BASE_SHIFT: u32 = 5;
    const VLQ_BASE: i64 = 1 << VLQ_BASE_SHIFT;
    const VLQ_BASE_MASK: i64 = VLQ_BASE - 1;
    const VLQ_CONTINUATION_BIT: i64 = VLQ_BASE;

    pub fn encode(value: i64) -> String {
        let mut out = String::new();
        encode_into(value, &mut out);
        out
    }

    pub fn encode_into(value: i64, out: &mut String) {
        // Sign lives in the least significant bit.
        let mut vlq = if value < 0 {
            ((-value) << 1) | 1
        } else {
            value << 1
        };
        loop {
            let mut digit = vlq & VLQ_BASE_MASK;
            vlq >>= VLQ_BASE_SHIFT;
            if vlq > 0 {
                digit |= VLQ_CONTINUATION_BIT;
            }
            out.push(BASE64_CHARS[digit as usize] as char);
            if vlq == 0 {
                break;
            }
        }
    }

    fn base64_value(byte: u8) -> Option<i64> {
        let value = match byte {
            b'A'..=b'Z' => byte - b'A',
            b'a'..=b'z' => byte - b'a' + 26,
            b'0'..=b'9' => byte - b'0' + 52,
            b'+' => 62,
            b'/' => 63,
            _ => return None,
        };
        Some(i64::from(value))
    }

    /// Decode one value from the front of `input`.
    ///
    /// Returns the value and the number of bytes consumed, or `None` when the
    /// input is empty, truncated or contains a non-Base64 byte.
    pub fn decode(input: &str) -> Option<(i64, usize)> {
        let mut result: i64 = 0;
        let mut shift = 0u32;
        for (i, &byte) in input.as_bytes().iter().enumerate() {
            let digit = base64_value(byte)?;
            result += (digit & VLQ_BASE_MASK) << shift;
            if digit & VLQ_CONTINUATION_BIT == 0 {
                let negative = result & 1 == 1;
                let magnitude = result >> 1;
                let value = if negative { -magnitude } else { magnitude };
                return Some((value, i + 1));
            }
            shift += VLQ_BASE_SHIFT;
            if shift > 60 {
                return None;
            }
        }
        None
    }
}

/// A single generated-to-original mapping. All coordinates are zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mapping {
    pub generated_line: u32,
    pub generated_column: u32,
    pub source: u32,
    pub original_line: u32,
    pub original_column: u32,
    pub name: Option<u32>,
}

/// Serialized source map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMap {
    pub version: u32,
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    pub sources: Vec<String>,
    pub names: Vec<String>,
    pub mappings: String,
}

impl SourceMap {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

pub struct SourceMapGenerator {
    file: String,
    source_root: Option<String>,
    sources: Vec<String>,
    source_lookup: FxHashMap<String, u32>,
    names: Vec<String>,
    name_lookup: FxHashMap<String, u32>,
    mappings: Vec<Mapping>,
}

impl SourceMapGenerator {
    pub fn new(file: impl Into<String>) -> Self {
        SourceMapGenerator {
            file: file.into(),
            source_root: None,
            sources: Vec::new(),
            source_lookup: FxHashMap::default(),
            names: Vec::new(),
            name_lookup: FxHashMap::default(),
            mappings: Vec::new(),
        }
    }

    pub fn set_source_root(&mut self, source_root: Option<String>) {
        self.source_root = source_root;
    }

    /// Register a source path, returning its index in `sources`.
    pub fn add_source(&mut self, path: &str) -> u32 {
        if let Some(&index) = self.source_lookup.get(path) {
            return index;
        }
        let index = self.sources.len() as u32;
        self.sources.push(path.to_string());
        self.source_lookup.insert(path.to_string(), index);
        index
    }

    /// Register a symbol name, returning its index in `names`.
    pub fn add_name(&mut self, name: &str) -> u32 {
        if let Some(&index) = self.name_lookup.get(name) {
            return index;
        }
        let index = self.names.len() as u32;
        self.names.push(name.to_string());
        self.name_lookup.insert(name.to_string(), index);
        index
    }

    /// Add a mapping. A mapping identical in origin to the previous one on the
    /// same generated line is coalesced away.
    pub fn add_mapping(&mut self, mapping: Mapping) {
        if let Some(last) = self.mappings.last()
            && last.generated_line == mapping.generated_line
            && last.source == mapping.source
            && last.original_line == mapping.original_line
            && last.original_column == mapping.original_column
            && last.name == mapping.name
        {
            return;
        }
        self.mappings.push(mapping);
    }

    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    pub fn generate(&self) -> SourceMap {
        SourceMap {
            version: 3,
            file: self.file.clone(),
            source_root: self.source_root.clone(),
            sources: self.sources.clone(),
            names: self.names.clone(),
            mappings: self.encode_mappings(),
        }
    }

    fn encode_mappings(&self) -> String {
        let mut sorted = self.mappings.clone();
        sorted.sort_by_key(|m| (m.generated_line, m.generated_column));

        let mut out = String::new();
        let mut line = 0u32;
        let mut prev_column = 0i64;
        let mut prev_source = 0i64;
        let mut prev_original_line = 0i64;
        let mut prev_original_column = 0i64;
        let mut prev_name = 0i64;
        let mut first_on_line = true;

        for mapping in &sorted {
            while line < mapping.generated_line {
                out.push(';');
                line += 1;
                prev_column = 0;
                first_on_line = true;
            }
            if !first_on_line {
                out.push(',');
            }
            first_on_line = false;

            let column = i64::from(mapping.generated_column);
            let source = i64::from(mapping.source);
            let original_line = i64::from(mapping.original_line);
            let original_column = i64::from(mapping.original_column);

            vlq::encode_into(column - prev_column, &mut out);
            vlq::encode_into(source - prev_source, &mut out);
            vlq::encode_into(original_line - prev_original_line, &mut out);
            vlq::encode_into(original_column - prev_original_column, &mut out);
            if let Some(name) = mapping.name {
                let name = i64::from(name);
                vlq::encode_into(name - prev_name, &mut out);
                prev_name = name;
            }

            prev_column = column;
            prev_source = source;
            prev_original_line = original_line;
            prev_original_column = original_column;
        }
        out
    }
}
