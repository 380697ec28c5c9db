//! File-level entry point.
//!
//! The printer builds one [`TranspileState`] per file, walks the body, and
//! folds the resulting [`SourceNode`]s into output text and a source map in a
//! single pass.

use crate::ast::Body;
use crate::helpers::HelpersNeeded;
use crate::namespace::{NamespaceResolver, NoNamespaces};
use crate::options::TranspileOptions;
use crate::source_node::SourceNode;
use crate::transpile_state::TranspileState;
use bsx_common::source_map::{Mapping, SourceMap, SourceMapGenerator};
use tracing::{debug, debug_span};

static NO_NAMESPACES: NoNamespaces = NoNamespaces;

/// Result of transpiling one file.
#[derive(Clone, Debug)]
pub struct PrintOutput {
    pub code: String,
    pub source_map: Option<SourceMap>,
    /// Runtime helpers the code calls.
    pub helpers: HelpersNeeded,
}

pub struct Printer<'r> {
    options: TranspileOptions,
    resolver: &'r dyn NamespaceResolver,
}

impl Printer<'static> {
    /// A printer that performs no namespace rewriting.
    pub fn new(options: TranspileOptions) -> Self {
        Printer {
            options,
            resolver: &NO_NAMESPACES,
        }
    }
}

impl<'r> Printer<'r> {
    pub fn with_resolver(options: TranspileOptions, resolver: &'r dyn NamespaceResolver) -> Self {
        Printer { options, resolver }
    }

    pub fn options(&self) -> &TranspileOptions {
        &self.options
    }

    /// Transpile `body`, read from `source_path`, into the file `output_path`.
    pub fn transpile_file(&self, body: &Body, source_path: &str, output_path: &str) -> PrintOutput {
        let _span = debug_span!("transpile_file", source = source_path).entered();

        let mut state = TranspileState::new(&self.options, self.resolver, source_path);
        let nodes = body.transpile(&mut state);
        let helpers = *state.helpers();

        let (code, source_map) = if self.options.source_map {
            let (code, map) = fold_with_source_map(
                &nodes,
                output_path,
                self.options.source_root.clone(),
            );
            (code, Some(map))
        } else {
            (crate::source_node::to_text(&nodes), None)
        };

        debug!(
            nodes = nodes.len(),
            bytes = code.len(),
            helpers = helpers.any(),
            "transpiled file"
        );
        PrintOutput {
            code,
            source_map,
            helpers,
        }
    }
}

/// Convenience wrapper: transpile without namespace support or a source map.
pub fn print_to_string(body: &Body, options: TranspileOptions) -> String {
    let options = TranspileOptions {
        source_map: false,
        ..options
    };
    Printer::new(options).transpile_file(body, "", "").code
}

/// Concatenate `nodes` and record a mapping at the generated position of
/// every position-tagged fragment. Generated columns count UTF-16 code
/// units, as source map consumers do.
pub fn fold_with_source_map(
    nodes: &[SourceNode],
    file: &str,
    source_root: Option<String>,
) -> (String, SourceMap) {
    let mut generator = SourceMapGenerator::new(file);
    generator.set_source_root(source_root);

    let mut code = String::new();
    let mut line = 0u32;
    let mut column = 0u32;
    for node in nodes {
        if let SourceNode::Mapped {
            position, source, ..
        } = node
        {
            let source = generator.add_source(source);
            generator.add_mapping(Mapping {
                generated_line: line,
                generated_column: column,
                source,
                original_line: position.line,
                original_column: position.column,
                name: None,
            });
        }
        let text = node.text();
        code.push_str(text);
        advance(text, &mut line, &mut column);
    }
    (code, generator.generate())
}

fn advance(text: &str, line: &mut u32, column: &mut u32) {
    for ch in text.chars() {
        if ch == '\n' {
            *line += 1;
            *column = 0;
        } else {
            *column += ch.len_utf16() as u32;
        }
    }
}
