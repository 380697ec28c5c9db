//! Diagnostics output for hosts that embed the transpiler.
//!
//! The core only emits `tracing` events: one `debug` span per transpiled
//! file, `trace` events for namespace rewrites and for each `?:` / `??`
//! lowering decision. A host that has no subscriber of its own calls
//! [`init_tracing`] once at startup:
//!
//! ```no_run
//! bsx::tracing_config::init_tracing();
//! let body = bsx::ast::Body::new(Vec::new());
//! let output = bsx::Printer::new(bsx::TranspileOptions::default())
//!     .transpile_file(&body, "source/main.bs", "source/main.brs");
//! # let _ = output;
//! ```
//!
//! `BSX_LOG` holds the filter (`RUST_LOG` is the fallback), e.g.
//! `BSX_LOG=bsx_emitter::lowering=trace` for lowering decisions only.
//! `BSX_LOG_FORMAT` picks the layout: `text` (default), `tree` to nest
//! lowering events under their file span, or `json` for build tooling.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const FILTER_VAR: &str = "BSX_LOG";
const FORMAT_VAR: &str = "BSX_LOG_FORMAT";

/// Layout of the diagnostics written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One line per event.
    Text,
    /// Events indented under the file span they belong to.
    Tree,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse a `BSX_LOG_FORMAT` value. Unknown values fall back to text.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// The filter directives to use, or `None` when diagnostics are off.
fn filter_directives() -> Option<String> {
    std::env::var(FILTER_VAR)
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .ok()
}

/// Install a stderr subscriber configured from `BSX_LOG` / `BSX_LOG_FORMAT`.
///
/// Returns `false` without touching global state when neither filter
/// variable is set or when the host already installed a subscriber.
pub fn init_tracing() -> bool {
    let Some(directives) = filter_directives() else {
        return false;
    };
    let filter = EnvFilter::builder().parse_lossy(directives);
    let format = LogFormat::parse(&std::env::var(FORMAT_VAR).unwrap_or_default());

    let installed = match format {
        LogFormat::Tree => Registry::default()
            .with(filter)
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_indent_lines(true)
                    .with_targets(true),
            )
            .try_init(),
        LogFormat::Json => Registry::default()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => Registry::default()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Text);
    }
}
