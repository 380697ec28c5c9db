//! Common enums shared by the transpiler crates.

use serde::{Deserialize, Serialize};

/// Line terminator used for every line break the transpiler synthesizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewLineKind {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
}

impl NewLineKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            NewLineKind::Lf => "\n",
            NewLineKind::Crlf => "\r\n",
        }
    }
}
