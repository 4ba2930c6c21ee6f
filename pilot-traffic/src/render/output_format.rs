use std::{fmt::Display, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// encoding of a rendered dashboard
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// deck.gl JSON document
    Json,
    /// standalone web page drawing the document
    Html,
}

impl OutputFormat {
    /// html for `.html`/`.htm` files, otherwise json.
    pub fn from_path(path: &Path) -> OutputFormat {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") => {
                OutputFormat::Html
            }
            _ => OutputFormat::Json,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
