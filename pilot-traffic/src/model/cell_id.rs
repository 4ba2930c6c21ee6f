use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// identifier of a resolution 8 H3 cell, kept in its hexadecimal string form
/// as it appears in the traffic dataset.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CellId(String);

impl CellId {
    pub fn new(id: impl Into<String>) -> CellId {
        CellId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CellId {
    fn from(value: &str) -> Self {
        CellId(value.to_string())
    }
}
