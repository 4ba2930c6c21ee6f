use std::fmt::Display;

use super::CellId;

/// which aggregated cells are drawn on the traffic layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// every cell with traffic for the chosen date and hour
    #[default]
    All,
    /// a single traffic cell, which also enables the home/arc overlay
    One(CellId),
}

impl Selection {
    pub fn includes(&self, cell: &CellId) -> bool {
        match self {
            Selection::All => true,
            Selection::One(selected) => selected == cell,
        }
    }
}

impl From<Option<&String>> for Selection {
    fn from(value: Option<&String>) -> Self {
        match value {
            Some(cell) if !cell.trim().is_empty() => Selection::One(CellId::from(cell.trim())),
            _ => Selection::All,
        }
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::All => write!(f, "all"),
            Selection::One(cell) => write!(f, "{cell}"),
        }
    }
}
