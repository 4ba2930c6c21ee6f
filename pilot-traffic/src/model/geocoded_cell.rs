use serde::{Deserialize, Serialize};

use super::{CellId, Rgba};

/// a cell placed on the map. home cell markers carry no color and a zero
/// count since they are drawn with a fixed layer fill.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GeocodedCell {
    pub h3: CellId,
    pub lat: f64,
    pub lon: f64,
    pub count_visitor: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<Rgba>,
}
