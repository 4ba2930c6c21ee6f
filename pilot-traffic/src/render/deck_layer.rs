use serde::Serialize;

use crate::model::{ArcSegment, GeocodedCell, Rgba};

pub const TRAFFIC_LAYER_ID: &str = "traffic";
pub const HOME_LAYER_ID: &str = "home";
pub const ARC_LAYER_ID: &str = "home-traffic-arc";

/// a color that is either read from a field of each datum or fixed for the
/// whole layer.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ColorAccessor {
    Field(String),
    Constant(Rgba),
}

impl ColorAccessor {
    pub fn field(name: &str) -> ColorAccessor {
        ColorAccessor::Field(format!("@@={name}"))
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct H3HexagonLayer {
    pub id: String,
    pub data: Vec<GeocodedCell>,
    pub get_hexagon: String,
    pub get_fill_color: ColorAccessor,
    pub extruded: bool,
    pub pickable: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArcLayer {
    pub id: String,
    pub data: Vec<ArcSegment>,
    pub get_source_position: String,
    pub get_target_position: String,
    pub get_source_color: Rgba,
    pub get_target_color: Rgba,
    pub get_width: f64,
    pub pickable: bool,
    pub auto_highlight: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "@@type")]
pub enum DeckLayer {
    H3HexagonLayer(H3HexagonLayer),
    ArcLayer(ArcLayer),
}

impl DeckLayer {
    /// hexagons of the selected traffic cells, colored by visitor count.
    pub fn traffic(cells: &[GeocodedCell]) -> DeckLayer {
        DeckLayer::H3HexagonLayer(H3HexagonLayer {
            id: String::from(TRAFFIC_LAYER_ID),
            data: cells.to_vec(),
            get_hexagon: String::from("@@=h3"),
            get_fill_color: ColorAccessor::field("color"),
            extruded: false,
            pickable: true,
        })
    }

    /// hexagons of the visitors' home cells, all drawn with the same fill.
    pub fn home(cells: &[GeocodedCell], fill_color: Rgba) -> DeckLayer {
        DeckLayer::H3HexagonLayer(H3HexagonLayer {
            id: String::from(HOME_LAYER_ID),
            data: cells.to_vec(),
            get_hexagon: String::from("@@=h3"),
            get_fill_color: ColorAccessor::Constant(fill_color),
            extruded: false,
            pickable: false,
        })
    }

    pub fn arcs(arcs: &[ArcSegment], source: Rgba, target: Rgba, width: f64) -> DeckLayer {
        DeckLayer::ArcLayer(ArcLayer {
            id: String::from(ARC_LAYER_ID),
            data: arcs.to_vec(),
            get_source_position: String::from("@@=[origin_lon, origin_lat]"),
            get_target_position: String::from("@@=[dest_lon, dest_lat]"),
            get_source_color: source,
            get_target_color: target,
            get_width: width,
            pickable: true,
            auto_highlight: true,
        })
    }

    pub fn id(&self) -> &str {
        match self {
            DeckLayer::H3HexagonLayer(layer) => &layer.id,
            DeckLayer::ArcLayer(layer) => &layer.id,
        }
    }
}
