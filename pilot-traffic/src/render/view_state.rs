use geo::Point;
use serde::{Deserialize, Serialize};

use crate::config::ViewConfiguration;

/// initial camera of the map.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

impl ViewState {
    pub fn new(center: &Point<f64>, view: &ViewConfiguration) -> ViewState {
        ViewState {
            latitude: center.y(),
            longitude: center.x(),
            zoom: view.zoom,
            pitch: view.pitch,
            bearing: view.bearing,
        }
    }
}
