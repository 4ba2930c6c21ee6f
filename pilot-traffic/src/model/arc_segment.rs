use serde::{Deserialize, Serialize};

use super::TrafficRecord;

/// trip endpoints of a single traffic record, drawn as an arc from the
/// origin to the destination.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ArcSegment {
    pub origin_lat: f64,
    pub origin_lon: f64,
    pub dest_lat: f64,
    pub dest_lon: f64,
}

impl From<&TrafficRecord> for ArcSegment {
    fn from(record: &TrafficRecord) -> Self {
        ArcSegment {
            origin_lat: record.origin_lat,
            origin_lon: record.origin_lon,
            dest_lat: record.dest_lat,
            dest_lon: record.dest_lon,
        }
    }
}
