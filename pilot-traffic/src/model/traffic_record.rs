use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CellId, TrafficError};
use crate::util::date_codec;

/// a row of the traffic dataset as written in the source CSV.
///
/// CSV rows as currently defined (extra columns are ignored):
/// date,hour,traffic_h3_8,home_h3_8,count_visitor,origin_lat,origin_lon,dest_lat,dest_lon
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TrafficRow {
    #[serde(deserialize_with = "date_codec::deserialize_naive_date")]
    pub date: NaiveDate,
    pub hour: i64,
    pub traffic_h3_8: CellId,
    pub home_h3_8: CellId,
    pub count_visitor: u64,
    pub origin_lat: f64,
    pub origin_lon: f64,
    pub dest_lat: f64,
    pub dest_lon: f64,
}

/// visitors observed in a traffic cell during one hour of one day, along
/// with the home cell they came from and the trip endpoints.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TrafficRecord {
    pub date: NaiveDate,
    pub hour: u8,
    pub traffic_h3_8: CellId,
    pub home_h3_8: CellId,
    pub count_visitor: u64,
    pub origin_lat: f64,
    pub origin_lon: f64,
    pub dest_lat: f64,
    pub dest_lon: f64,
}

impl TrafficRecord {
    /// validates a raw row. `row_idx` is the 0-based data row index, used in
    /// error messages.
    pub fn try_from_row(row: TrafficRow, row_idx: usize) -> Result<TrafficRecord, TrafficError> {
        let hour = u8::try_from(row.hour)
            .ok()
            .filter(|h| *h <= 23)
            .ok_or(TrafficError::InvalidHourError {
                row: row_idx,
                hour: row.hour,
            })?;
        Ok(TrafficRecord {
            date: row.date,
            hour,
            traffic_h3_8: row.traffic_h3_8,
            home_h3_8: row.home_h3_8,
            count_visitor: row.count_visitor,
            origin_lat: row.origin_lat,
            origin_lon: row.origin_lon,
            dest_lat: row.dest_lat,
            dest_lon: row.dest_lon,
        })
    }
}
