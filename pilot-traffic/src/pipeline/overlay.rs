use itertools::Itertools;

use super::CellGeocoder;
use crate::model::{ArcSegment, GeocodedCell, Selection, TrafficError, TrafficRecord};

/// home cells and trip arcs of the visitors to a single traffic cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    /// distinct home cells in the order they first appear
    pub home_cells: Vec<GeocodedCell>,
    /// one arc per matching record
    pub arcs: Vec<ArcSegment>,
}

/// builds the home → traffic overlay. only a single selected cell has an
/// overlay: with [`Selection::All`] there is no meaningful set of arcs, so
/// nothing is computed even when `show_overlay` is set.
pub fn build_overlay(
    filtered: &[&TrafficRecord],
    selection: &Selection,
    show_overlay: bool,
    geocoder: &dyn CellGeocoder,
) -> Result<Option<Overlay>, TrafficError> {
    let selected = match (selection, show_overlay) {
        (Selection::One(cell), true) => cell,
        _ => return Ok(None),
    };
    let matching = filtered
        .iter()
        .filter(|r| &r.traffic_h3_8 == selected)
        .collect_vec();

    let home_cells = matching
        .iter()
        .map(|r| &r.home_h3_8)
        .unique()
        .map(|h3| {
            let point = geocoder.centroid(h3)?;
            Ok(GeocodedCell {
                h3: h3.clone(),
                lat: point.y(),
                lon: point.x(),
                count_visitor: 0,
                color: None,
            })
        })
        .collect::<Result<Vec<_>, TrafficError>>()?;
    let arcs = matching.iter().map(|r| ArcSegment::from(**r)).collect_vec();

    log::debug!(
        "overlay for {selected}: {} home cells, {} arcs",
        home_cells.len(),
        arcs.len()
    );
    Ok(Some(Overlay { home_cells, arcs }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellId;
    use crate::pipeline::H3Geocoder;
    use chrono::NaiveDate;

    const TRAFFIC_A: &str = "8828308281fffff";
    const TRAFFIC_B: &str = "8828308283fffff";
    const HOME_1: &str = "8828308285fffff";
    const HOME_2: &str = "8828308287fffff";

    fn record(traffic: &str, home: &str, origin_lat: f64) -> TrafficRecord {
        TrafficRecord {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            hour: 18,
            traffic_h3_8: CellId::from(traffic),
            home_h3_8: CellId::from(home),
            count_visitor: 1,
            origin_lat,
            origin_lon: -122.4,
            dest_lat: 37.77,
            dest_lon: -122.41,
        }
    }

    fn records() -> Vec<TrafficRecord> {
        vec![
            record(TRAFFIC_A, HOME_2, 1.0),
            record(TRAFFIC_B, HOME_1, 2.0),
            record(TRAFFIC_A, HOME_1, 3.0),
            record(TRAFFIC_A, HOME_2, 4.0),
        ]
    }

    #[test]
    fn test_single_cell_with_overlay() {
        let records = records();
        let refs = records.iter().collect_vec();
        let selection = Selection::One(CellId::from(TRAFFIC_A));
        let overlay = build_overlay(&refs, &selection, true, &H3Geocoder)
            .unwrap()
            .unwrap();
        let homes = overlay.home_cells.iter().map(|c| c.h3.as_str()).collect_vec();
        assert_eq!(homes, vec![HOME_2, HOME_1]);
        assert!(overlay.home_cells.iter().all(|c| c.color.is_none()));
        assert!(overlay.home_cells.iter().all(|c| c.count_visitor == 0));
        let origins = overlay.arcs.iter().map(|a| a.origin_lat).collect_vec();
        assert_eq!(origins, vec![1.0, 3.0, 4.0]);
    }

    #[test]
    fn test_flag_off() {
        let records = records();
        let refs = records.iter().collect_vec();
        let selection = Selection::One(CellId::from(TRAFFIC_A));
        let overlay = build_overlay(&refs, &selection, false, &H3Geocoder).unwrap();
        assert!(overlay.is_none());
    }

    #[test]
    fn test_all_cells_never_has_overlay() {
        let records = records();
        let refs = records.iter().collect_vec();
        let overlay = build_overlay(&refs, &Selection::All, true, &H3Geocoder).unwrap();
        assert!(overlay.is_none());
    }

    #[test]
    fn test_invalid_home_cell_is_fatal() {
        let records = vec![record(TRAFFIC_A, "bogus", 1.0)];
        let refs = records.iter().collect_vec();
        let selection = Selection::One(CellId::from(TRAFFIC_A));
        let result = build_overlay(&refs, &selection, true, &H3Geocoder);
        assert!(matches!(result, Err(TrafficError::GeocodeError { .. })));
    }
}
