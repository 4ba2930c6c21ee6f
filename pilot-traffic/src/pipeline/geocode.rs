use geo::Point;
use h3o::{CellIndex, LatLng};

use super::{ColorScale, CountRange};
use crate::model::{AggregatedCell, CellId, GeocodedCell, TrafficError};

/// resolves a cell identifier to the point at its center. implementations
/// must be pure: the same id always yields the same point.
pub trait CellGeocoder {
    /// returns the centroid as a point with x = longitude, y = latitude.
    fn centroid(&self, cell: &CellId) -> Result<Point<f64>, TrafficError>;
}

/// geocodes H3 cells via h3o's cell-to-lat/lng.
/// see [[https://h3geo.org/docs/api/indexing#celltolatlng]].
#[derive(Clone, Copy, Debug, Default)]
pub struct H3Geocoder;

impl CellGeocoder for H3Geocoder {
    fn centroid(&self, cell: &CellId) -> Result<Point<f64>, TrafficError> {
        let index = cell
            .as_str()
            .parse::<CellIndex>()
            .map_err(|e| TrafficError::GeocodeError {
                cell: cell.to_string(),
                message: format!("not a valid h3 cell index: {e}"),
            })?;
        let center = LatLng::from(index);
        Ok(Point::new(center.lng(), center.lat()))
    }
}

/// places each aggregated cell at its centroid and colors it by its count
/// relative to the other cells of the set.
pub fn geocode_cells(
    cells: &[AggregatedCell],
    scale: &ColorScale,
    geocoder: &dyn CellGeocoder,
) -> Result<Vec<GeocodedCell>, TrafficError> {
    let range = match CountRange::from_cells(cells) {
        None => return Ok(vec![]),
        Some(range) => range,
    };
    cells
        .iter()
        .map(|cell| {
            let point = geocoder.centroid(&cell.h3)?;
            Ok(GeocodedCell {
                h3: cell.h3.clone(),
                lat: point.y(),
                lon: point.x(),
                count_visitor: cell.count_visitor,
                color: Some(scale.color(cell.count_visitor, &range)),
            })
        })
        .collect::<Result<Vec<_>, TrafficError>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rgba;

    #[test]
    fn test_h3_centroid() {
        let point = H3Geocoder
            .centroid(&CellId::from("8828308281fffff"))
            .unwrap();
        // San Francisco
        assert!(point.y() > 37.7 && point.y() < 37.85, "lat {}", point.y());
        assert!(point.x() > -122.5 && point.x() < -122.35, "lon {}", point.x());
    }

    #[test]
    fn test_h3_centroid_is_deterministic() {
        let cell = CellId::from("8828308283fffff");
        let a = H3Geocoder.centroid(&cell).unwrap();
        let b = H3Geocoder.centroid(&cell).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_h3_invalid_cell() {
        let result = H3Geocoder.centroid(&CellId::from("not-a-cell"));
        match result {
            Err(TrafficError::GeocodeError { cell, .. }) => assert_eq!(cell, "not-a-cell"),
            other => panic!("expected GeocodeError, found {other:?}"),
        }
    }

    #[test]
    fn test_geocode_cells_colors_by_range() {
        let cells = vec![
            AggregatedCell {
                h3: CellId::from("8828308283fffff"),
                count_visitor: 15,
            },
            AggregatedCell {
                h3: CellId::from("8828308281fffff"),
                count_visitor: 5,
            },
        ];
        let result = geocode_cells(&cells, &ColorScale::default(), &H3Geocoder).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].h3, CellId::from("8828308283fffff"));
        assert_eq!(result[0].color, Some(Rgba::new(255, 50, 50, 180)));
        assert_eq!(result[1].color, Some(Rgba::new(255, 180, 180, 180)));
        assert!(result[0].lat != result[1].lat || result[0].lon != result[1].lon);
    }

    #[test]
    fn test_geocode_no_cells() {
        let result = geocode_cells(&[], &ColorScale::default(), &H3Geocoder).unwrap();
        assert!(result.is_empty());
    }
}
