use chrono::NaiveDate;
use geo::{Centroid, MultiPoint, Point};
use itertools::Itertools;

use super::{
    aggregate_by_traffic_cell, build_overlay, geocode_cells, CellGeocoder, ColorScale,
    DashboardOutcome, DashboardRequest, DashboardView, TrafficDataset,
};
use crate::model::{GeocodedCell, Selection, TrafficError, TrafficRecord};

/// runs the full pipeline for one set of dashboard controls. the dataset is
/// only borrowed so that it can be reused across renders.
pub fn run_dashboard(
    dataset: &TrafficDataset,
    request: &DashboardRequest,
    scale: &ColorScale,
    geocoder: &dyn CellGeocoder,
) -> Result<DashboardOutcome, TrafficError> {
    let filtered = dataset.filter(request.date, request.hour);
    if filtered.is_empty() {
        log::warn!(
            "no traffic data in {} for {} at hour {}",
            dataset.source(),
            request.date,
            request.hour
        );
        return Ok(DashboardOutcome::NoData {
            date: request.date,
            hour: request.hour,
        });
    }

    let aggregated = aggregate_by_traffic_cell(&filtered);
    let total_visitors: u64 = aggregated.iter().map(|c| c.count_visitor).sum();
    let cells = geocode_cells(&aggregated, scale, geocoder)?;
    let selected_cells = select_cells(&cells, request)?;
    let overlay = build_overlay(
        &filtered,
        &request.selection,
        request.show_overlay,
        geocoder,
    )?;
    let center = mean_destination(&filtered)?;

    log::info!(
        "{} records on {} at hour {} aggregated into {} cells, selection: {}",
        filtered.len(),
        request.date,
        request.hour,
        cells.len(),
        request.selection
    );

    Ok(DashboardOutcome::Ready(Box::new(DashboardView {
        request: request.clone(),
        cells,
        selected_cells,
        overlay,
        center,
        total_visitors,
        record_count: filtered.len(),
    })))
}

/// the aggregated cells for a date and hour, busiest first, as offered by
/// the cell selector. empty when there is no traffic.
pub fn list_cells(
    dataset: &TrafficDataset,
    date: NaiveDate,
    hour: u8,
    scale: &ColorScale,
    geocoder: &dyn CellGeocoder,
) -> Result<Vec<GeocodedCell>, TrafficError> {
    let filtered = dataset.filter(date, hour);
    let aggregated = aggregate_by_traffic_cell(&filtered);
    geocode_cells(&aggregated, scale, geocoder)
}

fn select_cells(
    cells: &[GeocodedCell],
    request: &DashboardRequest,
) -> Result<Vec<GeocodedCell>, TrafficError> {
    match &request.selection {
        Selection::All => Ok(cells.to_vec()),
        Selection::One(selected) => {
            let found = cells.iter().filter(|c| &c.h3 == selected).cloned().collect_vec();
            if found.is_empty() {
                Err(TrafficError::UnknownCellError {
                    cell: selected.to_string(),
                    date: request.date,
                    hour: request.hour,
                })
            } else {
                Ok(found)
            }
        }
    }
}

/// the camera centers on the average destination of every filtered record,
/// regardless of the selection.
fn mean_destination(records: &[&TrafficRecord]) -> Result<Point<f64>, TrafficError> {
    let points: MultiPoint<f64> = records
        .iter()
        .map(|r| Point::new(r.dest_lon, r.dest_lat))
        .collect_vec()
        .into();
    points.centroid().ok_or_else(|| {
        TrafficError::OtherError(String::from(
            "unable to compute map center of an empty record set",
        ))
    })
}
