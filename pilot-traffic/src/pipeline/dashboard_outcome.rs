use chrono::NaiveDate;
use geo::Point;

use super::{DashboardRequest, Overlay};
use crate::model::GeocodedCell;

/// everything needed to draw one render of the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView {
    pub request: DashboardRequest,
    /// every aggregated cell of the filtered set, busiest first
    pub cells: Vec<GeocodedCell>,
    /// the cells drawn on the traffic layer
    pub selected_cells: Vec<GeocodedCell>,
    pub overlay: Option<Overlay>,
    /// mean destination of the filtered records, x = longitude, y = latitude
    pub center: Point<f64>,
    pub total_visitors: u64,
    pub record_count: usize,
}

/// result of running the dashboard pipeline. having no traffic for the
/// chosen date and hour is reported, not raised.
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardOutcome {
    NoData { date: NaiveDate, hour: u8 },
    Ready(Box<DashboardView>),
}

impl DashboardOutcome {
    pub fn message(&self) -> String {
        match self {
            DashboardOutcome::NoData { date, hour } => {
                format!("no traffic data for {date} at hour {hour}")
            }
            DashboardOutcome::Ready(view) => format!(
                "{} cells with {} visitors on {} at hour {}",
                view.cells.len(),
                view.total_visitors,
                view.request.date,
                view.request.hour
            ),
        }
    }
}
