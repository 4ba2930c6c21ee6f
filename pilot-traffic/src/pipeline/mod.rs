//! the filter → aggregate → geocode → colorize pipeline that turns a loaded
//! traffic dataset into the cells, overlay and camera center of one render.
mod aggregate;
mod color_scale;
mod dashboard_ops;
mod dashboard_outcome;
mod dashboard_request;
mod filter;
mod geocode;
mod overlay;
mod traffic_dataset;

pub use aggregate::aggregate_by_traffic_cell;
pub use color_scale::{ColorScale, CountRange};
pub use dashboard_ops::{list_cells, run_dashboard};
pub use dashboard_outcome::{DashboardOutcome, DashboardView};
pub use dashboard_request::DashboardRequest;
pub use filter::filter_records;
pub use geocode::{geocode_cells, CellGeocoder, H3Geocoder};
pub use overlay::{build_overlay, Overlay};
pub use traffic_dataset::TrafficDataset;
