mod aggregated_cell;
mod arc_segment;
mod cell_id;
mod geocoded_cell;
mod rgba;
mod selection;
mod traffic_error;
mod traffic_record;

pub use aggregated_cell::AggregatedCell;
pub use arc_segment::ArcSegment;
pub use cell_id::CellId;
pub use geocoded_cell::GeocodedCell;
pub use rgba::Rgba;
pub use selection::Selection;
pub use traffic_error::TrafficError;
pub use traffic_record::{TrafficRecord, TrafficRow};
