mod cells_ops;
mod sweep_ops;
mod traffic_app;
mod traffic_operation;

pub use cells_ops::{write_cells, CellRow};
pub use sweep_ops::{sweep_hours, SweepSummary};
pub use traffic_app::TrafficApp;
pub use traffic_operation::TrafficOperation;
