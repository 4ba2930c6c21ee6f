mod dashboard_config;

pub use dashboard_config::{DashboardConfiguration, ViewConfiguration};
