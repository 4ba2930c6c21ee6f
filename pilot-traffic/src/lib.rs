pub mod app;
pub mod config;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod util;
