use super::TrafficOperation;
use clap::Parser;

/// command line tool for rendering hourly visitor traffic on H3 cells as
/// deck.gl maps
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TrafficApp {
    #[command(subcommand)]
    pub op: TrafficOperation,
}
