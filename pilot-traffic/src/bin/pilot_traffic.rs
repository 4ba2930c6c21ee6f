//! renders hourly visitor traffic aggregated on H3 cells as deck.gl maps,
//! with optional home → traffic arcs for a selected cell.
use clap::Parser;
use pilot_traffic::app::TrafficApp;

fn main() {
    env_logger::init();
    let args = TrafficApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("pilot-traffic failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
