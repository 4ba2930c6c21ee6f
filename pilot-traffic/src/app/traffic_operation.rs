use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{value_parser, Subcommand};
use serde::{Deserialize, Serialize};

use super::{sweep_hours, write_cells};
use crate::{
    config::DashboardConfiguration,
    model::{Selection, TrafficError},
    pipeline::{
        list_cells, run_dashboard, DashboardOutcome, DashboardRequest, H3Geocoder,
        TrafficDataset,
    },
    render::{DeckDocument, OutputFormat},
    util::{date_codec, output_ops},
};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TrafficOperation {
    /// render the traffic map for one date and hour
    Render {
        /// CSV file of hourly traffic records
        #[arg(long)]
        input_file: String,
        /// hour of day to show, defaults to the configured default hour (18)
        #[arg(long, value_parser = value_parser!(u8).range(0..=23))]
        hour: Option<u8>,
        /// date to show as YYYY-MM-DD, defaults to the earliest date in the dataset
        #[arg(long, value_parser = date_codec::parse_date)]
        date: Option<NaiveDate>,
        /// draw home cells and home → traffic arcs for the selected cell
        #[arg(long, default_value_t = false)]
        overlay: bool,
        /// traffic cell to focus on, all cells when omitted
        #[arg(long)]
        cell: Option<String>,
        /// file to write, .html for a web page, JSON otherwise. prints JSON to stdout when omitted
        #[arg(long)]
        output_file: Option<String>,
        /// path to a .toml or .json dashboard configuration
        #[arg(long)]
        configuration_file: Option<String>,
    },
    /// list the traffic cells for one date and hour, busiest first, as CSV
    Cells {
        #[arg(long)]
        input_file: String,
        #[arg(long, value_parser = value_parser!(u8).range(0..=23))]
        hour: Option<u8>,
        #[arg(long, value_parser = date_codec::parse_date)]
        date: Option<NaiveDate>,
        /// CSV file to write, prints to stdout when omitted
        #[arg(long)]
        output_file: Option<String>,
        #[arg(long)]
        configuration_file: Option<String>,
    },
    /// render every hour of a date into a directory, one file per hour
    Sweep {
        #[arg(long)]
        input_file: String,
        #[arg(long, value_parser = date_codec::parse_date)]
        date: Option<NaiveDate>,
        #[arg(long)]
        output_directory: String,
        #[arg(long, default_value_t = false)]
        overlay: bool,
        #[arg(long)]
        cell: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
        #[arg(long)]
        configuration_file: Option<String>,
    },
}

impl TrafficOperation {
    pub fn run(&self) -> Result<(), TrafficError> {
        match self {
            TrafficOperation::Render {
                input_file,
                hour,
                date,
                overlay,
                cell,
                output_file,
                configuration_file,
            } => {
                let conf = DashboardConfiguration::from_optional_file(configuration_file.as_ref())?;
                let dataset = TrafficDataset::from_csv(Path::new(input_file))?;
                let request = DashboardRequest::new(
                    resolve_date(&dataset, date)?,
                    hour.unwrap_or(conf.default_hour),
                )
                .with_selection(Selection::from(cell.as_ref()))
                .with_overlay(*overlay);
                let output_path = output_file.as_ref().map(PathBuf::from);
                render(&dataset, &request, &conf, output_path.as_deref())
            }
            TrafficOperation::Cells {
                input_file,
                hour,
                date,
                output_file,
                configuration_file,
            } => {
                let conf = DashboardConfiguration::from_optional_file(configuration_file.as_ref())?;
                let dataset = TrafficDataset::from_csv(Path::new(input_file))?;
                let date = resolve_date(&dataset, date)?;
                let hour = hour.unwrap_or(conf.default_hour);
                let cells = list_cells(&dataset, date, hour, &conf.color_scale, &H3Geocoder)?;
                if cells.is_empty() {
                    log::warn!("no traffic data for {date} at hour {hour}");
                }
                let output_path = output_file.as_ref().map(PathBuf::from);
                write_cells(&cells, output_path.as_deref())
            }
            TrafficOperation::Sweep {
                input_file,
                date,
                output_directory,
                overlay,
                cell,
                format,
                configuration_file,
            } => {
                let conf = DashboardConfiguration::from_optional_file(configuration_file.as_ref())?;
                let dataset = TrafficDataset::from_csv(Path::new(input_file))?;
                let date = resolve_date(&dataset, date)?;
                let summary = sweep_hours(
                    &dataset,
                    date,
                    &Selection::from(cell.as_ref()),
                    *overlay,
                    format,
                    &conf,
                    Path::new(output_directory),
                )?;
                eprintln!("{summary}");
                Ok(())
            }
        }
    }
}

fn resolve_date(
    dataset: &TrafficDataset,
    date: &Option<NaiveDate>,
) -> Result<NaiveDate, TrafficError> {
    match date {
        Some(d) => Ok(*d),
        None => dataset.min_date(),
    }
}

/// runs one render and writes it. no data for the date and hour is
/// reported and nothing is written.
fn render(
    dataset: &TrafficDataset,
    request: &DashboardRequest,
    conf: &DashboardConfiguration,
    output_file: Option<&Path>,
) -> Result<(), TrafficError> {
    let outcome = run_dashboard(dataset, request, &conf.color_scale, &H3Geocoder)?;
    match &outcome {
        DashboardOutcome::NoData { .. } => {
            eprintln!("{}", outcome.message());
            Ok(())
        }
        DashboardOutcome::Ready(view) => {
            let doc = DeckDocument::from_view(view, conf);
            let format = output_file
                .map(OutputFormat::from_path)
                .unwrap_or(OutputFormat::Json);
            let contents = doc.encode(&format)?;
            output_ops::write_output(output_file, &contents)?;
            log::info!("{}", outcome.message());
            Ok(())
        }
    }
}
