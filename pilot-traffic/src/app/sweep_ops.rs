use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use itertools::Itertools;
use kdam::tqdm;

use crate::{
    config::DashboardConfiguration,
    model::{Selection, TrafficError},
    pipeline::{run_dashboard, DashboardOutcome, DashboardRequest, H3Geocoder, TrafficDataset},
    render::{DeckDocument, OutputFormat},
    util::output_ops,
};

/// files written by an hourly sweep and the hours that had nothing to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepSummary {
    pub date: NaiveDate,
    pub written: Vec<PathBuf>,
    pub skipped_hours: Vec<u8>,
}

impl Display for SweepSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: wrote {} hourly maps, skipped hours [{}]",
            self.date,
            self.written.len(),
            self.skipped_hours.iter().join(", ")
        )
    }
}

/// renders each hour of `date` from the same loaded dataset. hours with no
/// traffic, or where the selected cell has no traffic, are skipped.
pub fn sweep_hours(
    dataset: &TrafficDataset,
    date: NaiveDate,
    selection: &Selection,
    show_overlay: bool,
    format: &OutputFormat,
    conf: &DashboardConfiguration,
    output_directory: &Path,
) -> Result<SweepSummary, TrafficError> {
    if !output_directory.exists() {
        std::fs::create_dir_all(output_directory)?;
    }
    let mut written = vec![];
    let mut skipped_hours = vec![];
    for hour in tqdm!(0..24_u8, desc = format!("rendering {date}")) {
        let request = DashboardRequest::new(date, hour)
            .with_selection(selection.clone())
            .with_overlay(show_overlay);
        match run_dashboard(dataset, &request, &conf.color_scale, &H3Geocoder) {
            Ok(DashboardOutcome::Ready(view)) => {
                let doc = DeckDocument::from_view(&view, conf);
                let filename = format!("traffic_{date}_{hour:02}.{}", format.extension());
                let path = output_directory.join(filename);
                output_ops::write_output(Some(path.as_path()), &doc.encode(format)?)?;
                written.push(path);
            }
            Ok(DashboardOutcome::NoData { .. }) => skipped_hours.push(hour),
            Err(TrafficError::UnknownCellError { cell, .. }) => {
                log::info!("cell {cell} has no traffic at hour {hour}, skipping");
                skipped_hours.push(hour);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(SweepSummary {
        date,
        written,
        skipped_hours,
    })
}
