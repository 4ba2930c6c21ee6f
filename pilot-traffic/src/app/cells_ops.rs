use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    model::{GeocodedCell, Rgba, TrafficError},
    util::output_ops,
};

/// a row of the cell listing CSV:
/// h3,lat,lon,count_visitor,r,g,b,a
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CellRow {
    pub h3: String,
    pub lat: f64,
    pub lon: f64,
    pub count_visitor: u64,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<&GeocodedCell> for CellRow {
    fn from(cell: &GeocodedCell) -> Self {
        let color = cell.color.unwrap_or(Rgba::new(0, 0, 0, 0));
        CellRow {
            h3: cell.h3.to_string(),
            lat: cell.lat,
            lon: cell.lon,
            count_visitor: cell.count_visitor,
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }
}

/// writes the cell listing to a CSV file, or to stdout.
pub fn write_cells(cells: &[GeocodedCell], output_file: Option<&Path>) -> Result<(), TrafficError> {
    match output_file {
        Some(path) => {
            output_ops::ensure_parent_dir(path)?;
            let mut writer = csv::Writer::from_path(path)?;
            write_rows(&mut writer, cells)?;
            log::info!("wrote {} cells to {}", cells.len(), path.display());
            Ok(())
        }
        None => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            write_rows(&mut writer, cells)
        }
    }
}

fn write_rows<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    cells: &[GeocodedCell],
) -> Result<(), TrafficError> {
    if cells.is_empty() {
        writer.write_record(["h3", "lat", "lon", "count_visitor", "r", "g", "b", "a"])?;
    }
    for cell in cells.iter() {
        writer.serialize(CellRow::from(cell))?;
    }
    writer.flush()?;
    Ok(())
}
