use std::{io::Read, path::Path};

use chrono::NaiveDate;
use itertools::Itertools;

use super::filter_records;
use crate::model::{TrafficError, TrafficRecord, TrafficRow};

/// the full set of traffic records, read once and reused by every render.
#[derive(Clone, Debug)]
pub struct TrafficDataset {
    source: String,
    records: Vec<TrafficRecord>,
}

impl TrafficDataset {
    pub fn new(source: &str, records: Vec<TrafficRecord>) -> TrafficDataset {
        TrafficDataset {
            source: source.to_string(),
            records,
        }
    }

    /// reads a traffic CSV file. any malformed row, including a missing
    /// column, fails the whole load.
    pub fn from_csv(path: &Path) -> Result<TrafficDataset, TrafficError> {
        let source = path.to_str().unwrap_or_default().to_string();
        log::info!("reading traffic dataset from {source}");
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;
        let dataset = Self::from_csv_reader(reader, &source)?;
        log::info!(
            "loaded {} traffic records covering {} dates",
            dataset.records.len(),
            dataset.dates().len()
        );
        Ok(dataset)
    }

    /// reads traffic CSV content from any reader, `source` names it in logs
    /// and errors.
    pub fn from_reader<R: Read>(rdr: R, source: &str) -> Result<TrafficDataset, TrafficError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(rdr);
        Self::from_csv_reader(reader, source)
    }

    fn from_csv_reader<R: Read>(
        reader: csv::Reader<R>,
        source: &str,
    ) -> Result<TrafficDataset, TrafficError> {
        let records = reader
            .into_deserialize::<TrafficRow>()
            .enumerate()
            .map(|(idx, row)| TrafficRecord::try_from_row(row?, idx))
            .collect::<Result<Vec<_>, TrafficError>>()?;
        Ok(TrafficDataset::new(source, records))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn records(&self) -> &[TrafficRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// earliest date in the dataset, the default date of a render.
    pub fn min_date(&self) -> Result<NaiveDate, TrafficError> {
        self.records
            .iter()
            .map(|r| r.date)
            .min()
            .ok_or_else(|| TrafficError::EmptyDatasetError(self.source.clone()))
    }

    /// distinct dates in ascending order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).sorted().dedup().collect_vec()
    }

    pub fn filter(&self, date: NaiveDate, hour: u8) -> Vec<&TrafficRecord> {
        filter_records(&self.records, date, hour)
    }
}
