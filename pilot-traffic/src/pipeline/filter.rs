use chrono::NaiveDate;

use crate::model::TrafficRecord;

/// selects the records observed on `date` during `hour`. an empty result is
/// valid and signals that there is nothing to display.
pub fn filter_records(records: &[TrafficRecord], date: NaiveDate, hour: u8) -> Vec<&TrafficRecord> {
    records
        .iter()
        .filter(|r| r.hour == hour && r.date == date)
        .collect()
}
