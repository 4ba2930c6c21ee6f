use serde::{Deserialize, Serialize};

use super::{CellId, TrafficRecord};

/// total visitors for one traffic cell over a filtered set of records.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AggregatedCell {
    pub h3: CellId,
    pub count_visitor: u64,
}

impl AggregatedCell {
    /// sets up the AggregatedCell with an empty accumulator
    pub fn empty(h3: CellId) -> Self {
        AggregatedCell {
            h3,
            count_visitor: 0,
        }
    }

    pub fn add(&mut self, record: &TrafficRecord) {
        self.count_visitor += record.count_visitor;
    }
}
