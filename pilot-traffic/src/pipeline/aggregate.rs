use std::collections::HashMap;

use itertools::Itertools;

use crate::model::{AggregatedCell, CellId, TrafficRecord};

/// sums visitor counts per traffic cell. cells are returned by descending
/// count, ties ordered by cell id, which is the order the cell selector
/// lists them in.
pub fn aggregate_by_traffic_cell(records: &[&TrafficRecord]) -> Vec<AggregatedCell> {
    let mut groups: HashMap<&CellId, AggregatedCell> = HashMap::new();
    for record in records.iter() {
        groups
            .entry(&record.traffic_h3_8)
            .or_insert_with(|| AggregatedCell::empty(record.traffic_h3_8.clone()))
            .add(record);
    }
    groups
        .into_values()
        .sorted_by(|a, b| {
            b.count_visitor
                .cmp(&a.count_visitor)
                .then_with(|| a.h3.cmp(&b.h3))
        })
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(cell: &str, count: u64) -> TrafficRecord {
        TrafficRecord {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            hour: 18,
            traffic_h3_8: CellId::from(cell),
            home_h3_8: CellId::from("home"),
            count_visitor: count,
            origin_lat: 0.0,
            origin_lon: 0.0,
            dest_lat: 0.0,
            dest_lon: 0.0,
        }
    }

    #[test]
    fn test_sums_per_cell() {
        let records = vec![
            record("a", 3),
            record("b", 10),
            record("a", 4),
            record("c", 7),
            record("b", 0),
        ];
        let refs = records.iter().collect_vec();
        let result = aggregate_by_traffic_cell(&refs);
        assert_eq!(
            result,
            vec![
                AggregatedCell {
                    h3: CellId::from("b"),
                    count_visitor: 10
                },
                AggregatedCell {
                    h3: CellId::from("a"),
                    count_visitor: 7
                },
                AggregatedCell {
                    h3: CellId::from("c"),
                    count_visitor: 7
                },
            ]
        );
    }

    #[test]
    fn test_total_is_preserved() {
        let records = (0..50)
            .map(|i| record(&format!("cell{}", i % 7), (i * 13 % 17) as u64))
            .collect_vec();
        let refs = records.iter().collect_vec();
        let expected: u64 = records.iter().map(|r| r.count_visitor).sum();
        let result = aggregate_by_traffic_cell(&refs);
        let observed: u64 = result.iter().map(|c| c.count_visitor).sum();
        assert_eq!(observed, expected);
        assert_eq!(result.len(), 7);
    }

    #[test]
    fn test_empty() {
        assert!(aggregate_by_traffic_cell(&[]).is_empty());
    }
}
