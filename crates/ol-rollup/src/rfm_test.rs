use super::*;
use crate::filter::DateRange;
use crate::test_utils::{date, line, three_orders};
use ol_core::Dataset;

fn find<'a>(rows: &'a [RfmRecord], customer: &str) -> &'a RfmRecord {
    rows.iter().find(|r| r.customer_id == customer).unwrap()
}

#[test]
fn test_rfm_example() {
    let rows = rfm(&three_orders());
    let a = find(&rows, "A");
    assert_eq!(a.frequency, 2);
    assert_eq!(a.monetary, 30.0);
    assert_eq!(a.recency_days, 0);

    let b = find(&rows, "B");
    assert_eq!(b.frequency, 1);
    assert_eq!(b.monetary, 5.0);
    assert_eq!(b.recency_days, 1);
}

#[test]
fn test_one_record_per_customer() {
    let rows = rfm(&three_orders());
    let ids: Vec<&str> = rows.iter().map(|r| r.customer_id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);
}

#[test]
fn test_frequency_counts_distinct_orders() {
    let records = vec![
        line("o1", "A", "2017-01-01 10:00:00", 10.0),
        line("o1", "A", "2017-01-01 10:00:00", 15.0),
        line("o2", "A", "2017-01-05 10:00:00", 5.0),
    ];
    let rows = rfm(&records);
    assert_eq!(rows[0].frequency, 2);
    assert_eq!(rows[0].monetary, 30.0);
}

#[test]
fn test_recency_non_negative_and_single_zero() {
    let records = vec![
        line("o1", "A", "2017-01-01 10:00:00", 1.0),
        line("o2", "B", "2017-02-11 10:00:00", 1.0),
        line("o3", "C", "2017-03-30 23:00:00", 1.0),
        line("o4", "A", "2017-01-20 10:00:00", 1.0),
    ];
    let rows = rfm(&records);
    let zeros: Vec<&str> = rows
        .iter()
        .filter(|r| r.recency_days == 0)
        .map(|r| r.customer_id.as_str())
        .collect();
    assert_eq!(zeros, vec!["C"]);
    assert_eq!(find(&rows, "A").recency_days, 69);
    assert_eq!(find(&rows, "B").recency_days, 47);
}

#[test]
fn test_recency_uses_calendar_days_not_hours() {
    let records = vec![
        line("o1", "A", "2017-01-01 23:59:00", 1.0),
        line("o2", "B", "2017-01-02 00:01:00", 1.0),
    ];
    assert_eq!(find(&rfm(&records), "A").recency_days, 1);
}

#[test]
fn test_reference_date_follows_the_filter() {
    let dataset = Dataset::from_records(vec![
        line("o1", "A", "2017-01-01 10:00:00", 1.0),
        line("o2", "B", "2017-01-10 10:00:00", 1.0),
        line("o3", "C", "2017-06-01 10:00:00", 1.0),
    ]);
    let view = DateRange::new(date(2017, 1, 1), date(2017, 1, 31)).apply(&dataset);
    let rows = rfm(view.iter());
    assert_eq!(rows.len(), 2);
    assert_eq!(find(&rows, "B").recency_days, 0);
    assert_eq!(find(&rows, "A").recency_days, 9);
}

#[test]
fn test_empty_input() {
    let records: Vec<OrderLine> = Vec::new();
    assert!(rfm(&records).is_empty());
}

#[test]
fn test_rank_customers() {
    let records = vec![
        line("o1", "A", "2017-01-01 10:00:00", 100.0),
        line("o2", "A", "2017-01-02 10:00:00", 100.0),
        line("o3", "A", "2017-01-03 10:00:00", 100.0),
        line("o4", "B", "2017-01-10 10:00:00", 500.0),
        line("o5", "C", "2017-01-09 10:00:00", 20.0),
        line("o6", "C", "2017-01-10 10:00:00", 20.0),
    ];
    let rows = rfm(&records);

    let ids = |by: RfmRank| -> Vec<String> {
        rank_customers(&rows, by, 2)
            .iter()
            .map(|r| r.customer_id.clone())
            .collect()
    };
    assert_eq!(ids(RfmRank::Recency), vec!["B", "C"]);
    assert_eq!(ids(RfmRank::Frequency), vec!["A", "C"]);
    assert_eq!(ids(RfmRank::Monetary), vec!["B", "A"]);
}

#[test]
fn test_rank_display() {
    assert_eq!(RfmRank::Monetary.to_string(), "monetary");
}
