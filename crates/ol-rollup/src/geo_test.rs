use super::*;
use crate::ranking::top_n;
use crate::test_utils::line;

fn at(order: &str, customer: &str, city: &str, state: &str) -> OrderLine {
    line(order, customer, "2017-06-01 10:00:00", 1.0).with_location(city, state)
}

fn sample() -> Vec<OrderLine> {
    vec![
        at("o1", "c1", "sao paulo", "SP"),
        at("o2", "c1", "sao paulo", "SP"),
        at("o3", "c2", "sao paulo", "SP"),
        at("o4", "c3", "campinas", "SP"),
        at("o5", "c4", "rio de janeiro", "RJ"),
        at("o6", "c5", "rio de janeiro", "RJ"),
        at("o7", "c6", "belo horizonte", "MG"),
    ]
}

#[test]
fn test_counts_distinct_customers_per_city() {
    let rollup = customers_by_city(&sample());
    let sp = rollup.iter().find(|r| r.region == "sao paulo").unwrap();
    // c1 ordered twice but is one customer
    assert_eq!(sp.customer_count, 2);
    assert_eq!(rollup.len(), 4);
}

#[test]
fn test_counts_distinct_customers_per_state() {
    let rollup = customers_by_state(&sample());
    assert_eq!(
        rollup,
        vec![
            GeoRollup {
                region: "MG".to_string(),
                customer_count: 1
            },
            GeoRollup {
                region: "RJ".to_string(),
                customer_count: 2
            },
            GeoRollup {
                region: "SP".to_string(),
                customer_count: 3
            },
        ]
    );
}

#[test]
fn test_blank_region_is_skipped() {
    let records = vec![at("o1", "c1", "", "SP"), at("o2", "c2", "  ", "SP")];
    assert!(customers_by_city(&records).is_empty());
    assert_eq!(customers_by_state(&records)[0].customer_count, 2);
}

#[test]
fn test_top_regions() {
    let rollup = geo_rollup(&sample(), GeoLevel::City);
    let top: Vec<&str> = top_n(&rollup, 2).iter().map(|r| r.region.as_str()).collect();
    assert_eq!(top, vec!["rio de janeiro", "sao paulo"]);
}

#[test]
fn test_level_display() {
    assert_eq!(GeoLevel::City.to_string(), "city");
    assert_eq!(GeoLevel::State.to_string(), "state");
}
