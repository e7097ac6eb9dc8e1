//! CLI integration tests
//!
//! Runs the `ol` binary against a six-line fixture export:
//!
//! | order | customer | state | date       | payment     | value | category   |
//! |-------|----------|-------|------------|-------------|-------|------------|
//! | o1    | c1       | SP    | 2017-01-05 | credit_card | 100   | toys       |
//! | o1    | c1       | SP    | 2017-01-05 | credit_card | 100   | housewares |
//! | o2    | c2       | RJ    | 2017-01-07 | boleto      | 50    | toys       |
//! | o3    | c1       | SP    | 2017-03-10 | voucher     | 20    | books      |
//! | o4    | c3       | SP    | 2018-02-01 | credit_card | 80    | toys       |
//! | o5    | c4       | PR    | 2018-02-03 | debit_card  | 30    | housewares |

use serde_json::Value;
use std::process::{Command, Output};

/// Path to the compiled ol binary (resolved at compile time)
fn ol_bin() -> String {
    env!("CARGO_BIN_EXE_ol").to_string()
}

fn fixture_path() -> String {
    format!("{}/tests/fixtures/orders.csv", env!("CARGO_MANIFEST_DIR"))
}

/// Run `ol` against the fixture dataset with the given trailing arguments
fn run_ol(args: &[&str]) -> Output {
    let dataset = fixture_path();
    Command::new(ol_bin())
        .args(["--dataset", dataset.as_str()])
        .args(args)
        .env_remove("OL_DATASET")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run ol")
}

fn run_json(args: &[&str]) -> Value {
    let output = run_ol(args);
    assert!(
        output.status.success(),
        "ol {:?} failed.\nstdout: {}\nstderr: {}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn approx(value: &Value, expected: f64) -> bool {
    value
        .as_f64()
        .map(|v| (v - expected).abs() < 1e-9)
        .unwrap_or(false)
}

// ── ol info ─────────────────────────────────────────────────────────────

#[test]
fn test_info_reports_span() {
    let json = run_json(&["info", "-o", "json"]);
    assert_eq!(json["record_count"], 6);
    assert_eq!(json["first_purchase"], "2017-01-05");
    assert_eq!(json["last_purchase"], "2018-02-03");
    assert_eq!(json["selected_orders"], 5);
}

#[test]
fn test_info_table_output() {
    let output = run_ol(&["info"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Order lines:    6"), "stdout: {}", stdout);
    assert!(stdout.contains("2017-01-05 to 2018-02-03"), "stdout: {}", stdout);
}

// ── ol orders ───────────────────────────────────────────────────────────

#[test]
fn test_orders_yearly_totals() {
    let json = run_json(&["orders", "--period", "year", "-o", "json"]);
    let periods = json["periods"].as_array().unwrap();
    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0]["period"], "2017-01-01");
    assert_eq!(periods[0]["order_count"], 3);
    assert!(approx(&periods[0]["revenue"], 270.0));
    assert_eq!(periods[1]["order_count"], 2);
    assert!(approx(&periods[1]["revenue"], 110.0));

    assert_eq!(json["totals"]["orders"], 5);
    assert!(approx(&json["totals"]["revenue"], 380.0));
}

#[test]
fn test_orders_daily_zero_fills_gaps() {
    let json = run_json(&[
        "--start",
        "2018-02-01",
        "--end",
        "2018-02-28",
        "orders",
        "-o",
        "json",
    ]);
    let periods = json["periods"].as_array().unwrap();
    let days: Vec<&str> = periods
        .iter()
        .map(|p| p["period"].as_str().unwrap())
        .collect();
    assert_eq!(days, vec!["2018-02-01", "2018-02-02", "2018-02-03"]);
    assert_eq!(periods[1]["order_count"], 0);
    assert!(approx(&periods[1]["revenue"], 0.0));
}

#[test]
fn test_orders_monthly_table_labels() {
    let output = run_ol(&["--end", "2017-12-31", "orders", "-p", "month"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2017-01"), "stdout: {}", stdout);
    assert!(stdout.contains("2017-02"), "zero-filled month missing: {}", stdout);
    assert!(stdout.contains("2017-03"), "stdout: {}", stdout);
    assert!(stdout.contains("Total: 3 orders, 270.00 revenue"), "stdout: {}", stdout);
}

// ── ol categories ───────────────────────────────────────────────────────

#[test]
fn test_categories_top_and_bottom() {
    let top = run_json(&["categories", "-o", "json"]);
    let names: Vec<&str> = top
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["category"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["toys", "housewares", "books"]);
    assert_eq!(top[0]["item_count"], 3);

    let bottom = run_json(&["categories", "--bottom", "-n", "2", "-o", "json"]);
    let names: Vec<&str> = bottom
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["category"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["books", "housewares"]);
}

// ── ol payments ─────────────────────────────────────────────────────────

#[test]
fn test_payments_count_orders_not_items() {
    let json = run_json(&["payments", "-o", "json"]);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["payment_type"], "credit_card");
    // o1 has two items but is a single credit-card order
    assert_eq!(rows[0]["order_count"], 2);

    let total: u64 = rows.iter().map(|r| r["order_count"].as_u64().unwrap()).sum();
    assert_eq!(total, 5);
}

// ── ol geo ──────────────────────────────────────────────────────────────

#[test]
fn test_geo_counts_distinct_customers() {
    let json = run_json(&["geo", "--by", "state", "-o", "json"]);
    assert_eq!(json[0]["region"], "SP");
    assert_eq!(json[0]["customer_count"], 2);

    let json = run_json(&["geo", "--by", "city", "-n", "1", "-o", "json"]);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    // Every city has one customer; the tie breaks by name
    assert_eq!(rows[0]["region"], "campinas");
    assert_eq!(rows[0]["customer_count"], 1);
}

// ── ol rfm ──────────────────────────────────────────────────────────────

#[test]
fn test_rfm_recency_tracks_filter() {
    let json = run_json(&["--end", "2017-12-31", "rfm", "-o", "json"]);
    assert_eq!(json["customers"], 2);

    let top = json["top"].as_array().unwrap();
    assert_eq!(top[0]["customer_id"], "c1");
    assert_eq!(top[0]["recency_days"], 0);
    assert_eq!(top[0]["frequency"], 2);
    assert!(approx(&top[0]["monetary"], 220.0));
    assert_eq!(top[1]["customer_id"], "c2");
    assert_eq!(top[1]["recency_days"], 62);

    assert!(approx(&json["averages"]["recency_days"], 31.0));
    assert!(approx(&json["averages"]["frequency"], 1.5));
    assert!(approx(&json["averages"]["monetary"], 135.0));
}

#[test]
fn test_rfm_rank_by_monetary() {
    let json = run_json(&["rfm", "--rank", "monetary", "-n", "2", "-o", "json"]);
    let ids: Vec<&str> = json["top"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["customer_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["c1", "c3"]);
}

// ── ol summary ──────────────────────────────────────────────────────────

#[test]
fn test_summary_json_sections() {
    let json = run_json(&["summary", "-o", "json"]);
    assert_eq!(json["record_count"], 6);
    assert_eq!(json["daily_totals"]["orders"], 5);
    let daily = json["daily"].as_array().unwrap();
    assert_eq!(daily.len(), 395);
    assert_eq!(daily[0]["period"], "2017-01-05");
    assert_eq!(daily[0]["order_count"], 1);
    assert_eq!(daily[1]["order_count"], 0);
    assert_eq!(daily[394]["period"], "2018-02-03");
    assert_eq!(json["annual_totals"]["orders"], 5);
    assert_eq!(json["annual"].as_array().unwrap().len(), 2);
    assert_eq!(json["payments"].as_array().unwrap().len(), 4);
    assert_eq!(json["top_states"][0]["region"], "SP");
    assert_eq!(json["top_by_frequency"][0]["customer_id"], "c1");
}

#[test]
fn test_summary_reversed_range_is_empty() {
    let output = run_ol(&["--start", "2018-01-01", "--end", "2017-01-01", "summary"]);
    assert!(
        output.status.success(),
        "reversed range should not fail: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No orders in the selected date range."), "stdout: {}", stdout);

    let json = run_json(&["--start", "2018-01-01", "--end", "2017-01-01", "summary", "-o", "json"]);
    assert_eq!(json["record_count"], 0);
    assert!(json["annual"].as_array().unwrap().is_empty());
    assert!(approx(&json["rfm_averages"]["monetary"], 0.0));
}

// ── configuration and errors ────────────────────────────────────────────

#[test]
fn test_config_file_supplies_dataset_and_range() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("orderlens.yml");
    std::fs::write(
        &config_path,
        format!(
            "dataset: \"{}\"\ntop_n: 1\nstart_date: \"2018-01-01\"\n",
            fixture_path()
        ),
    )
    .unwrap();

    let output = Command::new(ol_bin())
        .args(["-c", config_path.to_str().unwrap(), "categories", "-o", "json"])
        .env_remove("OL_DATASET")
        .output()
        .expect("Failed to run ol");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    // 2018 holds one toys line and one housewares line; the tie breaks by name
    assert_eq!(rows[0]["category"], "housewares");
    assert_eq!(rows[0]["item_count"], 1);
}

#[test]
fn test_env_var_selects_dataset() {
    let workdir = tempfile::tempdir().unwrap();
    let output = Command::new(ol_bin())
        .args(["info", "-o", "json"])
        .current_dir(workdir.path())
        .env("OL_DATASET", fixture_path())
        .output()
        .expect("Failed to run ol");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["record_count"], 6);
}

#[test]
fn test_missing_dataset_fails() {
    let output = Command::new(ol_bin())
        .args(["--dataset", "does/not/exist.csv", "summary"])
        .output()
        .expect("Failed to run ol");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does/not/exist.csv"), "stderr: {}", stderr);
}

#[test]
fn test_missing_required_column_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.csv");
    std::fs::write(&path, "order_id,customer_id,payment_value\no1,c1,10\n").unwrap();

    let output = Command::new(ol_bin())
        .args(["--dataset", path.to_str().unwrap(), "info"])
        .output()
        .expect("Failed to run ol");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("order_purchase_timestamp"), "stderr: {}", stderr);
}
