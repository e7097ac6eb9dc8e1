//! Summary command implementation
//!
//! Prints every view of the dashboard for the active date filter: order
//! totals, yearly breakdown, category, payment and geographic rankings,
//! then RFM averages and the best customers per dimension.

use anyhow::Result;
use ol_rollup::{
    bottom_n, rank_customers, top_n, CategoryRollup, Dashboard, DateRange, GeoRollup,
    OrderTotals, PaymentRollup, PeriodRollup, RfmAverages, RfmRank, RfmRecord,
};
use serde::Serialize;

use crate::cli::{GlobalArgs, OutputFormat, SummaryArgs};
use crate::commands::common::{
    describe_range, format_amount, print_heading, print_json, print_table,
};
use crate::commands::rfm::rfm_rows;
use crate::context::RuntimeContext;

#[derive(Debug, Serialize)]
struct SummaryOutput<'a> {
    range: Option<DateRange>,
    record_count: usize,
    daily_totals: OrderTotals,
    daily: &'a [PeriodRollup],
    annual_totals: OrderTotals,
    annual: &'a [PeriodRollup],
    top_categories: Vec<&'a CategoryRollup>,
    bottom_categories: Vec<&'a CategoryRollup>,
    payments: &'a [PaymentRollup],
    top_cities: Vec<&'a GeoRollup>,
    top_states: Vec<&'a GeoRollup>,
    rfm_averages: RfmAverages,
    top_by_recency: Vec<&'a RfmRecord>,
    top_by_frequency: Vec<&'a RfmRecord>,
    top_by_monetary: Vec<&'a RfmRecord>,
}

impl<'a> SummaryOutput<'a> {
    fn new(dashboard: &'a Dashboard, limit: usize) -> Self {
        Self {
            range: dashboard.range,
            record_count: dashboard.record_count,
            daily_totals: dashboard.daily_totals,
            daily: &dashboard.daily,
            annual_totals: dashboard.annual_totals,
            annual: &dashboard.annual,
            top_categories: top_n(&dashboard.categories, limit),
            bottom_categories: bottom_n(&dashboard.categories, limit),
            payments: &dashboard.payments,
            top_cities: top_n(&dashboard.cities, limit),
            top_states: top_n(&dashboard.states, limit),
            rfm_averages: dashboard.rfm_averages,
            top_by_recency: rank_customers(&dashboard.rfm, RfmRank::Recency, limit),
            top_by_frequency: rank_customers(&dashboard.rfm, RfmRank::Frequency, limit),
            top_by_monetary: rank_customers(&dashboard.rfm, RfmRank::Monetary, limit),
        }
    }
}

/// Execute the summary command
pub fn execute(args: &SummaryArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let view = ctx.view();
    let dashboard = Dashboard::compute(&view);
    let output = SummaryOutput::new(&dashboard, ctx.limit(args.limit));

    match args.output {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Table => {
            println!("Summary for {}", describe_range(ctx.range));
            if dashboard.is_empty() {
                println!("No orders in the selected date range.");
                return Ok(());
            }
            print_summary(&output);
        }
    }

    Ok(())
}

fn print_summary(output: &SummaryOutput<'_>) {
    println!(
        "{} order lines, {} orders, {} revenue",
        output.record_count,
        output.daily_totals.orders,
        format_amount(output.daily_totals.revenue)
    );

    print_heading("Orders per year");
    let rows: Vec<Vec<String>> = output
        .annual
        .iter()
        .map(|p| {
            vec![
                p.period.format("%Y").to_string(),
                p.order_count.to_string(),
                format_amount(p.revenue),
            ]
        })
        .collect();
    print_table(&["YEAR", "ORDERS", "REVENUE"], &rows);

    print_heading("Most popular categories");
    print_table(&["CATEGORY", "ITEMS"], &category_rows(&output.top_categories));

    print_heading("Least popular categories");
    print_table(&["CATEGORY", "ITEMS"], &category_rows(&output.bottom_categories));

    print_heading("Payment types");
    let rows: Vec<Vec<String>> = output
        .payments
        .iter()
        .map(|p| vec![p.payment_type.clone(), p.order_count.to_string()])
        .collect();
    print_table(&["PAYMENT", "ORDERS"], &rows);

    print_heading("Customers per city");
    print_table(&["CITY", "CUSTOMERS"], &geo_rows(&output.top_cities));

    print_heading("Customers per state");
    print_table(&["STATE", "CUSTOMERS"], &geo_rows(&output.top_states));

    print_heading("RFM");
    println!(
        "Average recency {} days, frequency {}, monetary {}",
        output.rfm_averages.recency_days,
        output.rfm_averages.frequency,
        format_amount(output.rfm_averages.monetary)
    );

    let headers = ["CUSTOMER", "RECENCY", "FREQUENCY", "MONETARY"];
    for (rank, records) in [
        (RfmRank::Recency, &output.top_by_recency),
        (RfmRank::Frequency, &output.top_by_frequency),
        (RfmRank::Monetary, &output.top_by_monetary),
    ] {
        println!();
        println!("Top customers by {}", rank);
        print_table(&headers, &rfm_rows(records));
    }
}

fn category_rows(rows: &[&CategoryRollup]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|c| vec![c.category.clone(), c.item_count.to_string()])
        .collect()
}

fn geo_rows(rows: &[&GeoRollup]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|g| vec![g.region.clone(), g.customer_count.to_string()])
        .collect()
}
