//! RFM command implementation

use anyhow::Result;
use ol_rollup::{rank_customers, rfm, rfm_averages, RfmAverages, RfmRank, RfmRecord};
use serde::Serialize;

use crate::cli::{GlobalArgs, OutputFormat, RfmArgs};
use crate::commands::common::{describe_range, format_amount, print_json, print_table};
use crate::context::RuntimeContext;

#[derive(Debug, Serialize)]
struct RfmOutput<'a> {
    rank: RfmRank,
    customers: usize,
    averages: RfmAverages,
    top: Vec<&'a RfmRecord>,
}

/// Execute the rfm command
pub fn execute(args: &RfmArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let view = ctx.view();
    let rank = RfmRank::from(args.rank);

    let records = rfm(view.iter());
    let output = RfmOutput {
        rank,
        customers: records.len(),
        averages: rfm_averages(&records),
        top: rank_customers(&records, rank, ctx.limit(args.limit)),
    };

    match args.output {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Table => {
            println!(
                "Top customers by {} ({}, {} customers)",
                output.rank,
                describe_range(ctx.range),
                output.customers
            );
            print_table(&["CUSTOMER", "RECENCY", "FREQUENCY", "MONETARY"], &rfm_rows(&output.top));
            println!();
            println!(
                "Average recency {} days, frequency {}, monetary {}",
                output.averages.recency_days,
                output.averages.frequency,
                format_amount(output.averages.monetary)
            );
        }
    }

    Ok(())
}

/// Table rows for RFM records
pub(crate) fn rfm_rows(records: &[&RfmRecord]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|r| {
            vec![
                r.customer_id.clone(),
                r.recency_days.to_string(),
                r.frequency.to_string(),
                format_amount(r.monetary),
            ]
        })
        .collect()
}
