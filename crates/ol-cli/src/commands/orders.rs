//! Orders command implementation

use anyhow::Result;
use ol_rollup::{order_totals, temporal_rollup, Granularity, OrderTotals, PeriodRollup};
use serde::Serialize;

use crate::cli::{GlobalArgs, OrdersArgs, OutputFormat};
use crate::commands::common::{describe_range, format_amount, print_json, print_table};
use crate::context::RuntimeContext;

#[derive(Debug, Serialize)]
struct OrdersOutput {
    granularity: Granularity,
    totals: OrderTotals,
    periods: Vec<PeriodRollup>,
}

/// Execute the orders command
pub fn execute(args: &OrdersArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let view = ctx.view();
    let granularity = Granularity::from(args.period);

    let periods = temporal_rollup(view.iter(), granularity);
    let output = OrdersOutput {
        granularity,
        totals: order_totals(&periods),
        periods,
    };

    match args.output {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Table => {
            println!(
                "Orders per {} ({})",
                output.granularity,
                describe_range(ctx.range)
            );
            let rows: Vec<Vec<String>> = output
                .periods
                .iter()
                .map(|p| {
                    vec![
                        granularity.label(p.period),
                        p.order_count.to_string(),
                        format_amount(p.revenue),
                    ]
                })
                .collect();
            print_table(&["PERIOD", "ORDERS", "REVENUE"], &rows);
            println!();
            println!(
                "Total: {} orders, {} revenue",
                output.totals.orders,
                format_amount(output.totals.revenue)
            );
        }
    }

    Ok(())
}
