//! Payments command implementation

use anyhow::Result;
use ol_rollup::{order_level, payment_distribution};

use crate::cli::{GlobalArgs, OutputFormat, PaymentsArgs};
use crate::commands::common::{describe_range, print_json, print_table};
use crate::context::RuntimeContext;

/// Execute the payments command
pub fn execute(args: &PaymentsArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let view = ctx.view();

    // Item-level lines repeat an order's payment once per product
    let orders = order_level(view.iter());
    log::debug!(
        "Reduced {} order lines to {} order payments",
        view.len(),
        orders.len()
    );
    let distribution = payment_distribution(orders);

    match args.output {
        OutputFormat::Json => print_json(&distribution)?,
        OutputFormat::Table => {
            println!("Orders per payment type ({})", describe_range(ctx.range));
            let rows: Vec<Vec<String>> = distribution
                .iter()
                .map(|p| vec![p.payment_type.clone(), p.order_count.to_string()])
                .collect();
            print_table(&["PAYMENT", "ORDERS"], &rows);
        }
    }

    Ok(())
}
