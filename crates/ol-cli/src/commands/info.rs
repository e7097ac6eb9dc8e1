//! Info command implementation

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::cli::{GlobalArgs, InfoArgs, OutputFormat};
use crate::commands::common::{describe_range, print_json};
use crate::context::RuntimeContext;

#[derive(Debug, Serialize)]
struct InfoOutput {
    source: Option<String>,
    record_count: usize,
    first_purchase: Option<NaiveDate>,
    last_purchase: Option<NaiveDate>,
    selected_records: usize,
    selected_orders: usize,
}

/// Execute the info command
pub fn execute(args: &InfoArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let view = ctx.view();
    let span = ctx.dataset.date_span();

    let output = InfoOutput {
        source: ctx.dataset.source().map(|p| p.display().to_string()),
        record_count: ctx.dataset.len(),
        first_purchase: span.map(|(first, _)| first),
        last_purchase: span.map(|(_, last)| last),
        selected_records: view.len(),
        selected_orders: view.distinct_orders(),
    };

    match args.output {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Table => {
            let date_or_dash = |d: Option<NaiveDate>| d.map_or("-".to_string(), |d| d.to_string());
            println!("Dataset:        {}", output.source.as_deref().unwrap_or("-"));
            println!("Order lines:    {}", output.record_count);
            println!("First purchase: {}", date_or_dash(output.first_purchase));
            println!("Last purchase:  {}", date_or_dash(output.last_purchase));
            println!("Date filter:    {}", describe_range(ctx.range));
            println!(
                "Selected:       {} lines, {} orders",
                output.selected_records, output.selected_orders
            );
        }
    }

    Ok(())
}
