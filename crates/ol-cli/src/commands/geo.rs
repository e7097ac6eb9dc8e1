//! Geo command implementation

use anyhow::Result;
use ol_rollup::{geo_rollup, top_n, GeoLevel};

use crate::cli::{GeoArgs, GlobalArgs, OutputFormat};
use crate::commands::common::{describe_range, print_json, print_table};
use crate::context::RuntimeContext;

/// Execute the geo command
pub fn execute(args: &GeoArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let view = ctx.view();
    let level = GeoLevel::from(args.by);

    let all = geo_rollup(view.iter(), level);
    let top = top_n(&all, ctx.limit(args.limit));

    match args.output {
        OutputFormat::Json => print_json(&top)?,
        OutputFormat::Table => {
            println!(
                "Customers per {} ({}, {} {}s in view)",
                level,
                describe_range(ctx.range),
                all.len(),
                level
            );
            let rows: Vec<Vec<String>> = top
                .iter()
                .map(|g| vec![g.region.clone(), g.customer_count.to_string()])
                .collect();
            let region_header = level.to_string().to_uppercase();
            print_table(&[region_header.as_str(), "CUSTOMERS"], &rows);
        }
    }

    Ok(())
}
