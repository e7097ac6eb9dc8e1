//! Categories command implementation

use anyhow::Result;
use ol_rollup::{bottom_n, category_popularity, top_n, CategoryRollup};

use crate::cli::{CategoriesArgs, GlobalArgs, OutputFormat};
use crate::commands::common::{describe_range, print_json, print_table};
use crate::context::RuntimeContext;

/// Execute the categories command
pub fn execute(args: &CategoriesArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let view = ctx.view();
    let limit = ctx.limit(args.limit);

    let all = category_popularity(view.iter());
    let selected: Vec<&CategoryRollup> = if args.bottom {
        bottom_n(&all, limit)
    } else {
        top_n(&all, limit)
    };
    log::debug!(
        "{} categories in view, showing {}",
        all.len(),
        selected.len()
    );

    match args.output {
        OutputFormat::Json => print_json(&selected)?,
        OutputFormat::Table => {
            let which = if args.bottom { "Least" } else { "Most" };
            println!(
                "{} popular categories ({})",
                which,
                describe_range(ctx.range)
            );
            let rows: Vec<Vec<String>> = selected
                .iter()
                .map(|c| vec![c.category.clone(), c.item_count.to_string()])
                .collect();
            print_table(&["CATEGORY", "ITEMS"], &rows);
        }
    }

    Ok(())
}
