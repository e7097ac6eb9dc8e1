//! Runtime context for CLI commands

use anyhow::{Context, Result};
use ol_core::{Config, Dataset};
use ol_rollup::{DateRange, FilteredView};
use std::path::Path;

use crate::cli::GlobalArgs;

/// Loaded configuration, dataset, and the active date filter
pub(crate) struct RuntimeContext {
    /// Effective configuration
    pub config: Config,

    /// The loaded dataset
    pub dataset: Dataset,

    /// Date filter, `None` only when the dataset is empty and no bounds were given
    pub range: Option<DateRange>,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        // Load config from custom path or the working directory
        let config = if let Some(config_path) = &args.config {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")?
        } else {
            Config::discover(Path::new(".")).context("Failed to load configuration")?
        };

        let dataset_path = config.resolve_dataset(args.dataset.as_deref());
        log::debug!("Loading dataset {}", dataset_path.display());
        let dataset = Dataset::load(&dataset_path, &config.load_options())
            .with_context(|| format!("Failed to load dataset {}", dataset_path.display()))?;

        let range = DateRange::resolve(
            args.start.or(config.start_date),
            args.end.or(config.end_date),
            &dataset,
        );
        if let Some(range) = range.filter(DateRange::is_reversed) {
            log::warn!(
                "Start date {} is after end date {}; all views will be empty",
                range.start,
                range.end
            );
        }

        Ok(Self {
            config,
            dataset,
            range,
        })
    }

    /// Apply the active date filter to the dataset
    pub fn view(&self) -> FilteredView<'_> {
        match &self.range {
            Some(range) => range.apply(&self.dataset),
            None => FilteredView::all(&self.dataset),
        }
    }

    /// Row limit for ranked views: the CLI value, else the configured top_n
    pub fn limit(&self, arg: Option<usize>) -> usize {
        arg.unwrap_or(self.config.top_n)
    }
}
