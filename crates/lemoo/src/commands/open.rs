//! `lemoo open` command implementation.

use std::path::Path;

use clap::Args;
use lemoo_config::CliSettings;
use lemoo_shell::{DocumentTabs, Shell};

use super::{discover_pages, load_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the open command.
#[derive(Args)]
pub(crate) struct OpenArgs {
    /// Page keys to open, in order.
    #[arg(required = true)]
    keys: Vec<String>,

    /// Build a fresh page instance for every open.
    #[arg(long)]
    no_cache: bool,
}

impl OpenArgs {
    /// Execute the open command.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let settings = CliSettings {
            cache_instances: self.no_cache.then_some(false),
            ..CliSettings::default()
        };
        let config = load_config(config_path, &settings)?;

        let (registry, catalog) = discover_pages();
        let mut shell = Shell::from_config(&config, registry, catalog, DocumentTabs::new());

        let mut failed = 0;
        for key in &self.keys {
            if let Err(err) = shell.navigate(key) {
                output.warning(&err.to_string());
                failed += 1;
            }
        }

        for tab in shell.host().tabs() {
            output.rule();
            output.heading(&tab.title);
            output.info(&tab.page.render());
        }
        if let Some(active) = shell.host().active() {
            output.rule();
            output.muted(&format!("Active: {}", active.key));
        }

        if failed > 0 {
            return Err(CliError::Validation(format!(
                "{failed} of {} pages could not be opened",
                self.keys.len()
            )));
        }
        Ok(())
    }
}
