//! `lemoo nav generate` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use lemoo_config::CliSettings;
use lemoo_navigation::{NavigationSource, NavigationStore, derive_from_registry};
use lemoo_shell::navigation_path;

use crate::commands::{discover_pages, load_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Output file (default: the configured navigation file).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let settings = CliSettings {
            navigation_file: self.output,
            ..CliSettings::default()
        };
        let config = load_config(config_path, &settings)?;

        let (registry, _) = discover_pages();
        if registry.is_empty() {
            return Err(CliError::Validation("No pages registered".to_owned()));
        }

        let (primary, bottom) = derive_from_registry(&registry);
        let mut store = NavigationStore::from_forests(
            navigation_path(&config),
            primary,
            bottom,
            NavigationSource::Derived,
        );
        store.save()?;

        output.success(&format!(
            "Wrote {} navigation items to {}",
            store.primary().len() + store.bottom().len(),
            store.config_path().display()
        ));
        Ok(())
    }
}
