//! `lemoo pages` command implementation.

use std::path::Path;

use clap::Args;
use lemoo_config::CliSettings;
use lemoo_pages::PageDescriptor;

use super::{discover_pages, load_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the pages command.
#[derive(Args)]
pub(crate) struct PagesArgs {
    /// Only list pages of this module.
    #[arg(short, long)]
    module: Option<String>,
}

impl PagesArgs {
    /// Execute the pages command.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        // Report a broken lemoo.toml here too.
        load_config(config_path, &CliSettings::default())?;

        let (registry, _) = discover_pages();
        let mut pages: Vec<&PageDescriptor> = match &self.module {
            Some(module) => registry.by_module(module).collect(),
            None => registry.iter().collect(),
        };
        pages.sort_by(|a, b| {
            a.module
                .cmp(&b.module)
                .then_with(|| a.title.cmp(&b.title))
                .then_with(|| a.key.cmp(&b.key))
        });

        if pages.is_empty() {
            output.warning("No pages registered");
            return Ok(());
        }

        for page in pages {
            let line = format_page(page);
            if page.enabled {
                output.info(&line);
            } else {
                output.muted(&format!("{line} (disabled)"));
            }
        }
        Ok(())
    }
}

fn format_page(page: &PageDescriptor) -> String {
    let module = if page.module.is_empty() {
        "-"
    } else {
        page.module.as_str()
    };
    format!(
        "{:<14} {:<14} {:<14} {}",
        page.key,
        page.title,
        module,
        page.implementation.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lemoo_pages::{PageRegistration, PageRegistry, PageType};
    use lemoo_shell::pages::NotePage;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_page() {
        let registry: PageRegistry = [PageRegistration::new("Note", PageType::of::<NotePage>)]
            .iter()
            .collect();
        let line = format_page(registry.descriptor("Note").unwrap());

        assert_eq!(
            line,
            format!("{:<14} {:<14} {:<14} {}", "Note", "Note", "-", "lemoo_shell::pages::NotePage")
        );
    }
}
