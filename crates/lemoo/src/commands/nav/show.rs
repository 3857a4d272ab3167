//! `lemoo nav show` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use lemoo_config::CliSettings;
use lemoo_navigation::{NavigationNode, NavigationSource, NavigationStore};
use lemoo_shell::navigation_path;

use crate::commands::{discover_pages, load_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Navigation file (overrides config).
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl ShowArgs {
    /// Execute the show command.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let settings = CliSettings {
            navigation_file: self.file,
            ..CliSettings::default()
        };
        let config = load_config(config_path, &settings)?;

        let (registry, _) = discover_pages();
        let derive_from = config.navigation.derive_when_missing.then_some(&*registry);
        let store = NavigationStore::load(navigation_path(&config), derive_from);

        match store.source() {
            NavigationSource::File(path) => {
                output.info(&format!("Loaded from {}", path.display()));
            }
            source => output.warning(&format!(
                "Using {source} ({} not loaded)",
                store.config_path().display()
            )),
        }

        output.heading("Navigation");
        for line in render_forest(store.primary()) {
            output.info(&line);
        }
        output.heading("Bottom navigation");
        for line in render_forest(store.bottom()) {
            output.info(&line);
        }
        Ok(())
    }
}

/// Indented outline of `nodes`, one line per node.
fn render_forest(nodes: &[NavigationNode]) -> Vec<String> {
    fn walk(nodes: &[NavigationNode], depth: usize, lines: &mut Vec<String>) {
        for node in nodes {
            let marker = match (node.has_children(), node.is_expanded) {
                (true, true) => '-',
                (true, false) => '+',
                (false, _) => '*',
            };
            let mut line = format!("{}{marker} {}", "  ".repeat(depth), node.title);
            if let Some(key) = node.page_key.as_deref().filter(|_| !node.has_children()) {
                line.push_str(&format!(" [{key}]"));
            }
            if !node.is_enabled {
                line.push_str(" (disabled)");
            }
            lines.push(line);
            walk(&node.children, depth + 1, lines);
        }
    }

    let mut lines = Vec::new();
    walk(nodes, 0, &mut lines);
    lines
}
