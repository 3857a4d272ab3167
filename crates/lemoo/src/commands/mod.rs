//! CLI command implementations.

pub(crate) mod nav;
pub(crate) mod open;
pub(crate) mod pages;

pub(crate) use nav::NavCommand;
pub(crate) use open::OpenArgs;
pub(crate) use pages::PagesArgs;

use std::path::Path;
use std::sync::Arc;

use lemoo_config::{CliSettings, Config};
use lemoo_pages::{PageRegistry, TypeCatalog};

use crate::error::CliError;

/// Load configuration, applying `settings` over file values.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    settings: &CliSettings,
) -> Result<Config, CliError> {
    Ok(Config::load(config_path, Some(settings))?)
}

/// Page registry and type catalog built from the startup registration table.
pub(crate) fn discover_pages() -> (Arc<PageRegistry>, TypeCatalog) {
    let registry = Arc::new(PageRegistry::discover());
    let catalog = TypeCatalog::discover(lemoo_shell::pages::MODULE);
    (registry, catalog)
}
