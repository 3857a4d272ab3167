//! Lemoo shell: page factory, document host and the application context.
//!
//! [`Shell`] owns the page registry, the navigation store, a [`PageFactory`]
//! and a [`DocumentHost`], all injected at construction. The built-in pages
//! in [`pages`] register themselves at startup.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use lemoo_config::Config;
//! use lemoo_pages::{PageRegistry, TypeCatalog};
//! use lemoo_shell::{DocumentTabs, Shell};
//!
//! let config = Config::load(None, None)?;
//! let registry = Arc::new(PageRegistry::discover());
//! let catalog = TypeCatalog::discover(env!("CARGO_CRATE_NAME"));
//! let mut shell = Shell::from_config(&config, registry, catalog, DocumentTabs::new());
//!
//! shell.navigate("Home")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod factory;
mod host;
pub mod pages;
mod shell;

pub use factory::PageFactory;
pub use host::{DocumentHost, DocumentTab, DocumentTabs};
pub use shell::{NavigateError, Shell, navigation_path};
