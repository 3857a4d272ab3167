//! Navigation tree for the Lemoo shell.
//!
//! This crate provides:
//! - [`NavigationNode`]: recursive sidebar node
//! - [`codec`]: XML load/save of the two navigation forests
//! - [`NavigationStore`]: owner of the primary and bottom forests, populated
//!   from the navigation file, derived from registered pages, or a built-in
//!   fallback
//!
//! # Quick Start
//!
//! ```no_run
//! use lemoo_navigation::{ConfigPathProbe, NavigationStore};
//! use lemoo_pages::PageRegistry;
//!
//! let registry = PageRegistry::discover();
//! let path = ConfigPathProbe::from_env("Config/NavigationConfig.xml").resolve();
//! let mut store = NavigationStore::load(path, Some(&registry));
//!
//! store.select_page("Home");
//! store.save()?;
//! # Ok::<(), lemoo_navigation::CodecError>(())
//! ```

pub mod codec;
mod derive;
mod error;
mod fallback;
mod menu;
mod node;
mod probe;
mod store;

pub use derive::{OTHER_MODULE, SYSTEM_MODULE, derive_from_registry, module_icon};
pub use error::CodecError;
pub use fallback::fallback_forests;
pub use menu::{MenuItem, menu_from_forest};
pub use node::{Forest, NavigationNode, NodePath};
pub use probe::ConfigPathProbe;
pub use store::{NavigationEvent, NavigationSource, NavigationStore};
