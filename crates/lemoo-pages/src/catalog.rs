//! By-name lookup of page types across modules.
//!
//! Navigation files may reference a page implementation by its fully-qualified
//! type name instead of a registered page key. [`TypeCatalog`] answers those
//! lookups. Types are grouped into modules by crate name; the current module
//! is searched first, then every other module except platform ones.

use std::collections::HashMap;

use crate::page::PageType;
use crate::registry::PageRegistration;

/// Module name prefixes never searched for page types.
const PLATFORM_MODULES: &[&str] = &["std", "core", "alloc"];

/// Export of a page type that carries no page metadata.
///
/// Such types are reachable only by name, from navigation nodes that set a
/// page type. Submit with [`inventory::submit!`].
#[derive(Clone, Copy, Debug)]
pub struct PageTypeExport {
    page_type: fn() -> PageType,
}

impl PageTypeExport {
    /// Export `page_type` for by-name lookup.
    #[must_use]
    pub const fn new(page_type: fn() -> PageType) -> Self {
        Self { page_type }
    }
}

inventory::collect!(PageTypeExport);

/// Page types defined by one module.
#[derive(Debug, Default)]
pub struct CatalogModule {
    name: String,
    types: HashMap<&'static str, PageType>,
}

impl CatalogModule {
    /// Create an empty module.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: HashMap::new(),
        }
    }

    /// Add a page type to this module.
    pub fn insert(&mut self, page_type: PageType) {
        self.types.insert(page_type.name(), page_type);
    }

    /// Module name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Find a type by fully-qualified name.
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<PageType> {
        self.types.get(type_name).copied()
    }

    fn is_platform(&self) -> bool {
        PLATFORM_MODULES.iter().any(|prefix| {
            self.name
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(['_', '-', ':']))
        })
    }
}

/// Catalog of page types grouped by module.
#[derive(Debug)]
pub struct TypeCatalog {
    current: String,
    modules: Vec<CatalogModule>,
}

impl TypeCatalog {
    /// Create an empty catalog whose current module is `current`.
    #[must_use]
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            modules: Vec::new(),
        }
    }

    /// Build a catalog from every registered and exported page type.
    #[must_use]
    pub fn discover(current: impl Into<String>) -> Self {
        let mut catalog = Self::new(current);
        for registration in inventory::iter::<PageRegistration> {
            catalog.insert(registration.page_type());
        }
        for export in inventory::iter::<PageTypeExport> {
            catalog.insert((export.page_type)());
        }
        tracing::debug!(
            current = %catalog.current,
            modules = catalog.modules.len(),
            "Type catalog built"
        );
        catalog
    }

    /// Add a page type, creating its module on first use.
    pub fn insert(&mut self, page_type: PageType) {
        let module_name = page_type.module_name();
        if let Some(module) = self.modules.iter_mut().find(|m| m.name == module_name) {
            module.insert(page_type);
        } else {
            let mut module = CatalogModule::new(module_name);
            module.insert(page_type);
            self.modules.push(module);
        }
    }

    /// Add a whole module.
    pub fn add_module(&mut self, module: CatalogModule) {
        self.modules.push(module);
    }

    /// Find a page type by fully-qualified name.
    ///
    /// Searches the current module first, then the other modules in
    /// insertion order, skipping platform modules.
    #[must_use]
    pub fn find(&self, type_name: &str) -> Option<PageType> {
        if type_name.trim().is_empty() {
            return None;
        }

        if let Some(found) = self
            .modules
            .iter()
            .filter(|m| m.name == self.current)
            .find_map(|m| m.get(type_name))
        {
            return Some(found);
        }

        self.modules
            .iter()
            .filter(|m| m.name != self.current && !m.is_platform())
            .find_map(|m| m.get(type_name))
    }
}
