//! Page factory.
//!
//! Maps a page key to a constructed page. Implementations are resolved in
//! order from:
//!
//! 1. the enabled [`PageDescriptor`](lemoo_pages::PageDescriptor) in the
//!    page registry,
//! 2. the legacy type cache built from `PageType` names in the navigation
//!    tree,
//! 3. a live by-name lookup in the [`TypeCatalog`] for the node's type name.
//!
//! Resolution and construction failures are logged and yield `None`.

use std::collections::HashMap;
use std::sync::Arc;

use lemoo_navigation::NavigationStore;
use lemoo_pages::{Page, PageRegistry, PageType, TypeCatalog};

/// Creates page instances and keeps the per-key instance cache.
pub struct PageFactory {
    registry: Arc<PageRegistry>,
    catalog: TypeCatalog,
    /// Page key to implementation, from navigation type names.
    type_cache: HashMap<String, PageType>,
    /// Type name lookups, including misses.
    type_name_cache: HashMap<String, Option<PageType>>,
    instances: HashMap<String, Arc<dyn Page>>,
}

impl std::fmt::Debug for PageFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageFactory")
            .field("registry", &self.registry.len())
            .field("type_cache", &self.type_cache.len())
            .field("instances", &self.instances.len())
            .finish_non_exhaustive()
    }
}

impl PageFactory {
    /// Create a factory and prime the legacy type cache from `navigation`.
    #[must_use]
    pub fn new(
        registry: Arc<PageRegistry>,
        navigation: &NavigationStore,
        catalog: TypeCatalog,
    ) -> Self {
        let mut factory = Self {
            registry,
            catalog,
            type_cache: HashMap::new(),
            type_name_cache: HashMap::new(),
            instances: HashMap::new(),
        };
        factory.rebuild_type_cache(navigation);
        factory
    }

    /// Re-resolve every `PageType` name in `navigation`.
    ///
    /// Call after the navigation tree was reloaded or regenerated.
    pub fn rebuild_type_cache(&mut self, navigation: &NavigationStore) {
        self.type_cache.clear();
        for (key, type_name) in navigation.page_type_names() {
            if self.type_cache.contains_key(key) {
                continue;
            }
            if let Some(page_type) = self.lookup_type_name(type_name) {
                self.type_cache.insert(key.to_owned(), page_type);
            }
        }
        tracing::debug!(entries = self.type_cache.len(), "Legacy page type cache built");
    }

    /// Create the page for `key`.
    ///
    /// With `use_cache`, an existing instance is returned unchanged and a new
    /// instance is stored for later calls. Without it, a fresh instance is
    /// built every time and the cache is left alone.
    pub fn create_page(
        &mut self,
        navigation: &NavigationStore,
        key: &str,
        use_cache: bool,
    ) -> Option<Arc<dyn Page>> {
        if use_cache && let Some(page) = self.instances.get(key) {
            tracing::debug!(key, "Page instance cache hit");
            return Some(Arc::clone(page));
        }

        let Some(page_type) = self.resolve(navigation, key) else {
            tracing::warn!(key, "No page implementation found");
            return None;
        };

        let page: Arc<dyn Page> = match page_type.construct() {
            Ok(page) => Arc::from(page),
            Err(err) => {
                tracing::warn!(key, error = %err, "Failed to construct page");
                return None;
            }
        };

        if use_cache {
            self.instances.insert(key.to_owned(), Arc::clone(&page));
        }
        Some(page)
    }

    /// Resolve the implementation for `key` without constructing it.
    pub fn resolve(&mut self, navigation: &NavigationStore, key: &str) -> Option<PageType> {
        if let Some(descriptor) = self.registry.descriptor(key)
            && descriptor.enabled
        {
            return Some(descriptor.implementation);
        }

        if let Some(page_type) = self.type_cache.get(key) {
            return Some(*page_type);
        }

        let type_name = navigation.page_type_name(key)?.to_owned();
        let page_type = self.lookup_type_name(&type_name)?;
        self.type_cache.insert(key.to_owned(), page_type);
        Some(page_type)
    }

    /// Drop every cached page instance.
    pub fn clear_instance_cache(&mut self) {
        self.instances.clear();
    }

    /// Drop the cached instance for `key`.
    pub fn remove_instance_from_cache(&mut self, key: &str) -> Option<Arc<dyn Page>> {
        self.instances.remove(key)
    }

    /// Number of cached page instances.
    #[must_use]
    pub fn cached_instances(&self) -> usize {
        self.instances.len()
    }

    fn lookup_type_name(&mut self, type_name: &str) -> Option<PageType> {
        if let Some(cached) = self.type_name_cache.get(type_name) {
            return *cached;
        }

        let found = self.catalog.find(type_name);
        if found.is_none() {
            tracing::warn!(type_name, "Page type not found in any module");
        }
        self.type_name_cache.insert(type_name.to_owned(), found);
        found
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use lemoo_navigation::{NavigationNode, NavigationSource};
    use lemoo_pages::{PageError, PageRegistration};
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct AlphaPage;

    impl Page for AlphaPage {
        fn render(&self) -> String {
            "alpha".to_owned()
        }
    }

    #[derive(Default)]
    struct BetaPage;

    impl Page for BetaPage {
        fn render(&self) -> String {
            "beta".to_owned()
        }
    }

    fn broken() -> PageType {
        PageType::new("lemoo_shell::tests::BrokenPage", || {
            Err(PageError::Construction {
                type_name: "lemoo_shell::tests::BrokenPage",
                message: "no database".to_owned(),
            })
        })
    }

    fn registry(registrations: &[PageRegistration]) -> Arc<PageRegistry> {
        Arc::new(registrations.iter().collect())
    }

    fn navigation(nodes: Vec<NavigationNode>) -> NavigationStore {
        NavigationStore::from_forests(
            PathBuf::from("nav.xml"),
            nodes,
            Vec::new(),
            NavigationSource::Fallback,
        )
    }

    fn catalog() -> TypeCatalog {
        let mut catalog = TypeCatalog::new(PageType::of::<AlphaPage>().module_name());
        catalog.insert(PageType::of::<AlphaPage>());
        catalog.insert(PageType::of::<BetaPage>());
        catalog
    }

    fn render(page: Option<Arc<dyn Page>>) -> Option<String> {
        page.map(|p| p.render())
    }

    #[test]
    fn test_cached_instance_reused() {
        let nav = navigation(Vec::new());
        let mut factory = PageFactory::new(
            registry(&[PageRegistration::new("X", PageType::of::<AlphaPage>)]),
            &nav,
            catalog(),
        );

        let first = factory.create_page(&nav, "X", true).unwrap();
        let second = factory.create_page(&nav, "X", true).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(factory.cached_instances(), 1);
    }

    #[test]
    fn test_uncached_instances_distinct() {
        let nav = navigation(Vec::new());
        let mut factory = PageFactory::new(
            registry(&[PageRegistration::new("X", PageType::of::<AlphaPage>)]),
            &nav,
            catalog(),
        );

        let first = factory.create_page(&nav, "X", false).unwrap();
        let second = factory.create_page(&nav, "X", false).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(factory.cached_instances(), 0);
    }

    #[test]
    fn test_registry_wins_over_navigation_type_name() {
        let nav = navigation(vec![
            NavigationNode::page("X", "", "X").with_page_type(PageType::of::<BetaPage>().name()),
        ]);
        let mut factory = PageFactory::new(
            registry(&[PageRegistration::new("X", PageType::of::<AlphaPage>)]),
            &nav,
            catalog(),
        );

        assert_eq!(render(factory.create_page(&nav, "X", true)), Some("alpha".to_owned()));
    }

    #[test]
    fn test_disabled_descriptor_falls_through_to_navigation() {
        let nav = navigation(vec![
            NavigationNode::page("X", "", "X").with_page_type(PageType::of::<BetaPage>().name()),
        ]);
        let mut factory = PageFactory::new(
            registry(&[PageRegistration::new("X", PageType::of::<AlphaPage>).enabled(false)]),
            &nav,
            catalog(),
        );

        assert_eq!(render(factory.create_page(&nav, "X", true)), Some("beta".to_owned()));
    }

    #[test]
    fn test_legacy_type_cache_built_at_construction() {
        let nav = navigation(vec![
            NavigationNode::new("Group", "").with_children(vec![
                NavigationNode::page("Legacy", "", "Legacy")
                    .with_page_type(PageType::of::<BetaPage>().name()),
            ]),
        ]);
        let factory = PageFactory::new(registry(&[]), &nav, catalog());

        assert_eq!(
            factory.type_cache.get("Legacy").map(PageType::name),
            Some(PageType::of::<BetaPage>().name())
        );
    }

    #[test]
    fn test_live_lookup_after_navigation_change() {
        let mut nav = navigation(Vec::new());
        let mut factory = PageFactory::new(registry(&[]), &nav, catalog());
        assert!(factory.create_page(&nav, "Late", true).is_none());

        nav.forest_mut(lemoo_navigation::Forest::Primary).push(
            NavigationNode::page("Late", "", "Late").with_page_type(PageType::of::<AlphaPage>().name()),
        );

        assert_eq!(render(factory.create_page(&nav, "Late", true)), Some("alpha".to_owned()));
        assert!(factory.type_cache.contains_key("Late"));
    }

    #[test]
    fn test_unknown_type_name_cached_as_miss() {
        let nav = navigation(vec![
            NavigationNode::page("Ghost", "", "Ghost").with_page_type("gone::GhostPage"),
        ]);
        let mut factory = PageFactory::new(registry(&[]), &nav, catalog());

        assert!(factory.create_page(&nav, "Ghost", true).is_none());
        assert_eq!(factory.type_name_cache.get("gone::GhostPage"), Some(&None));
    }

    #[test]
    fn test_group_key_not_resolved() {
        let nav = navigation(vec![
            NavigationNode::page("Group", "", "G")
                .with_page_type(PageType::of::<BetaPage>().name())
                .with_children(vec![NavigationNode::page("Leaf", "", "L")]),
        ]);
        let mut factory = PageFactory::new(registry(&[]), &nav, catalog());

        assert!(factory.type_cache.is_empty());
        assert!(factory.create_page(&nav, "G", true).is_none());
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let nav = navigation(Vec::new());
        let mut factory = PageFactory::new(registry(&[]), &nav, catalog());
        assert!(factory.create_page(&nav, "Missing", true).is_none());
    }

    #[test]
    fn test_construction_failure_returns_none() {
        let nav = navigation(Vec::new());
        let mut factory = PageFactory::new(
            registry(&[PageRegistration::new("Broken", broken)]),
            &nav,
            catalog(),
        );

        assert!(factory.create_page(&nav, "Broken", true).is_none());
        assert_eq!(factory.cached_instances(), 0);
    }

    #[test]
    fn test_panicking_constructor_returns_none() {
        #[derive(Debug)]
        struct PanickingPage;

        impl Default for PanickingPage {
            fn default() -> Self {
                panic!("no window handle")
            }
        }

        impl Page for PanickingPage {
            fn render(&self) -> String {
                String::new()
            }
        }

        let nav = navigation(Vec::new());
        let mut factory = PageFactory::new(
            registry(&[PageRegistration::new("Panics", PageType::of::<PanickingPage>)]),
            &nav,
            catalog(),
        );

        assert!(factory.create_page(&nav, "Panics", true).is_none());
        assert_eq!(factory.cached_instances(), 0);
    }

    #[test]
    fn test_cache_control() {
        let nav = navigation(Vec::new());
        let mut factory = PageFactory::new(
            registry(&[
                PageRegistration::new("A", PageType::of::<AlphaPage>),
                PageRegistration::new("B", PageType::of::<BetaPage>),
            ]),
            &nav,
            catalog(),
        );
        let first = factory.create_page(&nav, "A", true).unwrap();
        factory.create_page(&nav, "B", true).unwrap();

        assert!(factory.remove_instance_from_cache("A").is_some());
        assert!(factory.remove_instance_from_cache("A").is_none());
        assert_eq!(factory.cached_instances(), 1);

        let recreated = factory.create_page(&nav, "A", true).unwrap();
        assert!(!Arc::ptr_eq(&first, &recreated));

        factory.clear_instance_cache();
        assert_eq!(factory.cached_instances(), 0);
    }
}
