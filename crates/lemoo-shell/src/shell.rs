//! Shell context wiring registry, navigation, factory and document host.

use std::path::PathBuf;
use std::sync::Arc;

use lemoo_config::Config;
use lemoo_navigation::{CodecError, ConfigPathProbe, NavigationStore};
use lemoo_pages::{PageRegistry, TypeCatalog};

use crate::factory::PageFactory;
use crate::host::DocumentHost;

/// Navigation failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum NavigateError {
    /// No page could be produced for the key.
    #[error("Page unavailable: {0}")]
    PageUnavailable(String),
}

/// Application context.
///
/// Every collaborator is passed in explicitly; nothing is looked up from
/// global state.
#[derive(Debug)]
pub struct Shell<H> {
    registry: Arc<PageRegistry>,
    navigation: NavigationStore,
    factory: PageFactory,
    host: H,
    cache_instances: bool,
}

impl<H: DocumentHost> Shell<H> {
    /// Assemble a shell from its parts. Page instances are cached.
    pub fn new(
        registry: Arc<PageRegistry>,
        navigation: NavigationStore,
        catalog: TypeCatalog,
        host: H,
    ) -> Self {
        let factory = PageFactory::new(Arc::clone(&registry), &navigation, catalog);
        Self {
            registry,
            navigation,
            factory,
            host,
            cache_instances: true,
        }
    }

    /// Assemble a shell as described by `config`.
    ///
    /// The navigation file is probed from the config file's directory (or the
    /// working directory without one) and the binary's directory.
    pub fn from_config(
        config: &Config,
        registry: Arc<PageRegistry>,
        catalog: TypeCatalog,
        host: H,
    ) -> Self {
        let path = navigation_path(config);
        let derive_from = config.navigation.derive_when_missing.then_some(&*registry);
        let navigation = NavigationStore::load(path, derive_from);
        Self::new(registry, navigation, catalog, host).with_cache_instances(config.pages.cache_instances)
    }

    /// Set whether [`navigate`](Self::navigate) reuses page instances.
    #[must_use]
    pub fn with_cache_instances(mut self, cache_instances: bool) -> Self {
        self.cache_instances = cache_instances;
        self
    }

    /// Open the page for `key` in the document host and select its node.
    ///
    /// The tab title is the registered title, else the navigation node
    /// title, else the key itself.
    pub fn navigate(&mut self, key: &str) -> Result<(), NavigateError> {
        let page = self
            .factory
            .create_page(&self.navigation, key, self.cache_instances)
            .ok_or_else(|| NavigateError::PageUnavailable(key.to_owned()))?;

        let title = self.title_for(key);
        self.host.open_page(&title, page, key);
        self.navigation.select_page(key);
        tracing::info!(key, title = %title, "Navigated");
        Ok(())
    }

    /// Write the navigation tree to its file.
    pub fn save_navigation(&mut self) -> Result<(), CodecError> {
        self.navigation.save()
    }

    /// Reload the navigation tree and re-resolve legacy page type names.
    pub fn reload_navigation(&mut self) {
        self.navigation.reload(Some(&self.registry));
        self.factory.rebuild_type_cache(&self.navigation);
    }

    /// Replace the navigation tree with one derived from the registry.
    pub fn regenerate_navigation(&mut self) {
        self.navigation.regenerate_from_registry(&self.registry);
        self.factory.rebuild_type_cache(&self.navigation);
    }

    /// Page metadata store.
    #[must_use]
    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    /// Navigation tree store.
    #[must_use]
    pub fn navigation(&self) -> &NavigationStore {
        &self.navigation
    }

    /// Mutable navigation tree store.
    ///
    /// Call [`reload_navigation`](Self::reload_navigation) or
    /// [`regenerate_navigation`](Self::regenerate_navigation) instead of
    /// replacing forests here if page type names change.
    pub fn navigation_mut(&mut self) -> &mut NavigationStore {
        &mut self.navigation
    }

    /// Page factory, for cache control.
    pub fn factory_mut(&mut self) -> &mut PageFactory {
        &mut self.factory
    }

    /// Document host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable document host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn title_for(&self, key: &str) -> String {
        if let Some(descriptor) = self.registry.descriptor(key)
            && !descriptor.title.is_empty()
        {
            return descriptor.title.clone();
        }

        self.navigation
            .find_page(key)
            .and_then(|path| self.navigation.node(&path))
            .map(|node| node.title.clone())
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| key.to_owned())
    }
}

/// Resolve the navigation file path for `config`.
#[must_use]
pub fn navigation_path(config: &Config) -> PathBuf {
    let base_dir = config
        .config_path
        .as_deref()
        .and_then(|path| path.parent())
        .filter(|dir| !dir.as_os_str().is_empty())
        .map_or_else(|| std::env::current_dir().unwrap_or_default(), PathBuf::from);
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from));

    ConfigPathProbe::new(&config.navigation.file, base_dir, exe_dir).resolve()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::host::DocumentTabs;
    use lemoo_navigation::{NavigationNode, NavigationSource, codec};
    use lemoo_pages::{Page, PageRegistration, PageType};
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct NotesPage;

    impl Page for NotesPage {
        fn render(&self) -> String {
            "notes".to_owned()
        }
    }

    fn registry() -> Arc<PageRegistry> {
        Arc::new(
            [PageRegistration::new("Notes", PageType::of::<NotesPage>)
                .title("My Notes")
                .module("Files")]
            .iter()
            .collect(),
        )
    }

    fn catalog() -> TypeCatalog {
        let mut catalog = TypeCatalog::new("lemoo_shell");
        catalog.insert(PageType::of::<NotesPage>());
        catalog
    }

    fn shell(dir: &Path, nodes: Vec<NavigationNode>) -> Shell<DocumentTabs> {
        let navigation = NavigationStore::from_forests(
            dir.join("nav.xml"),
            nodes,
            Vec::new(),
            NavigationSource::Fallback,
        );
        Shell::new(registry(), navigation, catalog(), DocumentTabs::new())
    }

    #[test]
    fn test_navigate_opens_tab_and_selects_node() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(dir.path(), vec![NavigationNode::page("Notes", "", "Notes")]);

        shell.navigate("Notes").unwrap();

        let tab = shell.host().active().unwrap();
        assert_eq!(tab.title, "My Notes");
        assert_eq!(tab.page.render(), "notes");
        assert!(shell.navigation().primary()[0].is_selected);
    }

    #[test]
    fn test_navigate_uses_node_title_for_legacy_page() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(
            dir.path(),
            vec![NavigationNode::page("Old Notes", "", "Legacy").with_page_type(PageType::of::<NotesPage>().name())],
        );

        shell.navigate("Legacy").unwrap();

        assert_eq!(shell.host().active().unwrap().title, "Old Notes");
    }

    #[test]
    fn test_navigate_unknown_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(dir.path(), Vec::new());

        let err = shell.navigate("Missing").unwrap_err();

        assert!(matches!(err, NavigateError::PageUnavailable(ref key) if key == "Missing"));
        assert!(shell.host().tabs().is_empty());
    }

    #[test]
    fn test_cache_policy_applied() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(dir.path(), Vec::new()).with_cache_instances(false);

        shell.navigate("Notes").unwrap();

        assert_eq!(shell.factory_mut().cached_instances(), 0);
    }

    #[test]
    fn test_save_navigation_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(dir.path(), vec![NavigationNode::page("Notes", "", "Notes")]);

        shell.save_navigation().unwrap();

        let (primary, _) = codec::load(&dir.path().join("nav.xml")).unwrap();
        assert_eq!(primary, vec![NavigationNode::page("Notes", "", "Notes")]);
    }

    #[test]
    fn test_from_config_derives_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.navigation.file = dir.path().join("missing.xml");

        let shell = Shell::from_config(&config, registry(), catalog(), DocumentTabs::new());

        assert_eq!(shell.navigation().source(), &NavigationSource::Derived);
        assert_eq!(shell.navigation().primary()[0].title, "My Notes");
    }

    #[test]
    fn test_from_config_without_derivation_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.navigation.file = dir.path().join("missing.xml");
        config.navigation.derive_when_missing = false;
        config.pages.cache_instances = false;

        let mut shell = Shell::from_config(&config, registry(), catalog(), DocumentTabs::new());

        assert_eq!(shell.navigation().source(), &NavigationSource::Fallback);
        shell.navigate("Notes").unwrap();
        assert_eq!(shell.factory_mut().cached_instances(), 0);
    }

    #[test]
    fn test_navigation_path_relative_to_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.config_path = Some(dir.path().join("lemoo.toml"));
        config.navigation.file = PathBuf::from("nav-shell-test.xml");

        assert_eq!(navigation_path(&config), dir.path().join("nav-shell-test.xml"));
    }
}
