//! Navigation tree store.
//!
//! Owns the primary and bottom forests and the menu projected from them.
//! Forests are populated by the first policy that succeeds:
//!
//! 1. Load the navigation file.
//! 2. Derive from the page registry when the file is missing, empty or
//!    unreadable.
//! 3. Use the built-in fallback when no registry is available or the
//!    registry yields nothing.
//!
//! Read-path failures are logged and fall through to the next policy.
//! [`NavigationStore::save`] propagates its errors.

use std::fmt;
use std::path::{Path, PathBuf};

use lemoo_pages::PageRegistry;

use crate::codec::{self, Forests};
use crate::derive::derive_from_registry;
use crate::error::CodecError;
use crate::fallback::fallback_forests;
use crate::menu::{MenuItem, menu_from_forest};
use crate::node::{self, Forest, NavigationNode, NodePath};

/// Where the current forests came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationSource {
    /// Loaded from the navigation file.
    File(PathBuf),
    /// Derived from the page registry.
    Derived,
    /// Built-in fallback.
    Fallback,
}

impl fmt::Display for NavigationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Derived => f.write_str("page registry"),
            Self::Fallback => f.write_str("built-in fallback"),
        }
    }
}

/// Change notification sent to subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationEvent {
    /// Forests were replaced.
    Reloaded(NavigationSource),
    /// The selected node changed.
    SelectionChanged(NodePath),
    /// Every group in a forest was collapsed.
    GroupsCollapsed(Forest),
    /// Forests were written to the navigation file.
    Saved(PathBuf),
}

type Observer = Box<dyn FnMut(&NavigationEvent)>;

/// Owner of the two navigation forests.
pub struct NavigationStore {
    primary: Vec<NavigationNode>,
    bottom: Vec<NavigationNode>,
    menu: Vec<MenuItem>,
    config_path: PathBuf,
    source: NavigationSource,
    observers: Vec<Observer>,
}

impl fmt::Debug for NavigationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationStore")
            .field("primary", &self.primary.len())
            .field("bottom", &self.bottom.len())
            .field("config_path", &self.config_path)
            .field("source", &self.source)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl NavigationStore {
    /// Populate the store from `config_path`, falling back to `registry` and
    /// then to the built-in forests.
    #[must_use]
    pub fn load(config_path: PathBuf, registry: Option<&PageRegistry>) -> Self {
        let ((primary, bottom), source) = populate(&config_path, registry);
        tracing::info!(source = %source, "Navigation loaded");

        let mut store = Self {
            primary,
            bottom,
            menu: Vec::new(),
            config_path,
            source,
            observers: Vec::new(),
        };
        store.refresh_menu();
        store
    }

    /// Create a store holding the given forests.
    #[must_use]
    pub fn from_forests(
        config_path: PathBuf,
        primary: Vec<NavigationNode>,
        bottom: Vec<NavigationNode>,
        source: NavigationSource,
    ) -> Self {
        let mut store = Self {
            primary,
            bottom,
            menu: Vec::new(),
            config_path,
            source,
            observers: Vec::new(),
        };
        store.refresh_menu();
        store
    }

    /// Re-run the load policies against the navigation file.
    pub fn reload(&mut self, registry: Option<&PageRegistry>) {
        let (forests, source) = populate(&self.config_path, registry);
        self.replace(forests, source);
    }

    /// Replace the forests with ones derived from `registry`.
    pub fn regenerate_from_registry(&mut self, registry: &PageRegistry) {
        self.replace(derive_from_registry(registry), NavigationSource::Derived);
    }

    /// Write both forests to the navigation file and refresh the menu.
    ///
    /// # Errors
    ///
    /// Returns the codec error if the file cannot be written.
    pub fn save(&mut self) -> Result<(), CodecError> {
        codec::save(&self.config_path, &self.primary, &self.bottom).inspect_err(|err| {
            tracing::warn!(
                path = %self.config_path.display(),
                error = %err,
                "Failed to save navigation"
            );
        })?;
        self.refresh_menu();
        self.notify(&NavigationEvent::Saved(self.config_path.clone()));
        Ok(())
    }

    /// Primary forest.
    #[must_use]
    pub fn primary(&self) -> &[NavigationNode] {
        &self.primary
    }

    /// Bottom forest.
    #[must_use]
    pub fn bottom(&self) -> &[NavigationNode] {
        &self.bottom
    }

    /// Forest by name.
    #[must_use]
    pub fn forest(&self, forest: Forest) -> &[NavigationNode] {
        match forest {
            Forest::Primary => &self.primary,
            Forest::Bottom => &self.bottom,
        }
    }

    /// Mutable forest for editing before [`save`](Self::save).
    pub fn forest_mut(&mut self, forest: Forest) -> &mut Vec<NavigationNode> {
        match forest {
            Forest::Primary => &mut self.primary,
            Forest::Bottom => &mut self.bottom,
        }
    }

    /// Menu projected from the primary forest.
    #[must_use]
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Resolved navigation file path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Policy that produced the current forests.
    #[must_use]
    pub fn source(&self) -> &NavigationSource {
        &self.source
    }

    /// Register a change observer.
    pub fn subscribe(&mut self, observer: impl FnMut(&NavigationEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Node at `path`.
    #[must_use]
    pub fn node(&self, path: &NodePath) -> Option<&NavigationNode> {
        node::node_at(self.forest(path.forest), &path.indices)
    }

    /// Path of the first leaf (primary forest first) linked to `page_key`.
    ///
    /// Group nodes are never matched, whatever their own key.
    #[must_use]
    pub fn find_page(&self, page_key: &str) -> Option<NodePath> {
        [Forest::Primary, Forest::Bottom].into_iter().find_map(|forest| {
            let mut indices = Vec::new();
            node::find_page_key(self.forest(forest), page_key, &mut indices)
                .then_some(NodePath { forest, indices })
        })
    }

    /// Page type name recorded on the node linked to `page_key`.
    #[must_use]
    pub fn page_type_name(&self, page_key: &str) -> Option<&str> {
        let path = self.find_page(page_key)?;
        self.node(&path)?
            .page_type_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    /// Every `(page_key, page_type_name)` pair on leaves of both forests.
    #[must_use]
    pub fn page_type_names(&self) -> Vec<(&str, &str)> {
        fn collect<'a>(nodes: &'a [NavigationNode], out: &mut Vec<(&'a str, &'a str)>) {
            for node in nodes {
                if let (Some(key), Some(type_name)) =
                    (node.page_key.as_deref(), node.page_type_name.as_deref())
                    && node.is_page()
                    && !type_name.is_empty()
                {
                    out.push((key, type_name));
                }
                collect(&node.children, out);
            }
        }

        let mut pairs = Vec::new();
        collect(&self.primary, &mut pairs);
        collect(&self.bottom, &mut pairs);
        pairs
    }

    /// Select the node at `target` and deselect every other node in both
    /// forests.
    ///
    /// Returns `false` if `target` does not address a node.
    pub fn select(&mut self, target: &NodePath) -> bool {
        if self.node(target).is_none() {
            return false;
        }

        let mut changed = false;
        for forest in [Forest::Primary, Forest::Bottom] {
            let selected = (target.forest == forest).then_some(target.indices.as_slice());
            let mut prefix = Vec::new();
            changed |= apply_selection(self.forest_mut(forest), selected, &mut prefix);
        }

        if changed {
            self.notify(&NavigationEvent::SelectionChanged(target.clone()));
        }
        true
    }

    /// Select the node linked to `page_key`.
    ///
    /// Returns `false` if no node links to that key.
    pub fn select_page(&mut self, page_key: &str) -> bool {
        match self.find_page(page_key) {
            Some(path) => self.select(&path),
            None => false,
        }
    }

    /// Path of the selected node, if any.
    #[must_use]
    pub fn selected(&self) -> Option<NodePath> {
        fn find(nodes: &[NavigationNode], prefix: &mut Vec<usize>) -> bool {
            for (index, node) in nodes.iter().enumerate() {
                prefix.push(index);
                if node.is_selected || find(&node.children, prefix) {
                    return true;
                }
                prefix.pop();
            }
            false
        }

        [Forest::Primary, Forest::Bottom].into_iter().find_map(|forest| {
            let mut indices = Vec::new();
            find(self.forest(forest), &mut indices).then_some(NodePath { forest, indices })
        })
    }

    /// Collapse every group in `forest`.
    pub fn collapse_all_groups(&mut self, forest: Forest) {
        fn collapse(nodes: &mut [NavigationNode]) {
            for node in nodes {
                if node.has_children() {
                    node.is_expanded = false;
                    collapse(&mut node.children);
                }
            }
        }

        collapse(self.forest_mut(forest));
        self.notify(&NavigationEvent::GroupsCollapsed(forest));
    }

    /// Rebuild the menu from the primary forest.
    pub fn refresh_menu(&mut self) {
        self.menu = menu_from_forest(&self.primary);
    }

    fn replace(&mut self, (primary, bottom): Forests, source: NavigationSource) {
        tracing::info!(source = %source, "Navigation replaced");
        self.primary = primary;
        self.bottom = bottom;
        self.source = source.clone();
        self.refresh_menu();
        self.notify(&NavigationEvent::Reloaded(source));
    }

    fn notify(&mut self, event: &NavigationEvent) {
        for observer in &mut self.observers {
            observer(event);
        }
    }
}

/// Run the load policies in priority order.
fn populate(config_path: &Path, registry: Option<&PageRegistry>) -> (Forests, NavigationSource) {
    match codec::load(config_path) {
        Ok((primary, bottom)) if !primary.is_empty() || !bottom.is_empty() => {
            return ((primary, bottom), NavigationSource::File(config_path.to_path_buf()));
        }
        Ok(_) => {
            tracing::info!(path = %config_path.display(), "Navigation file is empty");
        }
        Err(err) if err.is_not_found() => {
            tracing::info!(path = %config_path.display(), "Navigation file not found");
        }
        Err(err) => {
            tracing::warn!(
                path = %config_path.display(),
                error = %err,
                "Failed to load navigation file"
            );
        }
    }

    if let Some(registry) = registry {
        let derived = derive_from_registry(registry);
        if !derived.0.is_empty() || !derived.1.is_empty() {
            return (derived, NavigationSource::Derived);
        }
        tracing::info!("Page registry yields no navigation");
    }

    (fallback_forests(), NavigationSource::Fallback)
}

/// Set `is_selected` on every node, true only at `selected`.
///
/// Returns whether any flag changed.
fn apply_selection(
    nodes: &mut [NavigationNode],
    selected: Option<&[usize]>,
    prefix: &mut Vec<usize>,
) -> bool {
    let mut changed = false;
    for (index, node) in nodes.iter_mut().enumerate() {
        prefix.push(index);
        let is_target = selected == Some(prefix.as_slice());
        if node.is_selected != is_target {
            node.is_selected = is_target;
            changed = true;
        }
        changed |= apply_selection(&mut node.children, selected, prefix);
        prefix.pop();
    }
    changed
}
