//! Page metadata store.
//!
//! Every page implementation submits a [`PageRegistration`] to the startup
//! registration table. [`PageRegistry::initialize`] walks that table once and
//! indexes a [`PageDescriptor`] per page key.

use std::collections::HashMap;

use crate::page::PageType;

/// Declarative metadata attached to a page implementation.
///
/// Built in const context so it can be handed to [`inventory::submit!`].
/// Only `key` and the page type are required; every other field defaults to
/// empty (or `true` for `enabled`).
#[derive(Clone, Copy, Debug)]
pub struct PageRegistration {
    key: &'static str,
    title: &'static str,
    icon: &'static str,
    module: &'static str,
    enabled: bool,
    description: &'static str,
    page_type: fn() -> PageType,
}

impl PageRegistration {
    /// Start a registration for `key`, implemented by `page_type`.
    #[must_use]
    pub const fn new(key: &'static str, page_type: fn() -> PageType) -> Self {
        Self {
            key,
            title: "",
            icon: "",
            module: "",
            enabled: true,
            description: "",
            page_type,
        }
    }

    /// Display title. Blank titles fall back to the type name.
    #[must_use]
    pub const fn title(mut self, title: &'static str) -> Self {
        self.title = title;
        self
    }

    /// Single-glyph icon.
    #[must_use]
    pub const fn icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }

    /// Module the page belongs to, used to group navigation.
    #[must_use]
    pub const fn module(mut self, module: &'static str) -> Self {
        self.module = module;
        self
    }

    /// Whether the page is offered in navigation.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Free-form description.
    #[must_use]
    pub const fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Page type implementing this registration.
    #[must_use]
    pub fn page_type(&self) -> PageType {
        (self.page_type)()
    }
}

inventory::collect!(PageRegistration);

/// Metadata for one registered page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageDescriptor {
    /// Unique page key.
    pub key: String,
    /// Display title.
    pub title: String,
    /// Single-glyph icon.
    pub icon: String,
    /// Module used for navigation grouping.
    pub module: String,
    /// Free-form description.
    pub description: String,
    /// Whether the page is offered in navigation.
    pub enabled: bool,
    /// Constructible implementation.
    pub implementation: PageType,
}

impl PageDescriptor {
    /// Build a descriptor from a registration.
    ///
    /// A blank title is replaced by the short type name with a trailing
    /// `Page` suffix removed (`HomePage` becomes `Home`).
    #[must_use]
    pub fn from_registration(registration: &PageRegistration) -> Self {
        let implementation = registration.page_type();
        let title = if registration.title.trim().is_empty() {
            default_title(implementation.short_name())
        } else {
            registration.title.to_owned()
        };

        Self {
            key: registration.key.to_owned(),
            title,
            icon: registration.icon.to_owned(),
            module: registration.module.to_owned(),
            description: registration.description.to_owned(),
            enabled: registration.enabled,
            implementation,
        }
    }
}

fn default_title(type_name: &str) -> String {
    match type_name.strip_suffix("Page") {
        Some(stripped) if !stripped.is_empty() => stripped.to_owned(),
        _ => type_name.to_owned(),
    }
}

/// Page metadata store keyed by page key.
#[derive(Debug, Default)]
pub struct PageRegistry {
    pages: HashMap<String, PageDescriptor>,
}

impl PageRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry populated from the startup registration table.
    #[must_use]
    pub fn discover() -> Self {
        let mut registry = Self::new();
        registry.initialize();
        registry
    }

    /// Register every page submitted with [`inventory::submit!`].
    pub fn initialize(&mut self) {
        for registration in inventory::iter::<PageRegistration> {
            self.register(registration);
        }
        tracing::debug!(pages = self.pages.len(), "Page registry initialized");
    }

    /// Register a single page.
    ///
    /// Registrations with a blank key are skipped. A registration for a key
    /// that is already present replaces the previous descriptor.
    pub fn register(&mut self, registration: &PageRegistration) {
        if registration.key.trim().is_empty() {
            tracing::debug!(
                page_type = registration.page_type().name(),
                "Skipping page registration without key"
            );
            return;
        }

        let descriptor = PageDescriptor::from_registration(registration);
        if let Some(previous) = self.pages.get(&descriptor.key) {
            tracing::warn!(
                key = %descriptor.key,
                previous = previous.implementation.name(),
                replacement = descriptor.implementation.name(),
                "Page key registered twice, last registration wins"
            );
        }
        self.pages.insert(descriptor.key.clone(), descriptor);
    }

    /// Get the descriptor registered for `key`.
    #[must_use]
    pub fn descriptor(&self, key: &str) -> Option<&PageDescriptor> {
        self.pages.get(key)
    }

    /// Get the implementation registered for `key`.
    #[must_use]
    pub fn implementation(&self, key: &str) -> Option<PageType> {
        self.pages.get(key).map(|page| page.implementation)
    }

    /// All descriptors belonging to `module`, in no particular order.
    pub fn by_module<'a>(&'a self, module: &'a str) -> impl Iterator<Item = &'a PageDescriptor> {
        self.pages.values().filter(move |page| page.module == module)
    }

    /// All enabled descriptors, in no particular order.
    pub fn enabled(&self) -> impl Iterator<Item = &PageDescriptor> {
        self.pages.values().filter(|page| page.enabled)
    }

    /// All descriptors, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &PageDescriptor> {
        self.pages.values()
    }

    /// Number of registered pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no pages are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl<'a> FromIterator<&'a PageRegistration> for PageRegistry {
    fn from_iter<I: IntoIterator<Item = &'a PageRegistration>>(iter: I) -> Self {
        let mut registry = Self::new();
        for registration in iter {
            registry.register(registration);
        }
        registry
    }
}
