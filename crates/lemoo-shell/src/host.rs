//! Document host contract and an in-memory tabbed host.

use std::fmt;
use std::sync::Arc;

use lemoo_pages::Page;

/// Display surface for constructed pages.
pub trait DocumentHost {
    /// Show `page` under `title`, identified by `key`.
    fn open_page(&mut self, title: &str, page: Arc<dyn Page>, key: &str);
}

/// An open document tab.
#[derive(Clone)]
pub struct DocumentTab {
    /// Page key identifying the tab.
    pub key: String,
    /// Tab header.
    pub title: String,
    /// Hosted page.
    pub page: Arc<dyn Page>,
}

impl fmt::Debug for DocumentTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentTab")
            .field("key", &self.key)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Tabbed document area.
///
/// Opening a key that already has a tab activates that tab.
#[derive(Debug, Default)]
pub struct DocumentTabs {
    tabs: Vec<DocumentTab>,
    active: Option<usize>,
}

impl DocumentTabs {
    /// Create an empty tab area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open tabs in opening order.
    #[must_use]
    pub fn tabs(&self) -> &[DocumentTab] {
        &self.tabs
    }

    /// Active tab.
    #[must_use]
    pub fn active(&self) -> Option<&DocumentTab> {
        self.active.and_then(|index| self.tabs.get(index))
    }

    /// Activate the tab for `key`.
    pub fn activate(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => false,
        }
    }

    /// Close the tab for `key`, activating its right neighbour (or the new
    /// last tab).
    pub fn close(&mut self, key: &str) -> Option<DocumentTab> {
        let index = self.position(key)?;
        let tab = self.tabs.remove(index);

        self.active = match self.active {
            _ if self.tabs.is_empty() => None,
            Some(active) if active > index => Some(active - 1),
            Some(active) if active == index => Some(index.min(self.tabs.len() - 1)),
            other => other,
        };
        Some(tab)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.key == key)
    }
}

impl DocumentHost for DocumentTabs {
    fn open_page(&mut self, title: &str, page: Arc<dyn Page>, key: &str) {
        if self.activate(key) {
            tracing::debug!(key, "Document tab activated");
            return;
        }

        self.tabs.push(DocumentTab {
            key: key.to_owned(),
            title: title.to_owned(),
            page,
        });
        self.active = Some(self.tabs.len() - 1);
        tracing::debug!(key, title, "Document tab opened");
    }
}
