//! Navigation derived from registered pages.

use std::collections::BTreeMap;

use lemoo_pages::{PageDescriptor, PageRegistry};

use crate::codec::Forests;
use crate::node::NavigationNode;

/// Module whose pages go to the bottom forest.
pub const SYSTEM_MODULE: &str = "System";

/// Label for pages registered without a module.
pub const OTHER_MODULE: &str = "Other";

const DEFAULT_MODULE_ICON: &str = "\u{E8A5}";

/// Group icon for a module.
#[must_use]
pub fn module_icon(module: &str) -> &'static str {
    match module {
        "Files" => "\u{E8A5}",
        "Collaboration" => "\u{E716}",
        "Analytics" => "\u{E9D2}",
        SYSTEM_MODULE => "\u{E713}",
        _ => DEFAULT_MODULE_ICON,
    }
}

/// Build both forests from the enabled pages in `registry`.
///
/// Pages are grouped by module (modules in lexical order, pages by title).
/// A module with a single page contributes that page as a leaf; larger
/// modules become an expanded group. The `System` module goes to the bottom
/// forest, every other module to the primary one.
#[must_use]
pub fn derive_from_registry(registry: &PageRegistry) -> Forests {
    let mut modules: BTreeMap<&str, Vec<&PageDescriptor>> = BTreeMap::new();
    for page in registry.enabled() {
        modules.entry(page.module.as_str()).or_default().push(page);
    }

    let mut primary = Vec::new();
    let mut bottom = Vec::new();

    for (module, mut pages) in modules {
        pages.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.key.cmp(&b.key)));

        let label = if module.trim().is_empty() {
            OTHER_MODULE
        } else {
            module
        };

        let node = if let [page] = pages.as_slice() {
            leaf_from_descriptor(page)
        } else {
            let children = pages.into_iter().filter_map(leaf_from_descriptor).collect();
            Some(
                NavigationNode::new(label, module_icon(label))
                    .expanded(true)
                    .with_children(children),
            )
        };

        let Some(node) = node.filter(|n| n.has_children() || n.is_page()) else {
            continue;
        };

        if label == SYSTEM_MODULE {
            bottom.push(node);
        } else {
            primary.push(node);
        }
    }

    tracing::debug!(
        primary = primary.len(),
        bottom = bottom.len(),
        "Derived navigation from page registry"
    );
    (primary, bottom)
}

fn leaf_from_descriptor(page: &PageDescriptor) -> Option<NavigationNode> {
    if !page.enabled {
        return None;
    }
    Some(
        NavigationNode::page(&page.title, &page.icon, &page.key)
            .with_page_type(page.implementation.name())
            .enabled(page.enabled),
    )
}
