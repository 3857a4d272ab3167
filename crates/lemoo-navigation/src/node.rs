//! Navigation tree nodes.

/// Recursive navigation node.
///
/// A node with children is a group: consumers ignore its `page_key`.
/// A node with a `page_key` is a leaf by convention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationNode {
    /// Display label.
    pub title: String,
    /// Single-glyph icon, empty for none.
    pub icon: String,
    /// Registered page key this node opens.
    pub page_key: Option<String>,
    /// Fully-qualified page type name, resolved by name when the key is not
    /// registered.
    pub page_type_name: Option<String>,
    /// Whether a group is expanded.
    pub is_expanded: bool,
    /// Whether the node is shown.
    pub is_enabled: bool,
    /// Whether the node is the current selection.
    pub is_selected: bool,
    /// Child nodes in display order.
    pub children: Vec<NavigationNode>,
}

impl NavigationNode {
    /// Create an enabled, collapsed node without page link.
    #[must_use]
    pub fn new(title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            page_key: None,
            page_type_name: None,
            is_expanded: false,
            is_enabled: true,
            is_selected: false,
            children: Vec::new(),
        }
    }

    /// Create a leaf node linked to `page_key`.
    #[must_use]
    pub fn page(
        title: impl Into<String>,
        icon: impl Into<String>,
        page_key: impl Into<String>,
    ) -> Self {
        Self {
            page_key: Some(page_key.into()),
            ..Self::new(title, icon)
        }
    }

    /// Set the page type name.
    #[must_use]
    pub fn with_page_type(mut self, type_name: impl Into<String>) -> Self {
        self.page_type_name = Some(type_name.into());
        self
    }

    /// Set the expanded flag.
    #[must_use]
    pub fn expanded(mut self, is_expanded: bool) -> Self {
        self.is_expanded = is_expanded;
        self
    }

    /// Set the enabled flag.
    #[must_use]
    pub fn enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    /// Set the children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<NavigationNode>) -> Self {
        self.children = children;
        self
    }

    /// Whether this node has any children.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether this node opens a page when activated.
    #[must_use]
    pub fn is_page(&self) -> bool {
        !self.has_children() && self.page_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

/// Which of the two root forests a node lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Forest {
    /// Main sidebar items.
    Primary,
    /// Bottom (system) sidebar items.
    Bottom,
}

/// Address of a node: forest plus child indices from the root.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodePath {
    /// Root forest.
    pub forest: Forest,
    /// Index at each depth, starting with the root list.
    pub indices: Vec<usize>,
}

impl NodePath {
    /// Path to a root-level node.
    #[must_use]
    pub fn root(forest: Forest, index: usize) -> Self {
        Self {
            forest,
            indices: vec![index],
        }
    }

    /// Path to the `index`-th child of this node.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self {
            forest: self.forest,
            indices,
        }
    }
}

/// Resolve `indices` against `nodes`.
pub(crate) fn node_at<'a>(nodes: &'a [NavigationNode], indices: &[usize]) -> Option<&'a NavigationNode> {
    let (&first, rest) = indices.split_first()?;
    let node = nodes.get(first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        node_at(&node.children, rest)
    }
}

/// Depth-first search for the first leaf whose page key equals `key`.
///
/// Group keys never match.
pub(crate) fn find_page_key(nodes: &[NavigationNode], key: &str, prefix: &mut Vec<usize>) -> bool {
    for (index, node) in nodes.iter().enumerate() {
        prefix.push(index);
        if node.is_page() && node.page_key.as_deref() == Some(key) {
            return true;
        }
        if find_page_key(&node.children, key, prefix) {
            return true;
        }
        prefix.pop();
    }
    false
}
