//! Flat menu projection of the primary navigation forest.

use crate::node::NavigationNode;

/// Menu entry mirroring an enabled navigation node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    /// Menu label.
    pub header: String,
    /// Single-glyph icon, empty for none.
    pub icon: String,
    /// Page opened by this entry.
    pub page_key: Option<String>,
    /// Submenu entries.
    pub children: Vec<MenuItem>,
}

/// Project `nodes` into menu entries, dropping disabled nodes and their
/// descendants.
#[must_use]
pub fn menu_from_forest(nodes: &[NavigationNode]) -> Vec<MenuItem> {
    nodes.iter().filter_map(menu_item).collect()
}

fn menu_item(node: &NavigationNode) -> Option<MenuItem> {
    node.is_enabled.then(|| MenuItem {
        header: node.title.clone(),
        icon: node.icon.clone(),
        page_key: node.page_key.clone(),
        children: menu_from_forest(&node.children),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_menu_skips_disabled_nodes() {
        let forest = vec![
            NavigationNode::new("Files", "F").with_children(vec![
                NavigationNode::page("Home", "H", "Home"),
                NavigationNode::page("Hidden", "", "Hidden").enabled(false),
            ]),
            NavigationNode::new("Off", "")
                .enabled(false)
                .with_children(vec![NavigationNode::page("Inner", "", "Inner")]),
        ];

        let menu = menu_from_forest(&forest);

        assert_eq!(
            menu,
            vec![MenuItem {
                header: "Files".to_owned(),
                icon: "F".to_owned(),
                page_key: None,
                children: vec![MenuItem {
                    header: "Home".to_owned(),
                    icon: "H".to_owned(),
                    page_key: Some("Home".to_owned()),
                    children: Vec::new(),
                }],
            }]
        );
    }
}
