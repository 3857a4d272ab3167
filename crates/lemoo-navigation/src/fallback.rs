//! Built-in navigation used when neither the navigation file nor the page
//! registry can provide one.

use crate::codec::Forests;
use crate::derive::module_icon;
use crate::node::NavigationNode;

/// Minimal primary and bottom forests.
#[must_use]
pub fn fallback_forests() -> Forests {
    let files = NavigationNode::new("Files", module_icon("Files"))
        .expanded(true)
        .with_children(vec![
            NavigationNode::page("Home", "\u{E80F}", "Home"),
            NavigationNode::page("Document", "\u{E8A5}", "Document"),
            NavigationNode::page("Project", "\u{E8B7}", "Project"),
            NavigationNode::page("Task", "\u{E7C3}", "Task"),
            NavigationNode::page("Calendar", "\u{E787}", "Calendar"),
            NavigationNode::page("Note", "\u{E8A5}", "Note"),
            NavigationNode::page("Archive", "\u{E7B8}", "Archive"),
        ]);

    let collaboration = NavigationNode::new("Collaboration", module_icon("Collaboration"))
        .expanded(true)
        .with_children(vec![NavigationNode::page("Team", "\u{E716}", "Team")]);

    let analytics = NavigationNode::new("Analytics", module_icon("Analytics"))
        .expanded(true)
        .with_children(vec![NavigationNode::page("Analytics", "\u{E9D2}", "Analytics")]);

    let bottom = vec![NavigationNode::page("Settings", "\u{E713}", "Settings")];

    (vec![files, collaboration, analytics], bottom)
}
