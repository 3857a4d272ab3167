//! Built-in pages.

use lemoo_pages::{Page, PageRegistration, PageType};

/// Module name of the built-in page types, used as the current module of a
/// [`TypeCatalog`](lemoo_pages::TypeCatalog).
pub const MODULE: &str = env!("CARGO_CRATE_NAME");

macro_rules! builtin_page {
    ($ty:ident, $key:literal, $title:literal, $icon:literal, $module:literal, $description:literal) => {
        #[doc = $description]
        #[derive(Debug, Default)]
        pub struct $ty;

        impl Page for $ty {
            fn render(&self) -> String {
                format!("{}\n{}", $title, $description)
            }
        }

        inventory::submit! {
            PageRegistration::new($key, PageType::of::<$ty>)
                .title($title)
                .icon($icon)
                .module($module)
                .description($description)
        }
    };
}

builtin_page!(HomePage, "Home", "Home", "\u{E80F}", "Files", "Recent files and shortcuts.");
builtin_page!(DocumentPage, "Document", "Document", "\u{E8A5}", "Files", "Documents in the workspace.");
builtin_page!(ProjectPage, "Project", "Project", "\u{E8B7}", "Files", "Projects and their members.");
builtin_page!(TaskPage, "Task", "Task", "\u{E7C3}", "Files", "Open and completed tasks.");
builtin_page!(CalendarPage, "Calendar", "Calendar", "\u{E787}", "Files", "Upcoming events.");
builtin_page!(NotePage, "Note", "Note", "\u{E8A5}", "Files", "Personal notes.");
builtin_page!(ArchivePage, "Archive", "Archive", "\u{E7B8}", "Files", "Archived items.");
builtin_page!(TeamPage, "Team", "Team", "\u{E716}", "Collaboration", "Team members and roles.");
builtin_page!(AnalyticsPage, "Analytics", "Analytics", "\u{E9D2}", "Analytics", "Usage statistics.");
builtin_page!(SettingsPage, "Settings", "Settings", "\u{E713}", "System", "Application settings.");
