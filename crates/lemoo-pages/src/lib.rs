//! Page contract and page metadata store for Lemoo.
//!
//! This crate provides:
//! - [`Page`]: the displayable content unit every page implements
//! - [`PageType`]: a copyable handle that constructs a page
//! - [`PageRegistration`]: the per-page metadata submitted to the startup
//!   registration table with [`inventory::submit!`]
//! - [`PageRegistry`]: key to [`PageDescriptor`] lookup built from that table
//! - [`TypeCatalog`]: by-name lookup of page types across modules
//!
//! # Registering a page
//!
//! ```
//! use lemoo_pages::{Page, PageRegistration, PageType};
//!
//! #[derive(Default)]
//! struct ReportsPage;
//!
//! impl Page for ReportsPage {
//!     fn render(&self) -> String {
//!         "Reports".to_owned()
//!     }
//! }
//!
//! inventory::submit! {
//!     PageRegistration::new("Reports", PageType::of::<ReportsPage>)
//!         .title("Reports")
//!         .module("Analytics")
//! }
//! ```

mod catalog;
mod page;
mod registry;

pub use catalog::{CatalogModule, PageTypeExport, TypeCatalog};
pub use page::{Page, PageError, PageType};
pub use registry::{PageDescriptor, PageRegistration, PageRegistry};

pub use inventory;
