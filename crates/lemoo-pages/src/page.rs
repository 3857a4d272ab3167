//! Page capability contract and constructible page type handles.

use std::any::Any;
use std::fmt;

/// A displayable content unit hosted in a document tab.
///
/// Implementations must be constructible without arguments, either through
/// [`Default`] ([`PageType::of`]) or a fallible constructor function
/// ([`PageType::new`]).
pub trait Page: Send + Sync {
    /// Render the page body for the document host.
    fn render(&self) -> String;
}

/// Error raised by a page constructor.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The page implementation refused to construct.
    #[error("failed to construct {type_name}: {message}")]
    Construction {
        /// Fully-qualified page type name.
        type_name: &'static str,
        /// Reason reported by the constructor.
        message: String,
    },
}

/// Constructor function for a page implementation.
pub type PageConstructor = fn() -> Result<Box<dyn Page>, PageError>;

/// Handle to a constructible page implementation.
///
/// Two handles are equal when they name the same type.
#[derive(Clone, Copy)]
pub struct PageType {
    name: &'static str,
    construct: PageConstructor,
}

impl PageType {
    /// Create a handle from a fully-qualified type name and constructor.
    #[must_use]
    pub const fn new(name: &'static str, construct: PageConstructor) -> Self {
        Self { name, construct }
    }

    /// Handle for a page type constructed through [`Default`].
    #[must_use]
    pub fn of<T: Page + Default + 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            construct: construct_default::<T>,
        }
    }

    /// Fully-qualified type name (e.g. `lemoo_shell::pages::HomePage`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of the type name (e.g. `HomePage`).
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }

    /// Name of the module (crate) that defines this type.
    #[must_use]
    pub fn module_name(&self) -> &'static str {
        self.name.split("::").next().unwrap_or(self.name)
    }

    /// Construct a new page instance.
    ///
    /// A constructor that panics is reported as a construction failure.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Construction`] if the implementation fails to build.
    pub fn construct(&self) -> Result<Box<dyn Page>, PageError> {
        std::panic::catch_unwind(self.construct).unwrap_or_else(|payload| {
            Err(PageError::Construction {
                type_name: self.name,
                message: panic_message(payload.as_ref()),
            })
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|msg| (*msg).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "constructor panicked".to_owned())
}

impl PartialEq for PageType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for PageType {}

impl fmt::Debug for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PageType").field(&self.name).finish()
    }
}

#[allow(clippy::unnecessary_wraps)]
fn construct_default<T: Page + Default + 'static>() -> Result<Box<dyn Page>, PageError> {
    Ok(Box::new(T::default()))
}
