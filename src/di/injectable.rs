use crate::di::Container;
use crate::error::Result;

/// Trait for types that can be built from the DI container
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use trellis::{Container, Injectable, Result};
///
/// struct Clock;
///
/// struct ReportController {
///     clock: Arc<Clock>,
/// }
///
/// impl Injectable for ReportController {
///     fn inject(container: &Container) -> Result<Self> {
///         Ok(Self {
///             clock: container.resolve::<Clock>()?,
///         })
///     }
/// }
///
/// let mut container = Container::new();
/// container.register(Clock);
/// assert!(ReportController::inject(&container).is_ok());
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Create an instance by resolving dependencies from the container
    ///
    /// # Errors
    /// Returns an error if any required dependency is not found in the container.
    fn inject(container: &Container) -> Result<Self>;
}
