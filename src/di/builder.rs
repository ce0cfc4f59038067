use crate::di::Container;
use crate::routing::{URI_GENERATOR_SERVICE, UriGenerator};
use crate::view::{VIEW_SERVICE, View};
use std::sync::Arc;

/// Builder for constructing a dependency injection container
///
/// Use this to configure and register services before building the final container.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use trellis::prelude::*;
///
/// let generator = |name: &str, _: &RouteParams| -> trellis::Result<String> {
///     Ok(format!("/{name}"))
/// };
/// let view = |template: &str, _: &ViewData| -> trellis::Result<String> {
///     Ok(format!("<h1>{template}</h1>"))
/// };
///
/// let container = ContainerBuilder::new()
///     .uri_generator(Arc::new(generator))
///     .view(Arc::new(view))
///     .build();
///
/// assert!(container.contains_named("uri.generator"));
/// assert!(container.contains_named("view"));
/// ```
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    /// Create a new container builder
    pub fn new() -> Self {
        Self {
            container: Container::new(),
        }
    }

    /// Register a service instance
    pub fn register<T: 'static + Send + Sync>(mut self, instance: T) -> Self {
        self.container.register(instance);
        self
    }

    /// Bind a trait to a concrete implementation
    ///
    /// This enables resolving `Arc<dyn Trait>` to the registered implementation.
    /// The implementation must have been registered first (or will be).
    pub fn bind<Trait, Impl, F>(mut self, caster: F) -> Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        self.container.register_trait::<Trait, Impl, F>(caster);
        self
    }

    /// Install the route URI generator under `"uri.generator"` and bind it for
    /// typed injection of `Arc<dyn UriGenerator>`.
    pub fn uri_generator(self, generator: Arc<dyn UriGenerator>) -> Self {
        self.uri_generator_at(URI_GENERATOR_SERVICE, generator)
    }

    /// Same as [`uri_generator`](Self::uri_generator) under a custom id.
    pub fn uri_generator_at(
        mut self,
        id: impl Into<String>,
        generator: Arc<dyn UriGenerator>,
    ) -> Self {
        self.container.register_uri_generator(id, generator.clone());
        self.register(UriGeneratorSlot(generator))
            .bind::<dyn UriGenerator, UriGeneratorSlot, _>(|slot| slot.0.clone())
    }

    /// Install the template renderer under `"view"` and bind it for typed
    /// injection of `Arc<dyn View>`.
    pub fn view(self, view: Arc<dyn View>) -> Self {
        self.view_at(VIEW_SERVICE, view)
    }

    /// Same as [`view`](Self::view) under a custom id.
    pub fn view_at(mut self, id: impl Into<String>, view: Arc<dyn View>) -> Self {
        self.container.register_view(id, view.clone());
        self.register(ViewSlot(view))
            .bind::<dyn View, ViewSlot, _>(|slot| slot.0.clone())
    }

    /// Build the container
    pub fn build(self) -> Container {
        self.container
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Typed entries backing the trait bindings installed by `uri_generator` and `view`.
struct UriGeneratorSlot(Arc<dyn UriGenerator>);
struct ViewSlot(Arc<dyn View>);
