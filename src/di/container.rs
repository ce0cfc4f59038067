use crate::error::{Result, TrellisError};
use crate::routing::UriGenerator;
use crate::view::View;
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

/// An untyped service as handed out by a named lookup.
///
/// Named entries always hold an `Arc<T>` for the registered `T`, so the value
/// downcasts to `Arc<T>` (which may be `Arc<dyn Trait>`).
pub type Service = Arc<dyn Any + Send + Sync>;

/// Type alias for a function that can cast an `Arc<dyn Any>` to another `Arc<dyn Any>`.
/// The inner value is usually an `Arc<dyn Trait>`.
type CasterFn = Arc<dyn Fn(Arc<dyn Any + Send + Sync>) -> Option<Service> + Send + Sync>;

/// Resolves services by string id.
///
/// This is the capability controllers depend on; [`Container`] implements it,
/// tests and host applications may supply their own.
pub trait ServiceLocator: Send + Sync {
    /// # Errors
    /// Returns [`TrellisError::ServiceNotFound`] when nothing is registered
    /// under `id`.
    fn get(&self, id: &str) -> Result<Service>;
}

/// Thread-safe dependency injection container.
///
/// Services are registered either by type (`register`, `register_trait`) or
/// under a string id (`register_named`).
pub struct Container {
    services: DashMap<TypeId, ServiceEntry>,
    trait_mappings: DashMap<TypeId, TypeId>,
    casters: DashMap<TypeId, CasterFn>,
    named: DashMap<String, ServiceEntry>,
}

struct ServiceEntry {
    instance: Service,
}

impl Container {
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
            trait_mappings: DashMap::new(),
            casters: DashMap::new(),
            named: DashMap::new(),
        }
    }

    pub fn register<T: 'static + Send + Sync>(&mut self, instance: T) -> &mut Self {
        let type_id = TypeId::of::<T>();
        let entry = ServiceEntry {
            instance: Arc::new(instance),
        };
        self.services.insert(type_id, entry);
        self
    }

    /// Register `service` under `id`, replacing any previous entry.
    ///
    /// The entry resolves as exactly `Arc<T>`. A concrete `Arc<Engine>` stays an
    /// `Engine` even when `Engine: View`; collaborators the controller helpers
    /// look up go through [`register_view`](Self::register_view) and
    /// [`register_uri_generator`](Self::register_uri_generator), which store the
    /// trait object.
    pub fn register_named<T>(&mut self, id: impl Into<String>, service: Arc<T>) -> &mut Self
    where
        T: ?Sized + 'static + Send + Sync,
    {
        let entry = ServiceEntry {
            instance: Arc::new(service),
        };
        self.named.insert(id.into(), entry);
        self
    }

    /// Register a template renderer under `id` as `Arc<dyn View>`.
    pub fn register_view(&mut self, id: impl Into<String>, view: Arc<dyn View>) -> &mut Self {
        self.register_named::<dyn View>(id, view)
    }

    /// Register a route URI generator under `id` as `Arc<dyn UriGenerator>`.
    pub fn register_uri_generator(
        &mut self,
        id: impl Into<String>,
        generator: Arc<dyn UriGenerator>,
    ) -> &mut Self {
        self.register_named::<dyn UriGenerator>(id, generator)
    }

    pub fn register_trait<Trait, Impl, F>(&mut self, caster_fn: F) -> &mut Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        let trait_id = TypeId::of::<Trait>();
        let impl_id = TypeId::of::<Impl>();

        self.trait_mappings.insert(trait_id, impl_id);

        let caster: CasterFn = Arc::new(move |instance: Arc<dyn Any + Send + Sync>| {
            let concrete = instance.downcast::<Impl>().ok()?;
            let trait_obj: Arc<Trait> = caster_fn(concrete);
            Some(Arc::new(trait_obj) as Service)
        });

        self.casters.insert(trait_id, caster);
        self
    }

    pub fn resolve<T: 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let requested_type_id = TypeId::of::<T>();
        let entry = self.services.get(&requested_type_id).ok_or_else(|| {
            TrellisError::DependencyNotFound {
                type_name: std::any::type_name::<T>().to_string(),
            }
        })?;
        entry
            .instance
            .clone()
            .downcast::<T>()
            .map_err(|_| TrellisError::DowncastFailed {
                type_name: std::any::type_name::<T>().to_string(),
            })
    }

    pub fn resolve_trait<T: ?Sized + 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let requested_type_id = TypeId::of::<T>();

        let caster = self.casters.get(&requested_type_id).ok_or_else(|| {
            TrellisError::DependencyNotFound {
                type_name: std::any::type_name::<T>().to_string(),
            }
        })?;

        let impl_type_id = self.trait_mappings.get(&requested_type_id).ok_or_else(|| {
            TrellisError::DependencyNotFound {
                type_name: format!(
                    "No implementation mapping found for trait '{}'",
                    std::any::type_name::<T>()
                ),
            }
        })?;

        let entry =
            self.services
                .get(impl_type_id.value())
                .ok_or_else(|| TrellisError::DependencyNotFound {
                    type_name: format!(
                        "Implementation for trait '{}' not registered",
                        std::any::type_name::<T>()
                    ),
                })?;

        let downcast_failed = || TrellisError::DowncastFailed {
            type_name: std::any::type_name::<T>().to_string(),
        };

        // The caster yields an Arc<dyn Any> wrapping an Arc<T>.
        let cast_result = (caster.value())(entry.instance.clone()).ok_or_else(downcast_failed)?;
        downcast_service::<T>(cast_result).ok_or_else(downcast_failed)
    }

    /// Resolve the service registered under `id` as an `Arc<T>`.
    ///
    /// # Errors
    /// [`TrellisError::ServiceNotFound`] for an unknown id,
    /// [`TrellisError::DowncastFailed`] when the entry is not a `T`.
    pub fn resolve_named<T: ?Sized + 'static + Send + Sync>(&self, id: &str) -> Result<Arc<T>> {
        downcast_service::<T>(self.get(id)?).ok_or_else(|| TrellisError::DowncastFailed {
            type_name: std::any::type_name::<T>().to_string(),
        })
    }

    pub fn contains_named(&self, id: &str) -> bool {
        self.named.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.services.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty() && self.named.is_empty()
    }
}

impl ServiceLocator for Container {
    fn get(&self, id: &str) -> Result<Service> {
        self.named
            .get(id)
            .map(|entry| entry.instance.clone())
            .ok_or_else(|| TrellisError::ServiceNotFound { id: id.to_string() })
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

/// Unwrap a named-entry value back into the `Arc<T>` it was registered as.
pub fn downcast_service<T: ?Sized + 'static + Send + Sync>(service: Service) -> Option<Arc<T>> {
    service
        .downcast::<Arc<T>>()
        .ok()
        .map(|wrapper| wrapper.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestService {
        value: i32,
    }

    trait MyTrait: Send + Sync {
        fn get_value(&self) -> i32;
    }

    struct MyTraitImpl {
        value: i32,
    }

    impl MyTrait for MyTraitImpl {
        fn get_value(&self) -> i32 {
            self.value
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let mut container = Container::new();
        container.register(TestService { value: 42 });
        let service = container.resolve::<TestService>().unwrap();
        assert_eq!(service.value, 42);
    }

    #[test]
    fn test_register_and_resolve_trait() {
        let mut container = Container::new();
        container.register(MyTraitImpl { value: 99 });
        container.register_trait::<dyn MyTrait, MyTraitImpl, _>(|i| i as Arc<dyn MyTrait>);
        let trait_instance = container.resolve_trait::<dyn MyTrait>().unwrap();
        assert_eq!(trait_instance.get_value(), 99);
    }

    #[test]
    fn test_resolve_missing_type() {
        let container = Container::new();
        let err = container.resolve::<TestService>().err().unwrap();
        assert!(matches!(err, TrellisError::DependencyNotFound { .. }));
    }

    #[test]
    fn test_named_trait_object() {
        let mut container = Container::new();
        container.register_named::<dyn MyTrait>("answer", Arc::new(MyTraitImpl { value: 7 }));
        assert!(container.contains_named("answer"));
        let service = container.resolve_named::<dyn MyTrait>("answer").unwrap();
        assert_eq!(service.get_value(), 7);
    }

    #[test]
    fn test_named_concrete_value() {
        let mut container = Container::new();
        container.register_named("greeting", Arc::new(String::from("hello")));
        let value = container.resolve_named::<String>("greeting").unwrap();
        assert_eq!(value.as_str(), "hello");
    }

    #[test]
    fn test_named_wrong_type() {
        let mut container = Container::new();
        container.register_named("greeting", Arc::new(String::from("hello")));
        let err = container.resolve_named::<dyn MyTrait>("greeting").err().unwrap();
        assert!(matches!(err, TrellisError::DowncastFailed { .. }));
    }

    struct Upper;

    impl View for Upper {
        fn render(&self, template: &str, _data: &crate::view::ViewData) -> Result<String> {
            Ok(template.to_uppercase())
        }
    }

    #[test]
    fn test_register_view_accepts_concrete_renderer() {
        let mut container = Container::new();
        container.register_view("view", Arc::new(Upper));
        let view = container.resolve_named::<dyn View>("view").unwrap();
        assert_eq!(view.render("page", &Default::default()).unwrap(), "PAGE");
    }

    #[test]
    fn test_register_uri_generator_accepts_closure() {
        let generator = |name: &str, _: &crate::routing::RouteParams| -> Result<String> {
            Ok(format!("/{name}"))
        };
        let mut container = Container::new();
        container.register_uri_generator("uri.generator", Arc::new(generator));
        let resolved = container
            .resolve_named::<dyn UriGenerator>("uri.generator")
            .unwrap();
        assert_eq!(resolved.generate("home", &Default::default()).unwrap(), "/home");
    }

    #[test]
    fn test_get_unknown_id() {
        let container = Container::new();
        let err = container.get("uri.generator").err().unwrap();
        match err {
            TrellisError::ServiceNotFound { id } => assert_eq!(id, "uri.generator"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_get_returns_registered_value() {
        let mut container = Container::new();
        let original = Arc::new(5_u32);
        container.register_named("five", original.clone());
        let service = container.get("five").unwrap();
        let resolved = downcast_service::<u32>(service).unwrap();
        assert!(Arc::ptr_eq(&original, &resolved));
    }

    #[test]
    fn test_len_counts_typed_and_named() {
        let mut container = Container::new();
        assert!(container.is_empty());
        container.register(TestService { value: 1 });
        container.register_named("five", Arc::new(5_u32));
        assert_eq!(container.len(), 2);
    }
}
