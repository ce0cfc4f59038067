use crate::common::response;
use crate::config::ServiceKeys;
use crate::di::{Service, ServiceLocator, downcast_service};
use crate::error::{Result, TrellisError};
use crate::exception::HttpException;
use crate::routing::{RouteParams, UriGenerator};
use crate::view::{View, ViewData};
use axum::response::Response;
use std::sync::Arc;

/// Shared helper that concrete controllers embed.
///
/// Collaborators are looked up by id on every call, so a misconfigured
/// container surfaces at the first request that needs the service.
#[derive(Clone)]
pub struct ControllerBase {
    container: Arc<dyn ServiceLocator>,
    keys: ServiceKeys,
}

impl ControllerBase {
    /// Use the default service ids (`"uri.generator"` and `"view"`).
    pub fn new(container: Arc<dyn ServiceLocator>) -> Self {
        Self::with_keys(container, ServiceKeys::default())
    }

    pub fn with_keys(container: Arc<dyn ServiceLocator>, keys: ServiceKeys) -> Self {
        Self { container, keys }
    }

    pub fn keys(&self) -> &ServiceKeys {
        &self.keys
    }

    /// Fetch a service straight from the container.
    pub fn get(&self, id: &str) -> Result<Service> {
        self.container.get(id)
    }

    /// Fetch a service and downcast it to `Arc<T>`.
    pub fn service<T: ?Sized + 'static + Send + Sync>(&self, id: &str) -> Result<Arc<T>> {
        downcast_service::<T>(self.get(id)?).ok_or_else(|| TrellisError::DowncastFailed {
            type_name: std::any::type_name::<T>().to_string(),
        })
    }

    /// Redirect (`302 Found`) to the URI of the named route.
    ///
    /// # Errors
    /// Container and generator failures are returned as-is.
    pub fn redirect_to_route(&self, name: &str, params: &RouteParams) -> Result<Response> {
        let id = &self.keys.uri_generator;
        tracing::debug!(route = name, service = %id, "Redirecting to route");

        let generator = self.service::<dyn UriGenerator>(id)?;
        let uri = generator.generate(name, params)?;
        response::redirect(&uri)
    }

    /// Render `template` with `data` into a `200 OK` HTML response.
    ///
    /// # Errors
    /// Fails with an Internal Server Error [`HttpException`] when the view
    /// service does not implement [`View`]; container and renderer failures
    /// are returned as-is.
    pub fn render(&self, template: &str, data: &ViewData) -> Result<Response> {
        let id = &self.keys.view;
        tracing::debug!(template, service = %id, "Rendering template");

        let Some(view) = downcast_service::<dyn View>(self.get(id)?) else {
            let message = format!(
                "Container service \"{}\" must be an instance of {}",
                id,
                std::any::type_name::<dyn View>()
            );
            tracing::warn!("{}", message);
            return Err(HttpException::internal_server_error(message).into());
        };

        let html = view.render(template, data)?;
        Ok(response::html(html))
    }
}
