use crate::common::response;
use crate::di::{Container, Injectable};
use crate::error::Result;
use crate::routing::{RouteParams, UriGenerator};
use crate::view::{View, ViewData};
use axum::response::Response;
use std::sync::Arc;

/// Statically typed counterpart of [`ControllerBase`](super::ControllerBase).
///
/// Both collaborators are injected up front, so there is no service lookup or
/// contract check per request.
#[derive(Clone)]
pub struct Responder {
    uri_generator: Arc<dyn UriGenerator>,
    view: Arc<dyn View>,
}

impl Responder {
    pub fn new(uri_generator: Arc<dyn UriGenerator>, view: Arc<dyn View>) -> Self {
        Self {
            uri_generator,
            view,
        }
    }

    pub fn redirect_to_route(&self, name: &str, params: &RouteParams) -> Result<Response> {
        tracing::debug!(route = name, "Redirecting to route");
        let uri = self.uri_generator.generate(name, params)?;
        response::redirect(&uri)
    }

    pub fn render(&self, template: &str, data: &ViewData) -> Result<Response> {
        tracing::debug!(template, "Rendering template");
        let html = self.view.render(template, data)?;
        Ok(response::html(html))
    }
}

impl Injectable for Responder {
    fn inject(container: &Container) -> Result<Self> {
        Ok(Self {
            uri_generator: container.resolve_trait::<dyn UriGenerator>()?,
            view: container.resolve_trait::<dyn View>()?,
        })
    }
}
