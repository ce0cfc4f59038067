//! Helpers for request handlers.
//!
//! Concrete controllers embed a [`ControllerBase`] and implement [`Controller`]
//! to get `redirect_to_route` / `render` as methods:
//!
//! ```
//! use std::sync::Arc;
//! use trellis::prelude::*;
//!
//! struct PageController {
//!     base: ControllerBase,
//! }
//!
//! impl Controller for PageController {
//!     fn base(&self) -> &ControllerBase {
//!         &self.base
//!     }
//! }
//!
//! let view = |template: &str, _: &ViewData| -> trellis::Result<String> {
//!     Ok(format!("<h1>{template}</h1>"))
//! };
//! let container = ContainerBuilder::new().view(Arc::new(view)).build();
//!
//! let controller = PageController {
//!     base: ControllerBase::new(Arc::new(container)),
//! };
//! let response = controller.render("welcome", &ViewData::new()).unwrap();
//! assert_eq!(response.status(), StatusCode::OK);
//! ```

mod base;
mod responder;

pub use base::ControllerBase;
pub use responder::Responder;

use crate::di::Service;
use crate::error::Result;
use crate::routing::RouteParams;
use crate::view::ViewData;
use axum::response::Response;

/// Implemented by controllers that embed a [`ControllerBase`].
pub trait Controller {
    fn base(&self) -> &ControllerBase;

    fn redirect_to_route(&self, name: &str, params: &RouteParams) -> Result<Response> {
        self.base().redirect_to_route(name, params)
    }

    fn render(&self, template: &str, data: &ViewData) -> Result<Response> {
        self.base().render(template, data)
    }

    fn get(&self, id: &str) -> Result<Service> {
        self.base().get(id)
    }
}
