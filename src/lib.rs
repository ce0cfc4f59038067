//! # Trellis
//!
//! Controller helpers for axum applications built around a dependency injection
//! container.
//!
//! Handlers get two conveniences: redirecting to a named route and rendering a
//! named template. The collaborators doing the real work, a [`UriGenerator`]
//! and a [`View`], live in the container.
//!
//! ## Features
//!
//! - **ControllerBase**: looks up `"uri.generator"` and `"view"` by id per call
//! - **Responder**: the same helpers with both collaborators injected by type
//! - **Container**: typed and named service registration, trait object support
//! - **Extractors**: `ControllerBase`, `Responder` and `Inject<T>` for axum handlers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use trellis::prelude::*;
//! use axum::routing::get;
//!
//! #[derive(Clone)]
//! struct AppState {
//!     container: Arc<Container>,
//! }
//!
//! impl HasContainer for AppState {
//!     fn get_container(&self) -> &Arc<Container> {
//!         &self.container
//!     }
//! }
//!
//! async fn home(base: ControllerBase) -> trellis::Result<Response> {
//!     base.render("home", &ViewData::new())
//! }
//!
//! async fn legacy(base: ControllerBase) -> trellis::Result<Response> {
//!     base.redirect_to_route("home", &RouteParams::new())
//! }
//!
//! let generator = |name: &str, _: &RouteParams| -> trellis::Result<String> {
//!     Ok(format!("/{name}"))
//! };
//! let view = |template: &str, _: &ViewData| -> trellis::Result<String> {
//!     Ok(format!("<h1>{template}</h1>"))
//! };
//!
//! let container = ContainerBuilder::new()
//!     .uri_generator(Arc::new(generator))
//!     .view(Arc::new(view))
//!     .build();
//!
//! let app: Router = Router::new()
//!     .route("/home", get(home))
//!     .route("/legacy", get(legacy))
//!     .with_state(AppState {
//!         container: Arc::new(container),
//!     });
//! ```

pub mod common;
pub mod config;
pub mod controller;
pub mod di;
pub mod error;
pub mod exception;
pub mod routing;
pub mod view;

// Re-export core types
pub use config::ServiceKeys;
pub use controller::{Controller, ControllerBase, Responder};
pub use di::{Container, ContainerBuilder, HasContainer, Inject, Injectable, ServiceLocator};
pub use error::{Result, TrellisError};
pub use exception::HttpException;
pub use routing::{RouteParams, UriGenerator};
pub use view::{View, ViewData};

// Re-export commonly used types from dependencies
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use trellis::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ServiceKeys;
    pub use crate::controller::{Controller, ControllerBase, Responder};
    pub use crate::di::{
        Container, ContainerBuilder, HasContainer, Inject, Injectable, Service, ServiceLocator,
    };
    pub use crate::error::{Result, TrellisError};
    pub use crate::exception::{ExceptionFilter, HttpException, HttpExceptionFilter};
    pub use crate::routing::{RouteParams, UriGenerator};
    pub use crate::view::{View, ViewData};
    pub use axum::{
        Router,
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    pub use std::sync::Arc;
}
