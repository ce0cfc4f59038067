use crate::config::ServiceKeys;
use crate::controller::{ControllerBase, Responder};
use crate::di::{Container, Injectable};
use crate::error::TrellisError;
use axum::{
    extract::FromRequestParts,
    http::{StatusCode as HttpStatusCode, request::Parts},
};
use std::convert::Infallible;
use std::sync::Arc;

/// Axum extractor for dependency injection
///
/// Injects a service registered by type directly into a handler parameter.
///
/// # Example
/// ```ignore
/// async fn list_users(Inject(repo): Inject<UserRepository>) -> String {
///     repo.names().join(",")
/// }
/// ```
pub struct Inject<T>(pub Arc<T>);

/// Trait that AppState must implement to provide the DI container
pub trait HasContainer {
    fn get_container(&self) -> &Arc<Container>;

    /// Ids the [`ControllerBase`] extractor resolves its collaborators under.
    fn service_keys(&self) -> ServiceKeys {
        ServiceKeys::default()
    }
}

impl<S, T> FromRequestParts<S> for Inject<T>
where
    S: Send + Sync + HasContainer,
    T: 'static + Send + Sync,
{
    type Rejection = (HttpStatusCode, String);

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let container = state.get_container();

        container.resolve::<T>().map(Inject).map_err(|e| {
            (
                HttpStatusCode::INTERNAL_SERVER_ERROR,
                format!("Dependency injection failed: {}", e),
            )
        })
    }
}

/// Deref implementation for convenient access to the inner service
impl<T> std::ops::Deref for Inject<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> Clone for Inject<T> {
    fn clone(&self) -> Self {
        Inject(Arc::clone(&self.0))
    }
}

/// Hands every handler a [`ControllerBase`] over the application container.
impl<S> FromRequestParts<S> for ControllerBase
where
    S: Send + Sync + HasContainer,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(ControllerBase::with_keys(
            state.get_container().clone(),
            state.service_keys(),
        ))
    }
}

impl<S> FromRequestParts<S> for Responder
where
    S: Send + Sync + HasContainer,
{
    type Rejection = TrellisError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Responder::inject(state.get_container())
    }
}
