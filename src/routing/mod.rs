use crate::error::Result;
use std::collections::BTreeMap;

/// Substitution parameters for a named route (path placeholders, query
/// parameters). Ordered so generators produce stable URIs.
pub type RouteParams = BTreeMap<String, String>;

/// Default container id for the [`UriGenerator`] service.
pub const URI_GENERATOR_SERVICE: &str = "uri.generator";

/// Builds URIs for named routes.
///
/// The router owning the route table implements this; controllers only consume
/// it.
pub trait UriGenerator: Send + Sync + 'static {
    /// Generate the URI for `name`, filling in `params`.
    ///
    /// # Errors
    /// Implementations fail when the route is unknown or a required parameter
    /// is missing.
    fn generate(&self, name: &str, params: &RouteParams) -> Result<String>;
}

impl<F> UriGenerator for F
where
    F: Fn(&str, &RouteParams) -> Result<String> + Send + Sync + 'static,
{
    fn generate(&self, name: &str, params: &RouteParams) -> Result<String> {
        self(name, params)
    }
}
