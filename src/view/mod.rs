use crate::error::Result;
use serde_json::{Map, Value};

/// Variables handed to a template.
pub type ViewData = Map<String, Value>;

/// Default container id for the [`View`] service.
pub const VIEW_SERVICE: &str = "view";

/// Renders a template into markup.
pub trait View: Send + Sync + 'static {
    /// # Errors
    /// Implementations fail when the template is missing or rendering fails.
    fn render(&self, template: &str, data: &ViewData) -> Result<String>;
}

impl<F> View for F
where
    F: Fn(&str, &ViewData) -> Result<String> + Send + Sync + 'static,
{
    fn render(&self, template: &str, data: &ViewData) -> Result<String> {
        self(template, data)
    }
}
