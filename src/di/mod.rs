mod builder;
mod container;
mod extractor;
mod injectable;

pub use builder::ContainerBuilder;
pub use container::{Container, Service, ServiceLocator, downcast_service};
pub use extractor::{HasContainer, Inject};
pub use injectable::Injectable;
