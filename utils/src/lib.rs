pub mod registry;

pub use registry::{Factory, Registry, RegistryDescriptor};
