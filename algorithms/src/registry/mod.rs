pub mod uid_registry;

pub use uid_registry::{RegistryError, UidRegistry};
