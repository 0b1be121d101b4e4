//! Core of the knowledge-base extension registry.
//! Extensions register with a host, are ordered once at startup, and are then
//! looked up by id or dispatched to by capability.

pub mod config;
pub mod extension;
pub mod host;
pub mod logging;
pub mod model;

pub use config::{ConfigError, DuplicateIdPolicy, RegistryConfig, DEFAULT_TYPE_NAME_HINT};
pub use extension::capability::{ExtensionCapability, CAPABILITY_DISAMBIGUATE};
pub use extension::contract::{
    DisambiguationError, DisambiguationResult, KnowledgeBaseExtension, HIGHEST_PRECEDENCE,
    LOWEST_PRECEDENCE,
};
pub use extension::registry::{
    abbreviate_type_name, DispatchError, ExtensionRef, ExtensionSnapshot,
    KnowledgeBaseExtensionRegistry, RegistryError, RegistryState,
};
pub use host::{ExtensionHost, HostError, HostPhase, LifecycleEvent};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::annotation::{AnnotationActionHandler, AnnotatorState, NoopActionHandler};
pub use model::knowledge_base::{ConceptIri, KbHandle, KnowledgeBase};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
