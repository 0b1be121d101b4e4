//! Host lifecycle trigger for the extension registry.
//!
//! # Responsibility
//! - Collect extension providers while the host starts up.
//! - Finalize the registry when the host announces all components are ready.
//!
//! # Invariants
//! - Providers can only be registered before the first `ContextRefreshed`.
//! - Every `ContextRefreshed` recomputes the registry from the collected
//!   providers; it never appends.

use crate::config::{ConfigError, RegistryConfig};
use crate::extension::registry::{ExtensionRef, KnowledgeBaseExtensionRegistry, RegistryError};
use log::info;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// Lifecycle signals published by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// All extension providers are registered.
    ContextRefreshed,
}

/// Startup phase of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPhase {
    Starting,
    Started,
}

/// Composition root owning the registry and its provider list.
pub struct ExtensionHost {
    registry: Arc<KnowledgeBaseExtensionRegistry>,
    providers: Vec<ExtensionRef>,
    phase: HostPhase,
}

impl Debug for ExtensionHost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let provider_ids: Vec<&str> = self
            .providers
            .iter()
            .map(|extension| extension.bean_name())
            .collect();
        f.debug_struct("ExtensionHost")
            .field("phase", &self.phase)
            .field("providers", &provider_ids)
            .field("registry", &self.registry)
            .finish()
    }
}

impl Default for ExtensionHost {
    fn default() -> Self {
        Self::with_registry(Arc::new(KnowledgeBaseExtensionRegistry::new()))
    }
}

impl ExtensionHost {
    /// Creates a host with a registry built from `config`.
    pub fn new(config: RegistryConfig) -> Result<Self, ConfigError> {
        let registry = KnowledgeBaseExtensionRegistry::with_config(config)?;
        Ok(Self::with_registry(Arc::new(registry)))
    }

    pub fn with_registry(registry: Arc<KnowledgeBaseExtensionRegistry>) -> Self {
        Self {
            registry,
            providers: Vec::new(),
            phase: HostPhase::Starting,
        }
    }

    /// Adds one extension provider in discovery order.
    pub fn register(&mut self, extension: ExtensionRef) -> Result<(), HostError> {
        if self.phase == HostPhase::Started {
            return Err(HostError::AlreadyStarted(extension.bean_name().to_string()));
        }
        self.providers.push(extension);
        Ok(())
    }

    /// Delivers one lifecycle signal to the registry.
    pub fn publish(&mut self, event: LifecycleEvent) -> Result<(), HostError> {
        match event {
            LifecycleEvent::ContextRefreshed => {
                let candidates = if self.providers.is_empty() {
                    None
                } else {
                    Some(self.providers.as_slice())
                };
                self.registry
                    .initialize(candidates)
                    .map_err(HostError::Registry)?;
                self.phase = HostPhase::Started;
                info!(
                    "event=host_context_refreshed module=host status=ok providers={}",
                    self.providers.len()
                );
                Ok(())
            }
        }
    }

    pub fn phase(&self) -> HostPhase {
        self.phase
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Shared registry handle for callers.
    pub fn registry(&self) -> Arc<KnowledgeBaseExtensionRegistry> {
        Arc::clone(&self.registry)
    }
}

/// Host lifecycle errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// Registration attempted after the registry was finalized.
    AlreadyStarted(String),
    Registry(RegistryError),
}

impl Display for HostError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyStarted(value) => {
                write!(f, "host already started; cannot register extension: {value}")
            }
            Self::Registry(err) => write!(f, "registry initialization failed: {err}"),
        }
    }
}

impl Error for HostError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AlreadyStarted(_) => None,
            Self::Registry(err) => Some(err),
        }
    }
}
