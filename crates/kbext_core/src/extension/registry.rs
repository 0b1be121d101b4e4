//! Knowledge-base extension registry.
//!
//! # Responsibility
//! - Order discovered extensions deterministically and freeze them into a
//!   snapshot.
//! - Answer lookups by identifier and dispatch capability calls.
//!
//! # Invariants
//! - Reads before `initialize` behave as an empty registry.
//! - A published snapshot is never edited; re-initialization swaps in a new one.
//! - Sorting is stable: equal order keys keep discovery order.
//! - Dispatch consults the first extension only and never falls through.

use crate::config::{ConfigError, DuplicateIdPolicy, RegistryConfig};
use crate::extension::capability::capability_list;
use crate::extension::contract::{DisambiguationError, KnowledgeBaseExtension};
use crate::model::annotation::{AnnotationActionHandler, AnnotatorState};
use crate::model::knowledge_base::{ConceptIri, KbHandle, KnowledgeBase};
use arc_swap::ArcSwapOption;
use log::{debug, error, info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;
use std::sync::Arc;

/// Shared handle to one registered extension.
pub type ExtensionRef = Arc<dyn KnowledgeBaseExtension>;

/// Lifecycle state of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Uninitialized,
    Ready,
}

/// Immutable, ordered view of the registered extensions.
///
/// Holding a snapshot keeps it alive even if the registry is re-initialized.
#[derive(Clone)]
pub struct ExtensionSnapshot(Arc<Vec<ExtensionRef>>);

impl ExtensionSnapshot {
    fn empty() -> Self {
        Self(Arc::new(Vec::new()))
    }

    /// Returns extension ids in snapshot order.
    pub fn ids(&self) -> Vec<&str> {
        self.0.iter().map(|extension| extension.bean_name()).collect()
    }

    /// Returns whether both snapshots are the same published instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ExtensionSnapshot {
    type Target = [ExtensionRef];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl Debug for ExtensionSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}

/// Registry of knowledge-base extensions.
///
/// One instance is owned by the host's composition root and shared as
/// `Arc<KnowledgeBaseExtensionRegistry>`.
pub struct KnowledgeBaseExtensionRegistry {
    config: RegistryConfig,
    snapshot: ArcSwapOption<Vec<ExtensionRef>>,
}

impl Default for KnowledgeBaseExtensionRegistry {
    fn default() -> Self {
        Self {
            config: RegistryConfig::default(),
            snapshot: ArcSwapOption::empty(),
        }
    }
}

impl Debug for KnowledgeBaseExtensionRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnowledgeBaseExtensionRegistry")
            .field("config", &self.config)
            .field("state", &self.state())
            .field("extensions", &self.list_extensions())
            .finish()
    }
}

impl KnowledgeBaseExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry after validating `config`.
    pub fn with_config(config: RegistryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            snapshot: ArcSwapOption::empty(),
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Sorts `candidates` and publishes them as the new snapshot.
    ///
    /// `None` means nothing was discovered and publishes an empty snapshot.
    /// Any previous snapshot is replaced, never extended.
    ///
    /// # Errors
    /// - `DuplicateExtensionId` when the policy is `Reject` and two candidates
    ///   share one id. The previous snapshot stays published.
    pub fn initialize(&self, candidates: Option<&[ExtensionRef]>) -> Result<(), RegistryError> {
        let mut extensions: Vec<ExtensionRef> = Vec::new();

        if let Some(candidates) = candidates {
            extensions.extend(candidates.iter().cloned());
            // `sort_by_key` is stable.
            extensions.sort_by_key(|extension| extension.order());
            self.check_duplicate_ids(&extensions)?;

            for extension in &extensions {
                info!(
                    "event=kb_extension_found module=registry status=ok id={} order={} type={} capabilities={}",
                    extension.bean_name(),
                    extension.order(),
                    abbreviate_type_name(extension.type_name(), self.config.type_name_hint),
                    capability_list(extension.capabilities())
                );
            }
        }

        let count = extensions.len();
        self.snapshot.store(Some(Arc::new(extensions)));
        debug!("event=kb_registry_ready module=registry status=ok count={count}");
        Ok(())
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> RegistryState {
        if self.snapshot.load().is_some() {
            RegistryState::Ready
        } else {
            RegistryState::Uninitialized
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.state() == RegistryState::Ready
    }

    /// Returns the published snapshot, or an empty one before initialization.
    pub fn list_extensions(&self) -> ExtensionSnapshot {
        self.snapshot
            .load_full()
            .map(ExtensionSnapshot)
            .unwrap_or_else(ExtensionSnapshot::empty)
    }

    pub fn len(&self) -> usize {
        self.list_extensions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the first extension in snapshot order whose id equals `id`.
    ///
    /// Matching is exact. With duplicated ids the earliest one in sort order
    /// is returned.
    pub fn find_extension(&self, id: Option<&str>) -> Option<ExtensionRef> {
        let id = id?;
        self.list_extensions()
            .iter()
            .find(|extension| extension.bean_name() == id)
            .cloned()
    }

    /// Dispatches `disambiguate` to the first extension in snapshot order.
    ///
    /// The first extension's result is returned as-is, even when it refuses
    /// with `Unsupported`; later extensions are never consulted.
    ///
    /// # Errors
    /// - `IllegalState` when no extension is registered.
    /// - `Extension` carrying the extension's own error unchanged.
    pub fn fire_disambiguate(
        &self,
        kb: &KnowledgeBase,
        concept_iri: &ConceptIri,
        state: &AnnotatorState,
        action_handler: &dyn AnnotationActionHandler,
    ) -> Result<Vec<KbHandle>, DispatchError> {
        let snapshot = self.list_extensions();
        let Some(extension) = snapshot.first() else {
            error!(
                "event=kb_disambiguate module=registry status=error reason=no_extensions kb={}",
                kb.id
            );
            return Err(DispatchError::IllegalState);
        };

        debug!(
            "event=kb_disambiguate module=registry status=dispatch id={} kb={} concept={}",
            extension.bean_name(),
            kb.id,
            concept_iri
        );
        extension
            .disambiguate(kb, concept_iri, state, action_handler)
            .map_err(DispatchError::Extension)
    }

    fn check_duplicate_ids(&self, extensions: &[ExtensionRef]) -> Result<(), RegistryError> {
        let mut counts = BTreeMap::<&str, usize>::new();
        for extension in extensions {
            *counts.entry(extension.bean_name()).or_default() += 1;
        }

        for (id, count) in counts.into_iter().filter(|(_, count)| *count > 1) {
            match self.config.duplicate_ids {
                DuplicateIdPolicy::Reject => {
                    error!(
                        "event=kb_extension_duplicate module=registry status=error id={id} count={count}"
                    );
                    return Err(RegistryError::DuplicateExtensionId(id.to_string()));
                }
                DuplicateIdPolicy::FirstWins => {
                    warn!(
                        "event=kb_extension_duplicate module=registry status=degraded id={id} count={count}"
                    );
                }
            }
        }
        Ok(())
    }
}

/// Shortens a Rust type path so it fits `hint` characters where possible.
///
/// Leading module segments are cut to their first character, left to right,
/// until the remainder fits. The final segment and any generic arguments are
/// kept intact, so the result can still exceed `hint`. Tuple, reference,
/// pointer and slice names are returned unchanged.
pub fn abbreviate_type_name(type_name: &str, hint: usize) -> String {
    if type_name.len() <= hint || type_name.starts_with(['(', '&', '*', '[']) {
        return type_name.to_string();
    }

    let (path, generics) = match type_name.find('<') {
        Some(index) => type_name.split_at(index),
        None => (type_name, ""),
    };
    let segments: Vec<&str> = path.split("::").collect();
    let last = segments.len() - 1;

    let mut abbreviated = String::with_capacity(hint);
    let mut consumed = 0usize;
    for (index, segment) in segments.iter().enumerate() {
        consumed += segment.len();
        let remaining = path.len() - consumed + generics.len();
        if index == last || abbreviated.len() + segment.len() + remaining <= hint {
            abbreviated.push_str(segment);
        } else if let Some(first) = segment.chars().next() {
            abbreviated.push(first);
        }

        if index != last {
            abbreviated.push_str("::");
            consumed += 2;
        }
    }
    abbreviated.push_str(generics);
    abbreviated
}

/// Registry initialization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateExtensionId(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateExtensionId(value) => {
                write!(f, "extension id registered more than once: {value}")
            }
        }
    }
}

impl Error for RegistryError {}

/// Capability dispatch errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No extension is registered; a wiring error on the host side.
    IllegalState,
    /// The selected extension failed; its error is carried unchanged.
    Extension(DisambiguationError),
}

impl Display for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalState => write!(f, "no knowledge-base extension is registered"),
            Self::Extension(err) => Display::fmt(err, f),
        }
    }
}

impl Error for DispatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IllegalState => None,
            Self::Extension(err) => Some(err),
        }
    }
}
