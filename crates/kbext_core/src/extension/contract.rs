//! Extension contract implemented by knowledge-base extension providers.
//!
//! # Responsibility
//! - Define identity, ordering and capability operations of one extension.
//! - Define the error vocabulary extensions report through dispatch.
//!
//! # Invariants
//! - `bean_name` is stable for the lifetime of the extension.
//! - `order` is only used for sorting; lower values come first.
//! - Capability operations default to refusing with `Unsupported`.

use crate::extension::capability::ExtensionCapability;
use crate::model::annotation::{AnnotationActionHandler, AnnotatorState};
use crate::model::knowledge_base::{ConceptIri, KbHandle, KnowledgeBase};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Order key of an extension that must run before every other one.
pub const HIGHEST_PRECEDENCE: i32 = i32::MIN;
/// Order key of an extension without an explicit order.
pub const LOWEST_PRECEDENCE: i32 = i32::MAX;

/// Result type of extension capability calls.
pub type DisambiguationResult = Result<Vec<KbHandle>, DisambiguationError>;

/// Pluggable knowledge-base extension.
///
/// Implementations are shared as `Arc<dyn KnowledgeBaseExtension>` and may be
/// called from any thread.
pub trait KnowledgeBaseExtension: Send + Sync {
    /// Stable identifier used by `find_extension`.
    fn bean_name(&self) -> &str;

    /// Sort key, ascending.
    fn order(&self) -> i32 {
        LOWEST_PRECEDENCE
    }

    /// Fully qualified type name used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Capabilities this extension claims to implement.
    fn capabilities(&self) -> &[ExtensionCapability] {
        &[]
    }

    /// Resolves a mention under `concept_iri` to candidate entities of `kb`.
    fn disambiguate(
        &self,
        _kb: &KnowledgeBase,
        _concept_iri: &ConceptIri,
        _state: &AnnotatorState,
        _action_handler: &dyn AnnotationActionHandler,
    ) -> DisambiguationResult {
        Err(DisambiguationError::Unsupported {
            extension_id: self.bean_name().to_string(),
            capability: ExtensionCapability::Disambiguate,
        })
    }
}

/// Failures reported by extension capability calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisambiguationError {
    /// The extension does not implement the requested capability.
    Unsupported {
        extension_id: String,
        capability: ExtensionCapability,
    },
    /// The knowledge base could not be reached or is disabled.
    KnowledgeBaseUnavailable(String),
    Failed(String),
}

impl Display for DisambiguationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported {
                extension_id,
                capability,
            } => write!(
                f,
                "extension `{extension_id}` does not support capability `{capability}`"
            ),
            Self::KnowledgeBaseUnavailable(kb_id) => {
                write!(f, "knowledge base is unavailable: {kb_id}")
            }
            Self::Failed(message) => write!(f, "disambiguation failed: {message}"),
        }
    }
}

impl Error for DisambiguationError {}
