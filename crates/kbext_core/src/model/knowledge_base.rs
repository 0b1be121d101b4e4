//! Knowledge-base collaborator types.
//!
//! # Responsibility
//! - Describe the knowledge base a concept reference is resolved against.
//! - Describe candidate entities returned by disambiguation.
//!
//! # Invariants
//! - `ConceptIri` is compared by exact string value, never normalized.
//! - `KbHandle::kb_id` refers to the knowledge base that produced it.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Knowledge base descriptor as seen by extensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Stable knowledge-base identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Owning project identifier.
    pub project_id: String,
    /// Read-only knowledge bases must not be written to by extensions.
    pub read_only: bool,
    pub enabled: bool,
}

impl KnowledgeBase {
    /// Creates an enabled, writable knowledge base descriptor.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            project_id: project_id.into(),
            read_only: false,
            enabled: true,
        }
    }
}

/// IRI of the concept a mention should be resolved under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConceptIri(String);

impl ConceptIri {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ConceptIri {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConceptIri {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Candidate entity produced by disambiguation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KbHandle {
    /// Entity IRI inside the knowledge base.
    pub identifier: String,
    /// Display label shown to annotators.
    pub name: String,
    pub description: Option<String>,
    /// Knowledge base the entity was found in.
    pub kb_id: String,
}

impl KbHandle {
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        kb_id: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            description: None,
            kb_id: kb_id.into(),
        }
    }

    /// Sets the optional description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{ConceptIri, KbHandle, KnowledgeBase};

    #[test]
    fn new_knowledge_base_is_enabled_and_writable() {
        let kb = KnowledgeBase::new("kb-1", "Wikidata", "project-7");
        assert!(kb.enabled);
        assert!(!kb.read_only);
        assert_eq!(kb.project_id, "project-7");
    }

    #[test]
    fn concept_iri_displays_raw_value() {
        let iri = ConceptIri::from("http://www.w3.org/2002/07/owl#Thing");
        assert_eq!(iri.to_string(), "http://www.w3.org/2002/07/owl#Thing");
        assert_eq!(iri.as_str(), "http://www.w3.org/2002/07/owl#Thing");
    }

    #[test]
    fn kb_handle_builder_sets_description() {
        let handle = KbHandle::new("http://example.org/Berlin", "Berlin", "kb-1")
            .with_description("capital of Germany");
        assert_eq!(handle.description.as_deref(), Some("capital of Germany"));
        assert_eq!(handle.kb_id, "kb-1");
    }
}
