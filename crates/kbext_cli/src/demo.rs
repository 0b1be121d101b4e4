//! Demo extensions used by the smoke CLI.

use kbext_core::{
    AnnotationActionHandler, AnnotatorState, ConceptIri, DisambiguationError,
    DisambiguationResult, ExtensionCapability, KbHandle, KnowledgeBase, KnowledgeBaseExtension,
};

/// Proposes the selected text as an entity label under the concept.
pub struct LabelMatchExtension {
    id: String,
    order: i32,
}

impl LabelMatchExtension {
    pub fn new(id: impl Into<String>, order: i32) -> Self {
        Self {
            id: id.into(),
            order,
        }
    }
}

impl KnowledgeBaseExtension for LabelMatchExtension {
    fn bean_name(&self) -> &str {
        &self.id
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn capabilities(&self) -> &[ExtensionCapability] {
        &[ExtensionCapability::Disambiguate]
    }

    fn disambiguate(
        &self,
        kb: &KnowledgeBase,
        concept_iri: &ConceptIri,
        state: &AnnotatorState,
        _action_handler: &dyn AnnotationActionHandler,
    ) -> DisambiguationResult {
        if !kb.enabled {
            return Err(DisambiguationError::KnowledgeBaseUnavailable(kb.id.clone()));
        }
        let Some(label) = state.selected_text.as_deref() else {
            return Ok(vec![]);
        };
        Ok(vec![KbHandle::new(
            format!("{concept_iri}/{}", label.replace(' ', "_")),
            label,
            kb.id.clone(),
        )])
    }
}

/// Returns the concept itself as the only candidate.
pub struct ExactIriExtension {
    id: String,
    order: i32,
}

impl ExactIriExtension {
    pub fn new(id: impl Into<String>, order: i32) -> Self {
        Self {
            id: id.into(),
            order,
        }
    }
}

impl KnowledgeBaseExtension for ExactIriExtension {
    fn bean_name(&self) -> &str {
        &self.id
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn capabilities(&self) -> &[ExtensionCapability] {
        &[ExtensionCapability::Disambiguate]
    }

    fn disambiguate(
        &self,
        kb: &KnowledgeBase,
        concept_iri: &ConceptIri,
        _state: &AnnotatorState,
        _action_handler: &dyn AnnotationActionHandler,
    ) -> DisambiguationResult {
        let handle = KbHandle::new(concept_iri.as_str(), concept_iri.as_str(), kb.id.clone())
            .with_description("exact concept match");
        Ok(vec![handle])
    }
}
