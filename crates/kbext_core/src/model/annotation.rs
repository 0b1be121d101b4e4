//! Annotation UI context handed to extensions.
//!
//! Both types are opaque to the registry. They exist so extensions can see
//! which document and selection a disambiguation request originates from.

use serde::{Deserialize, Serialize};

/// Snapshot of the annotator's editor state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatorState {
    pub project_id: String,
    pub document_name: String,
    pub user: String,
    /// Currently selected mention text, if any.
    pub selected_text: Option<String>,
}

impl AnnotatorState {
    pub fn new(
        project_id: impl Into<String>,
        document_name: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            document_name: document_name.into(),
            user: user.into(),
            selected_text: None,
        }
    }

    pub fn with_selection(mut self, text: impl Into<String>) -> Self {
        self.selected_text = Some(text.into());
        self
    }
}

/// UI action context available to an extension while it disambiguates.
pub trait AnnotationActionHandler: Send + Sync {
    /// Stable identifier of the UI surface issuing the request.
    fn handler_id(&self) -> &str;
}

/// Action handler for callers without an interactive UI surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopActionHandler;

impl AnnotationActionHandler for NoopActionHandler {
    fn handler_id(&self) -> &str {
        "noop"
    }
}
