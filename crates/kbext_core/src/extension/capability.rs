//! Capability vocabulary for knowledge-base extensions.

use std::fmt::{Display, Formatter};

/// Optional operation an extension may implement.
///
/// Declarations are diagnostic only. Dispatch never consults them before
/// calling into an extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExtensionCapability {
    Disambiguate,
}

impl ExtensionCapability {
    /// Stable string id used in log records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disambiguate => CAPABILITY_DISAMBIGUATE,
        }
    }

    /// User-facing short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Disambiguate => {
                "Resolve a mention under a concept IRI to candidate knowledge-base entities."
            }
        }
    }
}

impl Display for ExtensionCapability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log/string value for the disambiguation capability.
pub const CAPABILITY_DISAMBIGUATE: &str = "disambiguate";

/// Renders a capability list as a comma-separated value for log records.
pub fn capability_list(capabilities: &[ExtensionCapability]) -> String {
    if capabilities.is_empty() {
        return "none".to_string();
    }
    capabilities
        .iter()
        .map(|capability| capability.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
