use indexmap::IndexMap;
use serde::Serialize;

use super::TypeDescriptor;

/// Documentation of one prop.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropDescriptor {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub prop_type: Option<TypeDescriptor>,
    /// Only meaningful when `prop_type` is a recognized validator.
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Documentation record for a single component.
///
/// Props keep the order in which they were first written; writing an existing
/// name again updates it in place, which mirrors object-literal merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Documentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub props: IndexMap<String, PropDescriptor>,
}

impl Documentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the descriptor for `name`, creating an empty one if needed.
    pub fn prop_descriptor_mut(&mut self, name: impl Into<String>) -> &mut PropDescriptor {
        self.props.entry(name.into()).or_default()
    }

    pub fn prop(&self, name: &str) -> Option<&PropDescriptor> {
        self.props.get(name)
    }

    /// Name used to refer to the component in reports.
    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or("<anonymous>")
    }
}

/// All components documented in one source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDocumentation {
    /// Path relative to the source root.
    pub file_path: String,
    pub components: Vec<Documentation>,
}
