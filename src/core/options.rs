//! Analysis options shared by every file of a run.

/// Modules that export React itself.
pub const REACT_MODULES: &[&str] = &["react", "react/addons", "react-native"];

/// Standalone module providing `createReactClass`.
pub const CREATE_REACT_CLASS_MODULE: &str = "create-react-class";

/// Modules whose exports are treated as prop validators.
pub const DEFAULT_VALIDATOR_MODULES: &[&str] = &["react", "react/addons", "react-native", "prop-types"];

/// Haste-style module name used by React's own sources.
pub const LEGACY_VALIDATOR_MODULE: &str = "ReactPropTypes";

pub fn is_react_module(name: &str) -> bool {
    REACT_MODULES.contains(&name)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Extra module names whose exports count as prop validators.
    pub validator_modules: Vec<String>,
}

impl AnalyzeOptions {
    pub fn with_validator_modules(validator_modules: Vec<String>) -> Self {
        Self { validator_modules }
    }

    /// Check whether values imported from `name` are prop validators.
    pub fn is_validator_module(&self, name: &str) -> bool {
        DEFAULT_VALIDATOR_MODULES.contains(&name)
            || name == LEGACY_VALIDATOR_MODULE
            || self.validator_modules.iter().any(|m| m == name)
    }
}
