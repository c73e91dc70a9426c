//! Row controller configuration.

use serde::{Deserialize, Serialize};

/// Per-controller configuration.
///
/// # Example
///
/// ```
/// use rowform::config::{RowsConfig, ZeroPosition};
///
/// let config = RowsConfig::new("contacts").zero_position(ZeroPosition::Front);
/// assert_eq!(config.name, "contacts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowsConfig {
    /// Label used in log messages emitted by the controller.
    pub name: String,

    /// How `copy` treats an explicit insertion position of zero.
    pub zero_position: ZeroPosition,
}

impl Default for RowsConfig {
    fn default() -> Self {
        Self {
            name: "rows".to_string(),
            zero_position: ZeroPosition::default(),
        }
    }
}

impl RowsConfig {
    /// Create a new config with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the log label.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the zero-position policy for `copy`.
    pub fn zero_position(mut self, policy: ZeroPosition) -> Self {
        self.zero_position = policy;
        self
    }
}

/// What `copy(row, new_row, Some(0))` does.
///
/// Callers that use `0` to mean "next to the source row" get that reading by
/// default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroPosition {
    /// Position zero is treated as "not given": the copy lands at the source
    /// row's index (or at the front when the source is missing).
    #[default]
    SourceIndex,

    /// Position zero is taken literally: the copy lands at the front.
    Front,
}
