//! Extension configuration.

use serde::{Deserialize, Serialize};

/// Configuration shared by both extenders.
///
/// # Examples
///
/// ```
/// use u_precedence::extension::ExtensionConfig;
///
/// let config = ExtensionConfig::default().with_max_passes(10);
/// assert_eq!(config.max_passes, Some(10));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionConfig {
    /// Upper bound on outer passes. `None` runs to the fixed point.
    ///
    /// This is the only way to bound running time: a single dominance
    /// evaluation is never interrupted.
    #[serde(default)]
    pub max_passes: Option<usize>,
}

impl ExtensionConfig {
    /// Runs until no pass adds a relation.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Sets the pass budget.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = Some(max_passes);
        self
    }

    /// Whether pass number `completed + 1` may start.
    #[inline]
    pub fn allows_pass(&self, completed: usize) -> bool {
        self.max_passes.map_or(true, |max| completed < max)
    }
}
