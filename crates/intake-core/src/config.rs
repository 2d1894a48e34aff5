//! Ambient session knobs

use intake_export::ViewPrefs;

/// Configuration handed to a new editor session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Fall back to the built-in sample templates when listing fails
    pub fallback_to_samples: bool,
    /// Provenance label stamped into exported configurations
    pub configuration_source: String,
    /// View flags the session starts with
    pub initial_prefs: ViewPrefs,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fallback_to_samples: true,
            configuration_source: "template-editor".to_string(),
            initial_prefs: ViewPrefs::default(),
        }
    }
}
