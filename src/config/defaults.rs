//! Named configuration presets.

use super::types::{AppConfig, MatchingConfig};

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Case-sensitive `compare`, open ranges accept any higher version
    Default,
    /// Open ranges reject a higher major version
    Compatible,
    /// `compare` folds the case of version segments
    Lenient,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Compatible => "compatible",
            Self::Lenient => "lenient",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "compatible" | "semver" => Some(Self::Compatible),
            "lenient" | "loose" => Some(Self::Lenient),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Case-sensitive compare, open ranges accept any newer version",
            Self::Compatible => "Open version ranges stop at the next major version",
            Self::Lenient => "The compare command ignores case in version segments",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Compatible, Self::Lenient]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        let matching = match preset {
            ConfigPreset::Default => MatchingConfig::default(),
            ConfigPreset::Compatible => MatchingConfig {
                compatible: true,
                ..MatchingConfig::default()
            },
            ConfigPreset::Lenient => MatchingConfig {
                case_sensitive: false,
                ..MatchingConfig::default()
            },
        };
        Self {
            matching,
            ..Self::default()
        }
    }
}
