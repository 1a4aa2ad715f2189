//! Animation preferences.

use std::path::Path;

use eyre::WrapErr;
use serde::{Deserialize, Serialize};

/// User-tunable animation settings for the frontend tick loop.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Duration of one twist animation, in seconds.
    pub twist_duration: f32,
    /// Whether to speed twists up exponentially when the queue backs up.
    pub dynamic_twist_speed: bool,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            twist_duration: 0.2,
            dynamic_twist_speed: true,
        }
    }
}
impl AnimationPreferences {
    /// Loads preferences from a YAML file.
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("error reading preferences file {}", path.display()))?;
        serde_yml::from_str(&text).wrap_err("error parsing preferences file")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let prefs: AnimationPreferences =
            serde_yml::from_str("twist_duration: 0.5").expect("valid yaml");
        assert_eq!(
            prefs,
            AnimationPreferences {
                twist_duration: 0.5,
                dynamic_twist_speed: true,
            },
        );
    }
}
