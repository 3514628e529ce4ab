use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How the canonical crossing-bond position is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameShiftScheme {
    /// Leave the drawn crossing bonds untouched.
    None,
    /// Cyclize the unit conceptually, rank every candidate backbone bond,
    /// and reopen at the senior one.
    #[default]
    StarsCycled,
}

/// Engine configuration for one structure's polymer processing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct PolymerConfig {
    /// Frame-shift selection scheme.
    pub frame_shift_scheme: FrameShiftScheme,
    /// Whether over-expanded repeats inside one unit are folded away.
    pub fold_repeats: bool,
    /// Output capacity bound for reachability traversals.
    pub reachable_capacity: usize,
}

impl Default for PolymerConfig {
    fn default() -> Self {
        Self {
            frame_shift_scheme: FrameShiftScheme::default(),
            fold_repeats: true,
            reachable_capacity: 4096,
        }
    }
}

impl PolymerConfig {
    /// Loads a configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file; absent keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] on I/O failure or malformed TOML.
    pub fn load_toml(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn builder() -> PolymerConfigBuilder {
        PolymerConfigBuilder::default()
    }
}

/// Builder for [`PolymerConfig`]; unset fields fall back to defaults.
#[derive(Debug, Default)]
pub struct PolymerConfigBuilder {
    frame_shift_scheme: Option<FrameShiftScheme>,
    fold_repeats: Option<bool>,
    reachable_capacity: Option<usize>,
}

impl PolymerConfigBuilder {
    pub fn frame_shift_scheme(mut self, scheme: FrameShiftScheme) -> Self {
        self.frame_shift_scheme = Some(scheme);
        self
    }

    pub fn fold_repeats(mut self, fold: bool) -> Self {
        self.fold_repeats = Some(fold);
        self
    }

    pub fn reachable_capacity(mut self, capacity: usize) -> Self {
        self.reachable_capacity = Some(capacity);
        self
    }

    pub fn build(self) -> PolymerConfig {
        let defaults = PolymerConfig::default();
        PolymerConfig {
            frame_shift_scheme: self.frame_shift_scheme.unwrap_or(defaults.frame_shift_scheme),
            fold_repeats: self.fold_repeats.unwrap_or(defaults.fold_repeats),
            reachable_capacity: self
                .reachable_capacity
                .unwrap_or(defaults.reachable_capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_enables_fold_and_shift() {
        let config = PolymerConfig::default();
        assert_eq!(config.frame_shift_scheme, FrameShiftScheme::StarsCycled);
        assert!(config.fold_repeats);
        assert!(config.reachable_capacity > 0);
    }

    #[test]
    fn builder_overrides_only_what_is_set() {
        let config = PolymerConfig::builder()
            .frame_shift_scheme(FrameShiftScheme::None)
            .build();
        assert_eq!(config.frame_shift_scheme, FrameShiftScheme::None);
        assert!(config.fold_repeats);
    }

    #[test]
    fn load_toml_reads_kebab_case_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "frame-shift-scheme = \"none\"\nfold-repeats = false\nreachable-capacity = 128"
        )
        .unwrap();
        let config = PolymerConfig::load_toml(file.path()).unwrap();
        assert_eq!(config.frame_shift_scheme, FrameShiftScheme::None);
        assert!(!config.fold_repeats);
        assert_eq!(config.reachable_capacity, 128);
    }

    #[test]
    fn load_toml_rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "no-such-key = 1").unwrap();
        assert!(matches!(
            PolymerConfig::load_toml(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
