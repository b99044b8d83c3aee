//! Configuration for Ramo.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{RamoError, RamoResult};

/// Main configuration for Ramo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Memoization settings.
    #[serde(default)]
    pub memo: MemoConfig,
}

/// Capped memoization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoConfig {
    /// Cache size bound before a full reset (number of entries).
    ///
    /// Kept signed so that a negative value coming from a config file is
    /// rejected explicitly instead of wrapping.
    #[serde(default = "default_memo_cap")]
    pub cap: i64,
}

impl MemoConfig {
    /// Validates the cap and converts it to a usable bound.
    pub fn validated_cap(&self) -> RamoResult<usize> {
        if self.cap < 0 {
            return Err(RamoError::InvalidCap(self.cap));
        }
        Ok(self.cap as usize)
    }
}

impl Default for MemoConfig {
    fn default() -> Self {
        Self {
            cap: default_memo_cap(),
        }
    }
}

fn default_memo_cap() -> i64 {
    1000
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> RamoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RamoResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            memo: MemoConfig::default(),
        }
    }

    /// Tries to load configuration from current directory or uses default.
    pub fn load_or_default() -> Self {
        Self::load("ramo.toml").unwrap_or_else(|_| Self::default_config())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cap() {
        let config = Config::default_config();
        assert_eq!(config.memo.cap, 1000);
        assert_eq!(config.memo.validated_cap().unwrap(), 1000);
    }

    #[test]
    fn test_negative_cap_rejected() {
        let config: Config = toml::from_str("[memo]\ncap = -5\n").unwrap();
        let err = config.memo.validated_cap().unwrap_err();
        assert!(matches!(err, RamoError::InvalidCap(-5)));
    }

    #[test]
    fn test_zero_cap_is_valid() {
        let memo = MemoConfig { cap: 0 };
        assert_eq!(memo.validated_cap().unwrap(), 0);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.memo.cap, 1000);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ramo.toml");

        let mut config = Config::default_config();
        config.memo.cap = 42;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.memo.cap, 42);
    }
}
