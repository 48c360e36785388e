//! YAML configuration for the generate command.
//!
//! Every key is optional; command-line flags take precedence over the file.
//!
//! ```yaml
//! count: 500
//! seed: 42
//! output: fixtures/user_list.json
//! compact: false
//! descriptor:
//!   filename: user_list
//!   title: User List
//!   headers: [name, age]
//! ```

use crate::document::PresentationDescriptor;
use crate::error::{Result, SeedError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest dataset the export service accepts
pub const MAX_COUNT: usize = 1_000_000;

/// Complete YAML configuration for the generate command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    /// Number of records to generate
    pub count: Option<usize>,
    /// Seed for reproducible ages
    pub seed: Option<u64>,
    /// Output path (`-` for stdout)
    pub output: Option<PathBuf>,
    /// Emit single-line JSON
    pub compact: Option<bool>,
    /// Replacement for the built-in descriptor
    pub descriptor: Option<PresentationDescriptor>,
}

impl SeedConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SeedError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: SeedConfig = serde_yaml_ng::from_str(content)
            .map_err(|e| SeedError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(count) = self.count {
            validate_count(count)?;
        }
        if let Some(descriptor) = &self.descriptor {
            descriptor.validate()?;
        }
        Ok(())
    }
}

pub fn validate_count(count: usize) -> Result<()> {
    if count > MAX_COUNT {
        return Err(SeedError::InvalidConfig(format!(
            "count must be at most {}, got {}",
            MAX_COUNT, count
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config() {
        let config = SeedConfig::from_yaml("{}").unwrap();
        assert_eq!(config, SeedConfig::default());
    }

    #[test]
    fn test_full_config() {
        let yaml = r#"
count: 3
seed: 7
output: out/users.json
compact: true
descriptor:
  filename: staff_list
  title: Staff
  headers: [age, name]
"#;
        let config = SeedConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.count, Some(3));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.output, Some(PathBuf::from("out/users.json")));
        assert_eq!(config.compact, Some(true));

        let descriptor = config.descriptor.unwrap();
        assert_eq!(descriptor.filename, "staff_list");
        assert_eq!(descriptor.headers, vec!["age", "name"]);
    }

    #[test]
    fn test_count_limit() {
        assert!(SeedConfig::from_yaml("count: 1000001").is_err());
        assert!(SeedConfig::from_yaml("count: 1000000").is_ok());
        assert!(SeedConfig::from_yaml("count: 0").is_ok());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = SeedConfig::from_yaml("rows: 5").unwrap_err();
        assert!(matches!(err, SeedError::InvalidConfig(_)));
    }

    #[test]
    fn test_invalid_descriptor_rejected() {
        let yaml = r#"
descriptor:
  filename: "bad name"
  title: Users
  headers: [name]
"#;
        assert!(SeedConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("seed.yaml");
        fs::write(&path, "seed: 99\n").unwrap();

        let config = SeedConfig::load(&path).unwrap();
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SeedConfig::load(Path::new("/nonexistent/seed.yaml")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
