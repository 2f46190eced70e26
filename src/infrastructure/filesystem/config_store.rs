use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;
use validator::Validate;

use crate::domain::entities::provider_table::ProviderTable;
use crate::domain::entities::resolver_config::ResolverConfig;
use crate::infrastructure::git::remote::validate_remote_name;

/// Configuration store related errors
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("Configuration file not found at path: {0}")]
    ConfigFileNotFound(String),

    #[error("Configuration file read failed: {0}")]
    ReadFailed(String),

    #[error("Configuration file write failed: {0}")]
    WriteFailed(String),

    #[error("YAML parsing failed: {0}")]
    YamlParsingFailed(String),

    #[error("YAML serialization failed: {0}")]
    YamlSerializationFailed(String),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Configuration directory creation failed: {0}")]
    DirectoryCreationFailed(String),
}

/// Resolver configuration with schema constraints
#[derive(Debug, Clone, Validate)]
pub struct ValidatedResolverConfig {
    #[validate(length(min = 1, max = 255))]
    pub remote_name: String,

    pub fallback_to_first_remote: bool,

    pub search_parents: bool,

    #[validate(range(min = 1, max = 64))]
    pub scan_max_depth: usize,
}

impl From<&ResolverConfig> for ValidatedResolverConfig {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            remote_name: config.remote_name.clone(),
            fallback_to_first_remote: config.fallback_to_first_remote,
            search_parents: config.search_parents,
            scan_max_depth: config.scan_max_depth,
        }
    }
}

/// Configuration store for the resolver's YAML configuration file
#[derive(Debug, Clone, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Read resolver configuration from a YAML file
    pub fn read_config<P: AsRef<Path>>(
        &self,
        config_path: P,
    ) -> Result<ResolverConfig, ConfigStoreError> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Err(ConfigStoreError::ConfigFileNotFound(
                config_path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(config_path)
            .map_err(|e| ConfigStoreError::ReadFailed(e.to_string()))?;

        let config = self.parse_config(&contents)?;
        debug!(
            path = %config_path.display(),
            remote = %config.remote_name,
            rules = config.providers.len(),
            "Loaded resolver configuration"
        );

        Ok(config)
    }

    /// Parse resolver configuration from a YAML string
    pub fn parse_config(&self, contents: &str) -> Result<ResolverConfig, ConfigStoreError> {
        // An empty file is a valid, all-defaults configuration
        if contents.trim().is_empty() {
            return Ok(ResolverConfig::default());
        }

        let config: ResolverConfig = serde_yaml::from_str(contents)
            .map_err(|e| ConfigStoreError::YamlParsingFailed(e.to_string()))?;

        self.validate_config(&config)?;

        Ok(config)
    }

    /// Read the configuration at `config_path`, or the defaults when no path is given
    pub fn load_or_default(
        &self,
        config_path: Option<&Path>,
    ) -> Result<ResolverConfig, ConfigStoreError> {
        match config_path {
            Some(path) => self.read_config(path),
            None => Ok(ResolverConfig::default()),
        }
    }

    /// Write resolver configuration to a YAML file
    pub fn write_config<P: AsRef<Path>>(
        &self,
        config_path: P,
        config: &ResolverConfig,
    ) -> Result<(), ConfigStoreError> {
        let config_path = config_path.as_ref();

        self.validate_config(config)?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigStoreError::DirectoryCreationFailed(e.to_string()))?;
        }

        let yaml_content = serde_yaml::to_string(config)
            .map_err(|e| ConfigStoreError::YamlSerializationFailed(e.to_string()))?;

        fs::write(config_path, yaml_content)
            .map_err(|e| ConfigStoreError::WriteFailed(e.to_string()))?;

        Ok(())
    }

    /// Validate schema constraints, the remote name and the provider rules
    pub fn validate_config(&self, config: &ResolverConfig) -> Result<(), ConfigStoreError> {
        ValidatedResolverConfig::from(config)
            .validate()
            .map_err(|e| ConfigStoreError::ValidationFailed(e.to_string()))?;

        validate_remote_name(&config.remote_name)
            .map_err(|e| ConfigStoreError::ValidationFailed(e.to_string()))?;

        ProviderTable::from_rules(&config.providers)
            .map_err(|e| ConfigStoreError::ValidationFailed(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::provider_table::ProviderRule;
    use crate::domain::value_objects::provider_kind::ProviderKind;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("gitprovider.yml");

        let config = ResolverConfig::default()
            .with_remote_name("upstream")
            .with_search_parents(true)
            .with_providers(vec![ProviderRule::new(
                ProviderKind::GitLab,
                &["git.company.com"],
            )]);

        let store = ConfigStore::new();
        store.write_config(&config_path, &config).unwrap();
        let loaded = store.read_config(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = ConfigStore::new().read_config(temp_dir.path().join("absent.yml"));
        assert!(matches!(result, Err(ConfigStoreError::ConfigFileNotFound(_))));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = ConfigStore::new().load_or_default(None).unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = ConfigStore::new().parse_config("\n").unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let result = ConfigStore::new().parse_config("remote_name: [unclosed");
        assert!(matches!(result, Err(ConfigStoreError::YamlParsingFailed(_))));
    }

    #[test]
    fn test_unknown_provider_name_is_rejected() {
        let yaml = "providers:\n  - provider: sourceforge\n    hosts: [sf.net]\n";
        let result = ConfigStore::new().parse_config(yaml);
        assert!(matches!(result, Err(ConfigStoreError::YamlParsingFailed(_))));
    }

    #[test]
    fn test_scan_depth_range() {
        let result = ConfigStore::new().parse_config("scan_max_depth: 0\n");
        assert!(matches!(result, Err(ConfigStoreError::ValidationFailed(_))));

        let result = ConfigStore::new().parse_config("scan_max_depth: 1000\n");
        assert!(matches!(result, Err(ConfigStoreError::ValidationFailed(_))));
    }

    #[test]
    fn test_invalid_remote_name() {
        let result = ConfigStore::new().parse_config("remote_name: \"bad name\"\n");
        assert!(matches!(result, Err(ConfigStoreError::ValidationFailed(_))));

        let result = ConfigStore::new().parse_config("remote_name: \"\"\n");
        assert!(matches!(result, Err(ConfigStoreError::ValidationFailed(_))));
    }

    #[test]
    fn test_invalid_provider_pattern() {
        let yaml = "providers:\n  - provider: gitlab\n    host_pattern: \"(unclosed\"\n";
        let result = ConfigStore::new().parse_config(yaml);
        assert!(matches!(result, Err(ConfigStoreError::ValidationFailed(_))));
    }
}
