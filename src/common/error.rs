use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::provider_table::ProviderTableError;
use crate::infrastructure::filesystem::config_store::ConfigStoreError;
use crate::infrastructure::git::remote::GitRemoteError;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Git operation failed: {message}")]
    GitError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<git2::Error>,
    },

    #[error("File system operation failed: {message}")]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ProviderError {
    pub fn git_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::GitError {
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn git_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: git2::Error,
    ) -> Self {
        Self::GitError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn filesystem_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn config_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<GitRemoteError> for ProviderError {
    fn from(error: GitRemoteError) -> Self {
        match error {
            GitRemoteError::OpenFailed { path, source } => {
                Self::git_error_with_source("Failed to open repository", Some(path), source)
            }
            GitRemoteError::Inaccessible { path, source } => {
                Self::filesystem_error_with_source("Cannot access path", Some(path), source)
            }
            GitRemoteError::Git2Error(source) => {
                Self::git_error_with_source("Failed to read remote configuration", None, source)
            }
            other => Self::git_error(other.to_string(), None),
        }
    }
}

impl From<ConfigStoreError> for ProviderError {
    fn from(error: ConfigStoreError) -> Self {
        Self::config_error_with_source("Failed to load resolver configuration", error)
    }
}

impl From<ProviderTableError> for ProviderError {
    fn from(error: ProviderTableError) -> Self {
        Self::config_error_with_source("Invalid provider table", error)
    }
}
