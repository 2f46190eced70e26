use git2::{ErrorCode, Repository as Git2Repository, RepositoryOpenFlags};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::domain::entities::resolver_config::ResolverConfig;

/// Git remote lookup related errors
#[derive(Debug, Error)]
pub enum GitRemoteError {
    #[error("Cannot access path {path:?}: {source}")]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open repository at {path:?}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Remote not found: {0}")]
    RemoteNotFound(String),

    #[error("Remote '{0}' has no readable URL")]
    MissingUrl(String),

    #[error("Invalid remote name: {0}")]
    InvalidRemoteName(String),

    #[error("Git2 error: {0}")]
    Git2Error(#[from] git2::Error),
}

/// Remote information as configured in the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteInfo {
    /// Remote name
    pub name: String,

    /// Fetch URL, verbatim
    pub url: String,

    /// Push URL (if different from fetch URL)
    pub push_url: Option<String>,
}

impl RemoteInfo {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            push_url: None,
        }
    }

    /// Set push URL (if different from fetch URL)
    pub fn with_push_url(mut self, push_url: impl Into<String>) -> Self {
        self.push_url = Some(push_url.into());
        self
    }
}

/// Read-only access to the remote configuration of a working copy
#[derive(Debug, Clone)]
pub struct GitRemoteReader {
    remote_name: String,
    fallback_to_first_remote: bool,
    search_parents: bool,
}

impl Default for GitRemoteReader {
    fn default() -> Self {
        Self::from_config(&ResolverConfig::default())
    }
}

impl GitRemoteReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self {
            remote_name: config.remote_name.clone(),
            fallback_to_first_remote: config.fallback_to_first_remote,
            search_parents: config.search_parents,
        }
    }

    pub fn remote_name(&self) -> &str {
        &self.remote_name
    }

    /// Open the repository at `path`.
    ///
    /// Returns `Ok(None)` when `path` does not exist or holds no git metadata.
    /// Parent directories are only searched when `search_parents` is set.
    pub fn open_repository(&self, path: &Path) -> Result<Option<Git2Repository>, GitRemoteError> {
        let exists = path.try_exists().map_err(|source| GitRemoteError::Inaccessible {
            path: path.to_path_buf(),
            source,
        })?;
        if !exists {
            debug!(path = %path.display(), "Path does not exist");
            return Ok(None);
        }

        let flags = if self.search_parents {
            RepositoryOpenFlags::empty()
        } else {
            RepositoryOpenFlags::NO_SEARCH
        };

        match Git2Repository::open_ext(path, flags, std::iter::empty::<&OsStr>()) {
            Ok(repo) => Ok(Some(repo)),
            Err(e) if e.code() == ErrorCode::NotFound => {
                debug!(path = %path.display(), "No git metadata found");
                Ok(None)
            }
            Err(source) => Err(GitRemoteError::OpenFailed {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// List all remotes, ordered by name. Remotes without a readable URL are skipped.
    pub fn list_remotes(&self, repo: &Git2Repository) -> Result<Vec<RemoteInfo>, GitRemoteError> {
        let remote_names = repo.remotes()?;
        let mut names: Vec<&str> = remote_names.iter().flatten().collect();
        names.sort_unstable();

        let mut remotes = Vec::new();
        for name in names {
            match self.get_remote_info(repo, name) {
                Ok(info) => remotes.push(info),
                Err(e) => debug!(remote = name, error = %e, "Skipping remote"),
            }
        }

        Ok(remotes)
    }

    /// Get information about a specific remote
    pub fn get_remote_info(
        &self,
        repo: &Git2Repository,
        name: &str,
    ) -> Result<RemoteInfo, GitRemoteError> {
        validate_remote_name(name)?;

        let remote = repo.find_remote(name).map_err(|e| match e.code() {
            ErrorCode::NotFound => GitRemoteError::RemoteNotFound(name.to_string()),
            ErrorCode::InvalidSpec => GitRemoteError::InvalidRemoteName(name.to_string()),
            _ => GitRemoteError::Git2Error(e),
        })?;

        let url = remote
            .url()
            .or_else(|| remote.pushurl())
            .ok_or_else(|| GitRemoteError::MissingUrl(name.to_string()))?;

        let mut info = RemoteInfo::new(name, url);
        if let Some(push_url) = remote.pushurl().filter(|push_url| *push_url != url) {
            info = info.with_push_url(push_url);
        }

        Ok(info)
    }

    /// Select the configured remote, falling back to the first remote by name.
    pub fn select_remote(&self, repo: &Git2Repository) -> Result<Option<RemoteInfo>, GitRemoteError> {
        match self.get_remote_info(repo, &self.remote_name) {
            Ok(info) => Ok(Some(info)),
            Err(GitRemoteError::RemoteNotFound(_)) | Err(GitRemoteError::MissingUrl(_)) => {
                if !self.fallback_to_first_remote {
                    debug!(remote = %self.remote_name, "Configured remote not present");
                    return Ok(None);
                }
                let fallback = self.list_remotes(repo)?.into_iter().next();
                if let Some(info) = &fallback {
                    debug!(
                        wanted = %self.remote_name,
                        using = %info.name,
                        "Falling back to first remote"
                    );
                }
                Ok(fallback)
            }
            Err(e) => Err(e),
        }
    }

    /// Open the repository at `path` and select its remote.
    ///
    /// `Ok(None)` covers both "not a repository" and "no remote configured".
    pub fn read_remote(&self, path: &Path) -> Result<Option<RemoteInfo>, GitRemoteError> {
        let Some(repo) = self.open_repository(path)? else {
            return Ok(None);
        };
        self.select_remote(&repo)
    }
}

/// Validate remote name according to Git rules
pub fn validate_remote_name(name: &str) -> Result<(), GitRemoteError> {
    if name.is_empty() {
        return Err(GitRemoteError::InvalidRemoteName(
            "Remote name cannot be empty".to_string(),
        ));
    }

    if name.starts_with('.') || name.starts_with('-') {
        return Err(GitRemoteError::InvalidRemoteName(format!(
            "Remote name cannot start with '{}'",
            &name[..1]
        )));
    }

    let invalid_chars = [' ', '\t', ':', '?', '*', '[', '\\', '^', '~'];
    if name
        .chars()
        .any(|c| invalid_chars.contains(&c) || c.is_ascii_control())
        || name.contains("..")
    {
        return Err(GitRemoteError::InvalidRemoteName(format!(
            "Remote name contains invalid characters: {}",
            name
        )));
    }

    if name == "HEAD" {
        return Err(GitRemoteError::InvalidRemoteName(
            "Remote name cannot be 'HEAD'".to_string(),
        ));
    }

    Ok(())
}
