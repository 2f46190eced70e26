//! Provider detection for local working copies.
//!
//! [`RepositoryProviderResolver`] answers two questions about a path: which
//! hosting provider its remote points to, and what that remote URL looks like
//! once decomposed. Both answers are recomputed from the on-disk git metadata
//! on every call.
//!
//! The infallible entry points ([`RepositoryProviderResolver::detect_provider`],
//! [`RepositoryProviderResolver::parse_remote_url`]) never fail: a path that is
//! not a repository, or a repository without a remote, yields
//! [`ProviderKind::Unknown`] / `None`. The `try_*` variants report lower-level
//! failures (unreadable paths, corrupt repositories) as errors instead.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::common::error::ProviderError;
use crate::common::result::ProviderResult;
use crate::domain::entities::provider_table::ProviderTable;
use crate::domain::entities::resolver_config::{ResolverConfig, DEFAULT_SCAN_MAX_DEPTH};
use crate::domain::value_objects::provider_kind::ProviderKind;
use crate::domain::value_objects::remote_url::ParsedRemote;
use crate::infrastructure::git::remote::GitRemoteReader;

/// Everything known about one path's remote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteDescription {
    pub path: PathBuf,

    pub provider: ProviderKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Push URL when it differs from `url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<ParsedRemote>,
}

impl RemoteDescription {
    /// Description of a path without a usable remote
    pub fn unresolved(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            provider: ProviderKind::Unknown,
            remote_name: None,
            url: None,
            push_url: None,
            remote: None,
        }
    }

    pub fn has_remote(&self) -> bool {
        self.url.is_some()
    }
}

/// Resolves the hosting provider and remote URL of working copies
#[derive(Debug, Clone)]
pub struct RepositoryProviderResolver {
    reader: GitRemoteReader,
    table: ProviderTable,
    scan_max_depth: usize,
}

impl Default for RepositoryProviderResolver {
    fn default() -> Self {
        Self {
            reader: GitRemoteReader::default(),
            table: ProviderTable::builtin(),
            scan_max_depth: DEFAULT_SCAN_MAX_DEPTH,
        }
    }
}

impl RepositoryProviderResolver {
    /// Resolver with the default configuration and the built-in provider table
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver for `config`. Fails only when a configured provider rule is invalid.
    pub fn from_config(config: &ResolverConfig) -> ProviderResult<Self> {
        Ok(Self {
            reader: GitRemoteReader::from_config(config),
            table: ProviderTable::with_overrides(&config.providers)?,
            scan_max_depth: config.scan_max_depth,
        })
    }

    /// Replace the provider table
    pub fn with_table(mut self, table: ProviderTable) -> Self {
        self.table = table;
        self
    }

    pub fn table(&self) -> &ProviderTable {
        &self.table
    }

    /// Detect the hosting provider of the working copy at `path`.
    ///
    /// Returns [`ProviderKind::Unknown`] when `path` is not a git repository,
    /// has no remote, or the remote host is not recognized.
    pub fn detect_provider<P: AsRef<Path>>(&self, path: P) -> ProviderKind {
        let path = path.as_ref();
        match self.try_detect_provider(path) {
            Ok(provider) => provider,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Provider detection failed, reporting unknown");
                ProviderKind::Unknown
            }
        }
    }

    /// Parse the remote URL of the working copy at `path`.
    ///
    /// Returns `None` when `path` is not a git repository, has no remote, or
    /// the remote URL cannot be decomposed (a local path, for instance).
    pub fn parse_remote_url<P: AsRef<Path>>(&self, path: P) -> Option<ParsedRemote> {
        let path = path.as_ref();
        match self.try_parse_remote_url(path) {
            Ok(remote) => remote,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Remote lookup failed, reporting none");
                None
            }
        }
    }

    /// Like [`detect_provider`](Self::detect_provider), but surfaces I/O and libgit2 failures
    pub fn try_detect_provider<P: AsRef<Path>>(&self, path: P) -> ProviderResult<ProviderKind> {
        Ok(self.describe(path)?.provider)
    }

    /// Like [`parse_remote_url`](Self::parse_remote_url), but surfaces I/O and libgit2 failures
    pub fn try_parse_remote_url<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> ProviderResult<Option<ParsedRemote>> {
        Ok(self.describe(path)?.remote)
    }

    /// Remote name, raw URL, parsed URL and provider of `path` in one value
    pub fn describe<P: AsRef<Path>>(&self, path: P) -> ProviderResult<RemoteDescription> {
        let path = path.as_ref();

        let Some(info) = self.reader.read_remote(path)? else {
            debug!(path = %path.display(), "No repository or no remote");
            return Ok(RemoteDescription::unresolved(path));
        };

        let remote = match ParsedRemote::parse(&info.url) {
            Ok(remote) => Some(remote),
            Err(e) => {
                debug!(remote = %info.name, url = %info.url, error = %e, "Remote URL not parseable");
                None
            }
        };

        let provider = remote
            .as_ref()
            .map(|remote| self.classify(remote))
            .unwrap_or(ProviderKind::Unknown);

        debug!(path = %path.display(), remote = %info.name, %provider, "Resolved provider");

        Ok(RemoteDescription {
            path: path.to_path_buf(),
            provider,
            remote_name: Some(info.name),
            url: Some(info.url),
            push_url: info.push_url,
            remote,
        })
    }

    /// Classify an already parsed remote by its host
    pub fn classify(&self, remote: &ParsedRemote) -> ProviderKind {
        self.table.classify(&remote.host)
    }

    /// Classify a raw remote URL. Unparseable URLs are `Unknown`.
    pub fn classify_url(&self, url: &str) -> ProviderKind {
        ParsedRemote::parse(url)
            .map(|remote| self.classify(&remote))
            .unwrap_or(ProviderKind::Unknown)
    }

    /// Detect the provider of many paths in parallel. Output order matches input order.
    pub fn detect_all<I, P>(&self, paths: I) -> Vec<(PathBuf, ProviderKind)>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let paths: Vec<PathBuf> = paths
            .into_iter()
            .map(|path| path.as_ref().to_path_buf())
            .collect();

        paths
            .into_par_iter()
            .map(|path| {
                let provider = self.detect_provider(&path);
                (path, provider)
            })
            .collect()
    }

    /// Find working copies below `root` and describe each of them.
    ///
    /// The walk is bounded by `scan_max_depth`, ordered by file name, and does
    /// not descend into `.git` directories or into working copies it found.
    pub fn scan<P: AsRef<Path>>(&self, root: P) -> ProviderResult<Vec<RemoteDescription>> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ProviderError::filesystem_error(
                "Scan root is not a directory",
                Some(root.to_path_buf()),
            ));
        }

        let mut working_copies = Vec::new();
        let mut walker = WalkDir::new(root)
            .max_depth(self.scan_max_depth)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            if entry.file_name() == ".git" {
                walker.skip_current_dir();
                continue;
            }

            if entry.path().join(".git").exists() {
                working_copies.push(entry.path().to_path_buf());
                walker.skip_current_dir();
            }
        }

        debug!(root = %root.display(), found = working_copies.len(), "Scan finished");

        Ok(working_copies
            .into_par_iter()
            .map(|path| {
                self.describe(&path).unwrap_or_else(|e| {
                    warn!(path = %path.display(), error = %e, "Failed to describe working copy");
                    RemoteDescription::unresolved(&path)
                })
            })
            .collect())
    }
}

/// Detect the provider of `path` with the default configuration
pub fn detect_provider<P: AsRef<Path>>(path: P) -> ProviderKind {
    RepositoryProviderResolver::new().detect_provider(path)
}

/// Parse the remote URL of `path` with the default configuration
pub fn parse_remote_url<P: AsRef<Path>>(path: P) -> Option<ParsedRemote> {
    RepositoryProviderResolver::new().parse_remote_url(path)
}
