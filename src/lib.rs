//! # gitprovider - Git hosting provider detection
//!
//! `gitprovider` inspects a local working copy, reads its configured remote
//! and tells you which hosting provider (GitHub, GitLab, Bitbucket, Azure
//! DevOps, Gitea) it points to. It can also decompose the remote URL into
//! host, owner and repository name.
//!
//! Everything is read-only: the git metadata is read through libgit2, no
//! `git` process is spawned and no network request is made.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gitprovider::{detect_provider, parse_remote_url, ProviderKind};
//!
//! let provider = detect_provider(".");
//! if provider == ProviderKind::GitHub {
//!     let remote = parse_remote_url(".").expect("GitHub remote");
//!     println!("{}/{}", remote.owner, remote.repo);
//! }
//! ```
//!
//! A path that is not a git repository, or a repository without a remote,
//! is not an error: detection returns [`ProviderKind::Unknown`] and parsing
//! returns `None`.
//!
//! ## Architecture
//!
//! - [`domain`]: provider kinds, remote URL grammar, provider table, configuration
//! - [`application`]: [`RepositoryProviderResolver`]
//! - [`infrastructure`]: libgit2 remote lookup and YAML configuration files
//! - [`presentation`]: the `gitprovider` command-line interface
//! - [`common`]: error handling
//!
//! ## Self-hosted instances
//!
//! Host classification is driven by a [`ProviderTable`]. Extra rules from
//! the configuration file are consulted before the built-in ones:
//!
//! ```yaml
//! remote_name: origin
//! providers:
//!   - provider: gitlab
//!     hosts: [git.company.com]
//!   - provider: github
//!     host_pattern: '^ghe\d*\.corp\.example$'
//! ```
//!
//! ```rust,no_run
//! use gitprovider::infrastructure::filesystem::config_store::ConfigStore;
//! use gitprovider::RepositoryProviderResolver;
//!
//! # fn example() -> gitprovider::Result<()> {
//! let config = ConfigStore::new().read_config("gitprovider.yml")?;
//! let resolver = RepositoryProviderResolver::from_config(&config)?;
//! println!("{}", resolver.detect_provider("."));
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::services::provider_resolver::{
    detect_provider, parse_remote_url, RemoteDescription, RepositoryProviderResolver,
};
pub use common::error::ProviderError;
pub use domain::entities::provider_table::{ProviderRule, ProviderTable};
pub use domain::entities::resolver_config::ResolverConfig;
pub use domain::value_objects::provider_kind::ProviderKind;
pub use domain::value_objects::remote_url::{ParsedRemote, RemoteProtocol};

/// Result type alias for convenience
pub type Result<T> = common::result::ProviderResult<T>;
