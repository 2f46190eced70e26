use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Git hosting provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// GitHub (github.com and GitHub Enterprise)
    GitHub,
    /// GitLab (gitlab.com and self-managed instances)
    GitLab,
    /// Bitbucket Cloud / Server
    Bitbucket,
    /// Azure DevOps (dev.azure.com and legacy visualstudio.com)
    AzureDevOps,
    /// Gitea / Forgejo (including codeberg.org)
    Gitea,
    /// No remote, not a repository, or an unrecognized host
    #[default]
    Unknown,
}

impl ProviderKind {
    /// Every variant, in table order
    pub const ALL: [ProviderKind; 6] = [
        ProviderKind::GitHub,
        ProviderKind::GitLab,
        ProviderKind::Bitbucket,
        ProviderKind::AzureDevOps,
        ProviderKind::Gitea,
        ProviderKind::Unknown,
    ];

    /// Stable lowercase identifier, as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::GitHub => "github",
            ProviderKind::GitLab => "gitlab",
            ProviderKind::Bitbucket => "bitbucket",
            ProviderKind::AzureDevOps => "azuredevops",
            ProviderKind::Gitea => "gitea",
            ProviderKind::Unknown => "unknown",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::GitHub => "GitHub",
            ProviderKind::GitLab => "GitLab",
            ProviderKind::Bitbucket => "Bitbucket",
            ProviderKind::AzureDevOps => "Azure DevOps",
            ProviderKind::Gitea => "Gitea",
            ProviderKind::Unknown => "Unknown",
        }
    }

    /// Whether this is a recognized provider rather than the fallback
    pub fn is_known(&self) -> bool {
        !matches!(self, ProviderKind::Unknown)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = ProviderKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "github" | "gh" => Ok(ProviderKind::GitHub),
            "gitlab" | "gl" => Ok(ProviderKind::GitLab),
            "bitbucket" | "bb" => Ok(ProviderKind::Bitbucket),
            "azuredevops" | "azure-devops" | "azure" | "ado" => Ok(ProviderKind::AzureDevOps),
            "gitea" | "forgejo" | "codeberg" => Ok(ProviderKind::Gitea),
            "unknown" => Ok(ProviderKind::Unknown),
            _ => Err(ProviderKindError::UnsupportedProvider(s.to_string())),
        }
    }
}

/// Errors that can occur when working with provider kinds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderKindError {
    #[error(
        "Unsupported provider: '{0}'. Supported providers are: github, gitlab, bitbucket, azuredevops, gitea"
    )]
    UnsupportedProvider(String),
}
