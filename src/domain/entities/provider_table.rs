use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_objects::provider_kind::ProviderKind;

/// Provider table related errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderTableError {
    #[error("Rule for '{0}' has no host patterns")]
    EmptyRule(ProviderKind),

    #[error("Invalid host pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// A single host → provider mapping.
///
/// A host matches when it contains any of `hosts` (case-insensitive) or
/// matches `host_pattern`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRule {
    pub provider: ProviderKind,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_pattern: Option<String>,
}

impl ProviderRule {
    pub fn new(provider: ProviderKind, hosts: &[&str]) -> Self {
        Self {
            provider,
            hosts: hosts.iter().map(|h| h.to_string()).collect(),
            host_pattern: None,
        }
    }

    pub fn with_host_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.host_pattern = Some(pattern.into());
        self
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    rule: ProviderRule,
    hosts: Vec<String>,
    pattern: Option<Regex>,
}

impl CompiledRule {
    fn compile(rule: &ProviderRule) -> Result<Self, ProviderTableError> {
        let hosts: Vec<String> = rule
            .hosts
            .iter()
            .map(|h| h.trim().to_lowercase())
            .filter(|h| !h.is_empty())
            .collect();

        let pattern = rule
            .host_pattern
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| ProviderTableError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        if hosts.is_empty() && pattern.is_none() {
            return Err(ProviderTableError::EmptyRule(rule.provider));
        }

        Ok(Self {
            rule: rule.clone(),
            hosts,
            pattern,
        })
    }

    fn matches(&self, host: &str) -> bool {
        self.hosts.iter().any(|h| host.contains(h.as_str()))
            || self.pattern.as_ref().is_some_and(|p| p.is_match(host))
    }
}

/// Ordered host pattern table. The first matching rule wins.
#[derive(Debug, Clone)]
pub struct ProviderTable {
    rules: Vec<CompiledRule>,
}

impl Default for ProviderTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProviderTable {
    /// Rules for the public SaaS hosts and the usual self-hosted naming
    pub fn builtin_rules() -> Vec<ProviderRule> {
        vec![
            ProviderRule::new(ProviderKind::GitHub, &["github"]),
            ProviderRule::new(ProviderKind::GitLab, &["gitlab"]),
            ProviderRule::new(ProviderKind::Bitbucket, &["bitbucket"]),
            ProviderRule::new(
                ProviderKind::AzureDevOps,
                &["dev.azure.com", "visualstudio.com"],
            ),
            ProviderRule::new(ProviderKind::Gitea, &["gitea", "forgejo", "codeberg.org"]),
        ]
    }

    pub fn builtin() -> Self {
        let rules = Self::builtin_rules()
            .into_iter()
            .map(|rule| CompiledRule {
                hosts: rule.hosts.clone(),
                pattern: None,
                rule,
            })
            .collect();
        Self { rules }
    }

    /// Build a table from `rules` only
    pub fn from_rules(rules: &[ProviderRule]) -> Result<Self, ProviderTableError> {
        let rules = rules
            .iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Build a table where `overrides` are consulted before the built-in rules
    pub fn with_overrides(overrides: &[ProviderRule]) -> Result<Self, ProviderTableError> {
        let mut table = Self::from_rules(overrides)?;
        table.rules.extend(Self::builtin().rules);
        Ok(table)
    }

    /// Classify a host name. Unmatched hosts are `Unknown`.
    pub fn classify(&self, host: &str) -> ProviderKind {
        let host = host.trim().to_lowercase();
        if host.is_empty() {
            return ProviderKind::Unknown;
        }

        self.rules
            .iter()
            .find(|rule| rule.matches(&host))
            .map(|rule| rule.rule.provider)
            .unwrap_or(ProviderKind::Unknown)
    }

    /// The effective rules in evaluation order
    pub fn rules(&self) -> impl Iterator<Item = &ProviderRule> {
        self.rules.iter().map(|rule| &rule.rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
