use serde::{Deserialize, Serialize};

use super::provider_table::ProviderRule;

/// 既定のリモート名
pub const DEFAULT_REMOTE_NAME: &str = "origin";

/// `scan` の既定の探索深さ
pub const DEFAULT_SCAN_MAX_DEPTH: usize = 3;

/// プロバイダー判定の設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// 参照するリモート名
    #[serde(default = "default_remote_name")]
    pub remote_name: String,

    /// 指定リモートが無い場合に最初のリモート（名前順）を使うか
    #[serde(default = "default_true")]
    pub fallback_to_first_remote: bool,

    /// 親ディレクトリを遡ってリポジトリを探すか
    #[serde(default)]
    pub search_parents: bool,

    /// `scan` の最大探索深さ
    #[serde(default = "default_scan_max_depth")]
    pub scan_max_depth: usize,

    /// 組み込みテーブルより先に評価される追加ルール
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub providers: Vec<ProviderRule>,
}

fn default_remote_name() -> String {
    DEFAULT_REMOTE_NAME.to_string()
}

fn default_true() -> bool {
    true
}

fn default_scan_max_depth() -> usize {
    DEFAULT_SCAN_MAX_DEPTH
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            remote_name: default_remote_name(),
            fallback_to_first_remote: true,
            search_parents: false,
            scan_max_depth: DEFAULT_SCAN_MAX_DEPTH,
            providers: Vec::new(),
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// リモート名を設定
    pub fn with_remote_name(mut self, remote_name: impl Into<String>) -> Self {
        self.remote_name = remote_name.into();
        self
    }

    /// フォールバックを設定
    pub fn with_fallback_to_first_remote(mut self, fallback: bool) -> Self {
        self.fallback_to_first_remote = fallback;
        self
    }

    /// 親ディレクトリ探索を設定
    pub fn with_search_parents(mut self, search: bool) -> Self {
        self.search_parents = search;
        self
    }

    pub fn with_scan_max_depth(mut self, depth: usize) -> Self {
        self.scan_max_depth = depth;
        self
    }

    /// 追加ルールを設定
    pub fn with_providers(mut self, providers: Vec<ProviderRule>) -> Self {
        self.providers = providers;
        self
    }
}
