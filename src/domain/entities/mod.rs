pub mod provider_table;
pub mod resolver_config;

pub use provider_table::{ProviderRule, ProviderTable, ProviderTableError};
pub use resolver_config::ResolverConfig;
