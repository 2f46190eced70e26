use anyhow::Result;

use super::colored_provider;
use crate::application::services::provider_resolver::RepositoryProviderResolver;
use crate::domain::entities::provider_table::ProviderRule;
use crate::presentation::cli::OutputFormat;

/// Handler for the providers command
pub struct ProvidersCommand {
    pub output: OutputFormat,
}

impl ProvidersCommand {
    pub fn new(output: OutputFormat) -> Self {
        Self { output }
    }

    pub fn execute(&self, resolver: &RepositoryProviderResolver) -> Result<()> {
        let rules: Vec<&ProviderRule> = resolver.table().rules().collect();

        if self.output.print_structured(&rules)? {
            return Ok(());
        }

        for rule in rules {
            let mut patterns = rule.hosts.join(", ");
            if let Some(pattern) = &rule.host_pattern {
                if !patterns.is_empty() {
                    patterns.push_str(", ");
                }
                patterns.push_str(&format!("/{}/", pattern));
            }
            println!("{} {}", colored_provider(rule.provider), patterns);
        }
        Ok(())
    }
}
