use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use super::colored_provider;
use crate::application::services::provider_resolver::RepositoryProviderResolver;
use crate::presentation::cli::OutputFormat;

/// Handler for the scan command
pub struct ScanCommand {
    pub root: PathBuf,
    pub output: OutputFormat,
}

impl ScanCommand {
    pub fn new(root: Option<PathBuf>, output: OutputFormat) -> Self {
        Self {
            root: root.unwrap_or_else(|| PathBuf::from(".")),
            output,
        }
    }

    pub fn execute(&self, resolver: &RepositoryProviderResolver) -> Result<()> {
        let descriptions = resolver.scan(&self.root)?;

        if self.output.print_structured(&descriptions)? {
            return Ok(());
        }

        if descriptions.is_empty() {
            println!(
                "{} {}",
                "No working copies found under".yellow(),
                self.root.display()
            );
            return Ok(());
        }

        for description in &descriptions {
            let name = description
                .remote
                .as_ref()
                .map(|remote| remote.full_name())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{} {:<32} {}",
                colored_provider(description.provider),
                name,
                description.path.display()
            );
        }
        Ok(())
    }
}
