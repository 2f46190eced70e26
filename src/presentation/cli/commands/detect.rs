use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::colored_provider;
use crate::application::services::provider_resolver::RepositoryProviderResolver;
use crate::domain::value_objects::provider_kind::ProviderKind;
use crate::presentation::cli::OutputFormat;

#[derive(Debug, Serialize)]
struct DetectRow<'a> {
    path: &'a Path,
    provider: ProviderKind,
}

/// Handler for the detect command
pub struct DetectCommand {
    pub paths: Vec<PathBuf>,
    pub output: OutputFormat,
}

impl DetectCommand {
    pub fn new(paths: Vec<PathBuf>, output: OutputFormat) -> Self {
        let paths = if paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            paths
        };
        Self { paths, output }
    }

    pub fn execute(&self, resolver: &RepositoryProviderResolver) -> Result<()> {
        let results = resolver.detect_all(&self.paths);

        let rows: Vec<DetectRow<'_>> = results
            .iter()
            .map(|(path, provider)| DetectRow {
                path,
                provider: *provider,
            })
            .collect();

        if self.output.print_structured(&rows)? {
            return Ok(());
        }

        // A single path prints just the provider so the output can be captured by scripts
        if let [row] = rows.as_slice() {
            println!("{}", row.provider);
            return Ok(());
        }

        for row in &rows {
            println!("{} {}", colored_provider(row.provider), row.path.display());
        }
        Ok(())
    }
}
