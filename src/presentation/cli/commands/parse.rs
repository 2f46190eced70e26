use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::application::services::provider_resolver::{
    RemoteDescription, RepositoryProviderResolver,
};
use crate::presentation::cli::OutputFormat;

/// Handler for the parse command
pub struct ParseCommand {
    pub path: PathBuf,
    pub output: OutputFormat,
}

impl ParseCommand {
    pub fn new(path: Option<PathBuf>, output: OutputFormat) -> Self {
        Self {
            path: path.unwrap_or_else(|| PathBuf::from(".")),
            output,
        }
    }

    pub fn execute(&self, resolver: &RepositoryProviderResolver) -> Result<()> {
        let description = resolver.describe(&self.path)?;

        // Structured output is the parsed remote itself, `null` when absent
        if self.output.print_structured(&description.remote)? {
            return Ok(());
        }

        self.print_text(&description);
        Ok(())
    }

    fn print_text(&self, description: &RemoteDescription) {
        let Some(url) = &description.url else {
            println!(
                "{} {}",
                "No remote found at".yellow(),
                description.path.display()
            );
            return;
        };

        println!("{:<10}{}", "provider:", description.provider);
        if let Some(name) = &description.remote_name {
            println!("{:<10}{}", "remote:", name);
        }
        println!("{:<10}{}", "url:", url);
        if let Some(push_url) = &description.push_url {
            println!("{:<10}{}", "push url:", push_url);
        }

        match &description.remote {
            Some(remote) => {
                println!("{:<10}{}", "protocol:", remote.protocol);
                println!("{:<10}{}", "host:", remote.host);
                if let Some(port) = remote.port {
                    println!("{:<10}{}", "port:", port);
                }
                println!("{:<10}{}", "owner:", remote.owner);
                println!("{:<10}{}", "repo:", remote.repo);
            }
            None => println!("{}", "Remote URL could not be parsed".yellow()),
        }
    }
}
