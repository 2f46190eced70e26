pub mod detect;
pub mod parse;
pub mod providers;
pub mod scan;

pub use detect::*;
pub use parse::*;
pub use providers::*;
pub use scan::*;

use colored::{ColoredString, Colorize};

use crate::domain::value_objects::provider_kind::ProviderKind;

/// Provider name colored for terminal output
pub(crate) fn colored_provider(provider: ProviderKind) -> ColoredString {
    let label = format!("{:<12}", provider.as_str());
    match provider {
        ProviderKind::GitHub => label.bright_white().bold(),
        ProviderKind::GitLab => label.yellow(),
        ProviderKind::Bitbucket => label.blue(),
        ProviderKind::AzureDevOps => label.cyan(),
        ProviderKind::Gitea => label.green(),
        ProviderKind::Unknown => label.dimmed(),
    }
}
