use std::path::PathBuf;

use clap::Parser;
use portfolio_site::{SiteConfig, SiteError};

#[derive(Debug, Parser)]
#[command(name = "portfolio_site", version, about = "Preview the portfolio site from a terminal")]
pub struct CliArgs {
    /// Render the detail dialog for a project id
    #[arg(long, value_name = "ID", conflicts_with_all = ["filter", "topic"])]
    pub project: Option<String>,

    /// List the projects a filter token would keep visible
    #[arg(long, value_name = "TOKEN", conflicts_with = "topic")]
    pub filter: Option<String>,

    /// Print the mailto link for a contact topic
    #[arg(long, value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Print output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Load the project catalog from a JSON file instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Override the contact email address
    #[arg(long, value_name = "ADDRESS")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Summary,
    Render(String),
    Filter(String),
    Mailto(String),
}

impl CliArgs {
    pub fn action(&self) -> Action {
        if let Some(id) = &self.project {
            Action::Render(id.clone())
        } else if let Some(token) = &self.filter {
            Action::Filter(token.clone())
        } else if let Some(topic) = &self.topic {
            Action::Mailto(topic.clone())
        } else {
            Action::Summary
        }
    }

    /// Flags win over `PORTFOLIO_*` variables.
    pub fn apply_overrides(&self, config: &mut SiteConfig) -> Result<(), SiteError> {
        if let Some(email) = &self.email {
            config.set_contact_email("--email", email)?;
        }
        Ok(())
    }

    /// `env_logger` filter: `--debug`, then `RUST_LOG` (which `.env` may set), then `warn`.
    pub fn log_filter(&self, rust_log: Option<String>) -> String {
        if self.debug {
            return "debug".to_string();
        }
        rust_log
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| "warn".to_string())
    }
}
