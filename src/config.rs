//! Command-line and environment configuration.

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::app_system::Backend;
use crate::clients::HttpConfig;
use crate::domain::UserCreate;
use crate::profile::Locale;

/// View and manage your own user profile.
#[derive(Parser, Debug)]
#[command(name = "my_info", version)]
pub struct Cli {
    /// Base URL of the profile API. Without it a local demo backend is used.
    #[arg(long, env = "MY_INFO_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Bearer token sent with every API request.
    #[arg(long, env = "MY_INFO_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// API version segment of every request path.
    #[arg(long, env = "MY_INFO_API_VERSION", default_value = "v1", global = true)]
    pub api_version: String,

    /// Request timeout in seconds.
    #[arg(long, env = "MY_INFO_TIMEOUT_SECS", default_value_t = 30, global = true)]
    pub timeout_secs: u64,

    /// Language of dialogs and notices.
    #[arg(long, env = "MY_INFO_LOCALE", value_enum, default_value_t = Locale::En, global = true)]
    pub locale: Locale,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, env = "MY_INFO_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Name of the signed-in user of the local demo backend.
    #[arg(long, default_value = "Demo User", global = true)]
    pub demo_name: String,

    /// Email of the signed-in user of the local demo backend.
    #[arg(long, default_value = "demo@example.com", global = true)]
    pub demo_email: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands. Without one the interactive menu starts.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the current profile.
    Show,
    /// Change name and/or email.
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Change the password.
    Password,
    /// Delete the account.
    Delete,
}

impl Cli {
    pub fn backend(&self) -> Backend {
        match &self.api_url {
            Some(base_url) => Backend::Remote(HttpConfig {
                base_url: base_url.clone(),
                api_version: self.api_version.clone(),
                timeout: Duration::from_secs(self.timeout_secs),
            }),
            None => Backend::Local(UserCreate {
                name: self.demo_name.clone(),
                email: self.demo_email.clone(),
                password: None,
            }),
        }
    }
}
