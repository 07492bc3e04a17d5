//! CLI for building Gravatar URLs and image tags.

mod args;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use gravatar_core::config;

pub use args::AvatarArgs;
use commands::{run_completions, run_config, run_hash, run_img, run_url};

/// Top-level CLI for the gravatar helper.
#[derive(Debug, Parser)]
#[command(name = "gravatar")]
#[command(about = "Build Gravatar avatar URLs and <img> tags from email addresses", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the Gravatar hash of an email address.
    Hash {
        /// Email address (trimmed and lower-cased before hashing); empty when omitted.
        email: Option<String>,
    },

    /// Print the avatar URL for an email address.
    Url {
        /// Email address.
        email: Option<String>,

        #[command(flatten)]
        avatar: AvatarArgs,
    },

    /// Print an <img /> tag for an email address.
    Img {
        /// Email address.
        email: Option<String>,

        #[command(flatten)]
        avatar: AvatarArgs,

        /// Print src, class and alt as JSON instead of markup.
        #[arg(long)]
        json: bool,
    },

    /// Show the config file location and effective defaults.
    Config,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Hash { email } => run_hash(email.as_deref().unwrap_or(""))?,
            CliCommand::Url { email, avatar } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_url(email.as_deref().unwrap_or(""), &avatar, &cfg)?;
            }
            CliCommand::Img {
                email,
                avatar,
                json,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_img(email.as_deref().unwrap_or(""), &avatar, &cfg, json)?;
            }
            CliCommand::Config => run_config()?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
