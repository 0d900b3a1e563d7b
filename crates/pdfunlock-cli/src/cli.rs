use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Remove password protection from PDF documents.
#[derive(Debug, Parser)]
#[command(name = "pdfunlock", about, version)]
pub struct Cli {
    /// Password store file. Default: ~/.pdf_unlocker_passwords.json
    #[arg(long, global = true, env = "PDFUNLOCK_STORE", value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decrypt PDF files in place, trying remembered passwords first
    Unlock {
        /// Paths to the PDF files
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Extra password to try for this run only (repeatable, never stored)
        #[arg(long = "password", value_name = "PASSWORD")]
        passwords: Vec<String>,

        /// Never prompt; files without a known password are skipped
        #[arg(long)]
        no_prompt: bool,

        /// Echo typed passwords instead of masking them
        #[arg(long)]
        show_password: bool,

        /// Summary format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Manage remembered passwords
    Passwords {
        #[command(subcommand)]
        action: PasswordsAction,
    },
}

/// `passwords` subcommands.
#[derive(Debug, Subcommand)]
pub enum PasswordsAction {
    /// List remembered passwords in trial order
    List {
        /// Show passwords in full instead of abbreviated
        #[arg(long)]
        reveal: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Forget a remembered password by its number in `passwords list`
    Forget {
        /// 1-based number of the password
        #[arg(value_name = "NUMBER")]
        number: usize,
    },
}

/// Output format for summaries and listings.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON
    Json,
}
