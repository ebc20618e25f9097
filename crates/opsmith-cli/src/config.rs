use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "opsmith", about = "Requirement-to-playbook generator")]
pub struct Cli {
    /// API key for AI-backed generation
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for AI-backed generation
    #[arg(long, env = "OPSMITH_MODEL", default_value = "gemini-pro")]
    pub model: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract tasks from a requirement and print them as JSON
    Extract {
        /// Free-text description of the desired server configuration
        description: String,
    },
    /// Assemble a playbook locally, without the text-generation service
    Assemble {
        description: String,

        /// basic, intermediate or advanced
        #[arg(long, default_value = "basic")]
        complexity: String,

        /// single or multi
        #[arg(long, default_value = "single")]
        structure: String,

        /// Write the result into this directory instead of stdout
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Generate a playbook through the text-generation service
    Generate {
        description: String,

        /// basic, intermediate or advanced
        #[arg(long, default_value = "basic")]
        complexity: String,

        /// single or multi
        #[arg(long, default_value = "single")]
        structure: String,

        /// Use the offline mock backend instead of the remote service
        #[arg(long)]
        mock: bool,
    },
}
