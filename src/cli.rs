use clap::{Parser, Subcommand, Args};
use std::path::PathBuf;
use anyhow::Result;
use crate::config::Config;
use crate::commands::{demo, rules, transform};
use crate::core::enhancer::PromptEnhancer;

#[derive(Parser)]
#[command(name = "context-transformer")]
#[command(about = "Turn raw coding requests into context-rich prompts")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Commands {
    pub fn execute(self, config: &Config) -> Result<()> {
        let enhancer = PromptEnhancer::builtin();

        match self {
            Commands::Transform(args) => {
                transform::handle_transform_command(&enhancer, config, &args)?;
            }
            Commands::Demo => {
                demo::handle_demo_command(&enhancer);
            }
            Commands::Rules(args) => {
                rules::handle_rules_command(&enhancer, config, &args)?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enhance a request (reads one line from stdin when no words are given)
    Transform(TransformArgs),

    /// Run the built-in example requests (default)
    Demo,

    /// Show the complexity and domain rule tables
    Rules(RulesArgs),
}

#[derive(Args)]
pub struct TransformArgs {
    #[arg(help = "Request text")]
    pub request: Vec<String>,

    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Skip length and content validation")]
    pub no_validate: bool,

    #[arg(long, help = "Print the detected domain and complexity to stderr")]
    pub explain: bool,
}

#[derive(Args)]
pub struct RulesArgs {
    #[arg(short, long, default_value = "simple")]
    pub format: RulesFormat,

    #[arg(long, help = "Show a single domain by name")]
    pub domain: Option<String>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RulesFormat {
    Simple,
    Detailed,
    Json,
}
