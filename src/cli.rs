use crate::config::Environment;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "script-browser")]
#[command(about = "Browse a categorized catalog of install scripts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, value_enum, help = "Site environment (selects the API path prefix)")]
    pub env: Option<Environment>,
    #[arg(long, global = true, help = "Site root, e.g. https://community-scripts.github.io")]
    pub base_url: Option<String>,
    #[arg(long, global = true, help = "Read categories from a JSON file instead of the API")]
    pub file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List categories and their script counts")]
    List {
        #[arg(short = 'F', long, default_value = "human")]
        format: OutputFormat,
    },
    #[command(about = "Show the scripts of one category")]
    Show {
        #[arg(short, long)]
        category: String,
        #[arg(short = 'F', long, default_value = "human")]
        format: OutputFormat,
    },
    #[command(about = "Print the page URL of a script")]
    Route {
        #[arg(short, long)]
        slug: String,
    },
    #[command(about = "Manage configuration")]
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
}

#[derive(Subcommand)]
pub enum ConfigActions {
    #[command(about = "Show current configuration")]
    Show,
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(short, long)]
        key: String,
        #[arg(short, long)]
        value: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
