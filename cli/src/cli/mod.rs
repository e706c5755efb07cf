use clap::{Parser, Subcommand};
use console::style;
use randstr::{Config, EntropyKind, Length, RANDSTR_BANNER, RANDSTR_VERSION};
use std::path::PathBuf;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Enable Debugging
    #[clap(long, env, default_value_t = false)]
    pub debug: bool,

    /// Disable Banner
    #[clap(long, default_value_t = false)]
    pub disable_banner: bool,

    /// Configuration file path
    #[clap(short, long, env = "RANDSTR_CONFIG", default_value = "./randstr.yml")]
    pub config: PathBuf,

    /// Length of each string
    #[clap(short, long, allow_negative_numbers = true, value_parser = parse_length)]
    pub length: Option<Length>,
    /// Number of strings to generate
    #[clap(short = 'n', long)]
    pub count: Option<usize>,
    /// Entropy source (os, thread)
    #[clap(long, value_parser = parse_source)]
    pub source: Option<EntropyKind>,
    /// Prefix added in front of every string
    #[clap(short, long)]
    pub prefix: Option<String>,

    /// Output a JSON array
    #[clap(long, default_value_t = false)]
    pub json: bool,

    /// Subcommands
    #[clap(subcommand)]
    pub commands: Option<ArgumentCommands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ArgumentCommands {
    /// Write the effective configuration to the config path
    Config,
}

fn parse_length(input: &str) -> Result<Length, String> {
    input.parse::<Length>().map_err(|e| e.to_string())
}

fn parse_source(input: &str) -> Result<EntropyKind, String> {
    input.parse::<EntropyKind>().map_err(|e| e.to_string())
}

pub fn init() -> Arguments {
    dotenvy::dotenv().ok();
    let arguments = Arguments::parse();

    let log_level = match &arguments.debug {
        false => log::LevelFilter::Info,
        true => log::LevelFilter::Debug,
    };

    env_logger::builder()
        .parse_default_env()
        .format_module_path(false)
        .filter_level(log_level)
        .init();

    // stdout is reserved for the generated strings
    if !arguments.disable_banner {
        eprintln!(
            "{}    by {} - v{}\n",
            style(RANDSTR_BANNER).green(),
            style(AUTHOR).red(),
            style(RANDSTR_VERSION).blue()
        );
    }

    arguments
}

/// Apply command line overrides on top of the loaded configuration
pub fn update_config(config: &mut Config, arguments: &Arguments) {
    if let Some(length) = arguments.length {
        config.generator.length = length.get();
    }
    if let Some(count) = arguments.count {
        config.generator.count = count;
    }
    if let Some(source) = arguments.source {
        config.generator.source = source;
    }
    if let Some(prefix) = &arguments.prefix {
        config.generator.prefix = Some(prefix.clone());
    }
}

/// Render generated values as one per line, or as a JSON array
pub fn format_output(values: &[String], json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string_pretty(values)
    } else {
        Ok(values.join("\n"))
    }
}
