#![deny(unsafe_code)]

use anyhow::Result;
use log::{debug, info, warn};

mod cli;

use cli::{format_output, init, update_config};
use randstr::{Config, RandomStringGenerator};

fn main() -> Result<()> {
    let arguments = init();

    let mut config = match Config::load(&arguments.config) {
        Ok(config) => config,
        Err(error) => {
            warn!("Failed to load configuration: {}", error);
            Config::default()
        }
    };
    update_config(&mut config, &arguments);

    match arguments.commands {
        Some(cli::ArgumentCommands::Config) => {
            config.save(&arguments.config)?;
            info!("Configuration saved to: {}", arguments.config.display());
            Ok(())
        }
        None => {
            let settings = &config.generator;
            debug!(
                "Generating {} string(s) of length {} (source: {})",
                settings.count, settings.length, settings.source
            );

            let generator = RandomStringGenerator::from_config(settings);
            let values = generator.generate_many_tokens(settings.length, settings.count)?;

            if arguments.json || !values.is_empty() {
                println!("{}", format_output(&values, arguments.json)?);
            }
            Ok(())
        }
    }
}
