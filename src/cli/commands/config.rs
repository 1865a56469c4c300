//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the configuration as TOML, ready to save as a config file
    #[arg(long)]
    pub toml: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    pub config_file: String,
    #[serde(flatten)]
    pub config: &'a Config,
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.toml {
        print!("{}", toml::to_string_pretty(config)?);
        return Ok(());
    }

    let response = ConfigResponse {
        config_file: XdgDirs::new().config_file().display().to_string(),
        config,
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  corpus:");
            println!("    dir: {}", config.corpus.dir.display());
            println!("    include_patterns: {:?}", config.corpus.include_patterns);
            println!("    exclude_patterns: {:?}", config.corpus.exclude_patterns);
            println!("    max_file_size_mb: {}", config.corpus.max_file_size_mb);
            println!("  queries:");
            println!("    file: {}", config.queries.file.display());
            println!("  output:");
            println!("    dir: {}", config.output.dir.display());
            println!("    sort_results: {}", config.output.sort_results);
            println!("  search:");
            println!("    max_query_length: {}", config.search.max_query_length);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
