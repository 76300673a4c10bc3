use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use replydraft::config::{Config, API_URL_ENV};
use replydraft::logging::init_tracing;

/// Generate email replies from the terminal.
#[derive(Debug, Parser)]
#[command(name = "replydraft", version, about)]
struct Args {
    /// Base URL of the reply service (overrides REPLYDRAFT_API_URL and the config file).
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to a config file (default: ~/.config/replydraft/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    let config = config
        .with_overrides(std::env::var(API_URL_ENV).ok(), args.api_url)
        .context("Invalid API URL")?;

    replydraft::ui::run(config)
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn parses_without_arguments() {
        let args = Args::try_parse_from(["replydraft"]).unwrap();
        assert!(args.api_url.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn parses_api_url_and_config() {
        let args = Args::try_parse_from([
            "replydraft",
            "--api-url",
            "http://127.0.0.1:9000",
            "--config",
            "/tmp/replydraft.toml",
        ])
        .unwrap();
        assert_eq!(args.api_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(args.config.unwrap().to_str(), Some("/tmp/replydraft.toml"));
    }
}
