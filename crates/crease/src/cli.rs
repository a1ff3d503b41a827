use std::ops::RangeInclusive;

use clap::{Args, Parser, Subcommand};
use crease::presets::{CHAT_MODELS, DEFAULT_TEMPERATURE, TACTICS_MODEL};

/// Where a local Ollama server listens by default.
///
/// Same value as `crease_ollama_model::DEFAULT_BASE_URL`, which is not
/// available when the `ollama` feature is off.
const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";

/// Accepted sampling temperatures.
pub const TEMPERATURE_RANGE: RangeInclusive<f32> = 0.0..=1.5;

#[derive(Debug, Parser)]
#[command(name = "crease")]
#[command(
    about = "Terminal chat and cricket tactics assistant",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub backend: BackendArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct BackendArgs {
    /// Base URL of the Ollama server
    #[arg(
        long,
        global = true,
        env = "OLLAMA_HOST",
        default_value = DEFAULT_OLLAMA_HOST
    )]
    pub ollama_host: String,

    /// Run without a model backend
    #[arg(long, global = true)]
    pub offline: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Free-form chat with a local model
    Chat {
        /// Model to chat with
        #[arg(
            long,
            default_value = CHAT_MODELS[0],
            value_parser = CHAT_MODELS.to_vec()
        )]
        model: String,

        /// Sampling temperature, between 0.0 and 1.5
        #[arg(
            long,
            default_value_t = DEFAULT_TEMPERATURE,
            value_parser = parse_temperature
        )]
        temperature: f32,
    },
    /// Four-word tactical advice for match situations
    Tactics {
        /// Model to ask
        #[arg(long, default_value = TACTICS_MODEL)]
        model: String,
    },
}

fn parse_temperature(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("`{s}` is not a number"))?;
    if !TEMPERATURE_RANGE.contains(&value) {
        return Err(format!(
            "must be between {:.1} and {:.1}",
            TEMPERATURE_RANGE.start(),
            TEMPERATURE_RANGE.end()
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_chat_defaults() {
        let cli = Cli::try_parse_from(["crease", "chat"]).unwrap();
        let Command::Chat { model, temperature } = cli.command else {
            panic!("expected the chat command");
        };
        assert_eq!(model, "gemma3:4b");
        assert_eq!(temperature, DEFAULT_TEMPERATURE);
        assert!(!cli.backend.offline);
    }

    #[test]
    fn test_tactics_args() {
        let cli = Cli::try_parse_from([
            "crease",
            "tactics",
            "--offline",
            "--ollama-host",
            "http://gpu-box:11434",
        ])
        .unwrap();
        let Command::Tactics { model } = cli.command else {
            panic!("expected the tactics command");
        };
        assert_eq!(model, TACTICS_MODEL);
        assert!(cli.backend.offline);
        assert_eq!(cli.backend.ollama_host, "http://gpu-box:11434");
    }

    #[test]
    fn test_temperature_range() {
        assert_eq!(parse_temperature("0"), Ok(0.0));
        assert_eq!(parse_temperature("1.5"), Ok(1.5));
        assert!(parse_temperature("1.6").is_err());
        assert!(parse_temperature("-0.1").is_err());
        assert!(parse_temperature("NaN").is_err());
        assert!(parse_temperature("warm").is_err());

        let result =
            Cli::try_parse_from(["crease", "chat", "--temperature", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_chat_model() {
        let result =
            Cli::try_parse_from(["crease", "chat", "--model", "gpt-4o"]);
        assert!(result.is_err());
    }
}
