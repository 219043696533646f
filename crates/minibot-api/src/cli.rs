//! Command-line arguments for the `minibot` binary.

use std::path::PathBuf;

use clap::Parser;

/// Relay chat messages to an LLM and keep a per-user history.
#[derive(Parser)]
#[command(name = "minibot", version, about, long_about = None)]
pub struct Cli {
    /// Address to bind.
    #[arg(long, env = "MINIBOT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, env = "MINIBOT_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Path to a TOML config file (defaults to ./minibot.toml if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Export spans to stdout via OpenTelemetry.
    #[arg(long)]
    pub otel: bool,

    /// Suppress all output except errors.
    #[arg(long)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_localhost_8000() {
        let cli = Cli::try_parse_from(["minibot"]).unwrap();
        assert_eq!(cli.port, 8000);
        assert_eq!(cli.host, "127.0.0.1");
        assert!(cli.config.is_none());
        assert!(!cli.otel);
    }

    #[test]
    fn flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "minibot", "--port", "9000", "--config", "relay.toml", "-vv", "--otel",
        ])
        .unwrap();
        assert_eq!(cli.port, 9000);
        assert_eq!(cli.config, Some(PathBuf::from("relay.toml")));
        assert_eq!(cli.verbose, 2);
        assert!(cli.otel);
    }
}
