//! CLI command definitions for the `switchboard` binary.
//!
//! Uses clap derive macros for argument parsing. `serve` runs the HTTP API;
//! `ask` and `demo` drive the same pipeline from the terminal.

pub mod ask;
pub mod demo;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use switchboard_types::intent::Deployment;

/// Intent-routed customer support agent.
#[derive(Parser)]
#[command(name = "switchboard", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the configuration file.
    #[arg(long, global = true, env = "SWITCHBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the configured deployment (support or sales).
    #[arg(long, global = true, env = "SWITCHBOARD_DEPLOYMENT", value_parser = parse_deployment)]
    pub deployment: Option<Deployment>,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Export spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Host to bind to (defaults to the configured host).
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (defaults to the configured port).
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },

    /// Send one message through the pipeline and print the reply.
    Ask {
        /// The customer's message.
        message: String,

        #[arg(long, default_value = "demo_customer")]
        customer_id: String,
    },

    /// Run the built-in demo conversations and print a log summary.
    Demo,
}

fn parse_deployment(s: &str) -> Result<Deployment, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["switchboard", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, None);
                assert_eq!(port, Some(9000));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_ask_defaults_customer() {
        let cli = Cli::try_parse_from(["switchboard", "ask", "Why is my bill so high?"]).unwrap();
        match cli.command {
            Commands::Ask {
                message,
                customer_id,
            } => {
                assert_eq!(message, "Why is my bill so high?");
                assert_eq!(customer_id, "demo_customer");
            }
            _ => panic!("expected ask"),
        }
        assert_eq!(cli.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "switchboard",
            "demo",
            "--deployment",
            "Sales",
            "--json",
            "-vv",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.deployment, Some(Deployment::Sales));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_deployment() {
        assert!(Cli::try_parse_from(["switchboard", "demo", "--deployment", "retail"]).is_err());
    }
}
