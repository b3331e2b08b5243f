use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "blobsite",
    about = "Blobsite - static website serving out of a blob container",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Print the effective configuration and exit
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the configured bind address
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Override the configured container URL
    #[arg(long)]
    pub container_url: Option<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "blobsite",
            "serve",
            "--bind",
            "0.0.0.0:9000",
            "--container-url",
            "file:///srv/site",
        ])
        .unwrap();
        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.bind, Some("0.0.0.0:9000".parse().unwrap()));
                assert_eq!(args.container_url.as_deref(), Some("file:///srv/site"));
                assert!(args.config.is_none());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn parses_bare_config_command() {
        let cli = Cli::try_parse_from(["blobsite", "config"]).unwrap();
        assert!(matches!(cli.command, Command::Config(_)));
    }
}
