use clap::Parser;

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blobsite=info,tower_http=warn".into()),
        )
        .init();
    let cli = cli::Cli::parse();
    commands::run_command(cli)
}
