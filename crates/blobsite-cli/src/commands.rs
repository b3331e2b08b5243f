use std::sync::Arc;

use anyhow::Context;

use blobsite_server::{Server, ServerConfig};
use blobsite_store::BlobContainer;

use crate::cli::{Cli, Command, ConfigArgs, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => serve(args),
        Command::Config(args) => print_config(&args),
    }
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => ServerConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(ServerConfig::default()),
    }
}

fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(url) = args.container_url {
        config.storage.container_url = url;
    }
    if config.security.authorized_user.is_empty() {
        tracing::warn!("security.authorized_user is not set; every request will be rejected");
    }

    let container = BlobContainer::from_url(&config.storage.container_url)
        .context("constructing container client")?;
    let server = Server::new(config, Arc::new(container));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    Ok(())
}

fn print_config(args: &ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_file_is_an_error() {
        let err = load_config(Some(std::path::Path::new("/nonexistent/blobsite.toml"))).unwrap_err();
        assert!(err.to_string().contains("loading config"));
    }

    #[test]
    fn no_config_path_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.storage.index_name, "index.html");
    }
}
