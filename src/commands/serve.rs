use crate::{db::tasks::Tasks, libs::config::Config, web};
use anyhow::Result;
use clap::Args;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind, overrides the configured host
    #[arg(long)]
    host: Option<String>,
    /// Port to bind, overrides the configured port
    #[arg(short, long)]
    port: Option<u16>,
}

pub async fn cmd(config: &Config, tasks: Tasks, args: ServeArgs) -> Result<()> {
    let mut server = config.server();
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }

    web::serve(&server.addr(), Arc::new(tasks), config.categories()).await
}
