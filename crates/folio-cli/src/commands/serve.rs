use anyhow::Result;
use colored::Colorize;
use folio::{Config, SiteContent};

#[cfg(feature = "dev-server")]
pub fn execute(config: Config, content: SiteContent, port: Option<u16>) -> Result<()> {
    use crate::server::start_server;

    let port = port.unwrap_or(config.server.port);
    println!("{}", "Preparing server...".green().bold());

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async { start_server(config, content, port).await })
}

#[cfg(not(feature = "dev-server"))]
pub fn execute(_config: Config, _content: SiteContent, _port: Option<u16>) -> Result<()> {
    println!("{}", "⚠ Server not available".yellow());
    println!();
    println!("Serving requires the 'dev-server' feature.");
    println!("Rebuild with: cargo build --features dev-server");
    Ok(())
}
