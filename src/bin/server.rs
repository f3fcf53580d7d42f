//! Portfolio asset server: image discovery API plus static file serving.

use anyhow::Result;
use clap::Parser;
use env_logger::Builder;
use log::{info, LevelFilter};
use std::io::Write;

use portfolio_server::common::ServerConfig;
use portfolio_server::images::ImageLibrary;
use portfolio_server::web;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/server.toml")]
    config: String,
}

fn init_logger() {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let args = Args::parse();
    let config = ServerConfig::from_file(&args.config)?;

    info!("🚀 Initializing portfolio asset server...");

    let library = ImageLibrary::new(config.assets.public_dir.clone());
    let app = web::router(library, &config.assets.public_dir);

    let addr = &config.server.address;
    info!("🌐 Asset server running on http://{}", addr);
    info!("📡 API endpoint: http://{}/api/images", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
