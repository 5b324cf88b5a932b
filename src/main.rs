mod config;
mod dust_client;
mod error;
mod image_client;
mod logging;
mod models;
mod prompt;
mod request_id;
mod router;

use clap::Parser;
use config::Config;
use dust_client::DustClient;
use image_client::ImageClient;
use router::{AppState, build_router};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "post-relay")]
#[command(about = "Relays social post generation requests to Dust and OpenAI")]
struct Args {
    #[arg(short, long, default_value = "0.0.0.0")]
    ip: String,

    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Optional YAML config file; environment variables override it
    #[arg(short, long)]
    config: Option<String>,

    /// trace, debug, info, warn, error (RUST_LOG takes precedence)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[arg(long)]
    log_file: Option<String>,

    /// socks and http proxy for outbound calls, example: socks5://192.168.0.2:10080
    #[arg(long)]
    proxy: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();
    logging::init_logging(&args.log_level, args.log_file.as_deref());

    let config = Config::load(args.config.as_deref())?;
    match &args.config {
        Some(path) => info!("Configuration loaded from: {}", path),
        None => info!("Configuration loaded from environment"),
    }

    // No timeout: upstream calls run until the remote side finishes.
    let client_builder = reqwest::Client::builder();
    let client_builder = match &args.proxy {
        Some(proxy) => client_builder.proxy(reqwest::Proxy::all(proxy)?),
        None => client_builder,
    };
    let http_client = Arc::new(client_builder.build()?);

    let image_client = ImageClient::new(http_client.clone(), config.openai.clone());
    if !image_client.is_configured() {
        warn!("OPENAI_API_KEY not set, /image-generation will report not configured");
    }
    let app_state = AppState {
        dust_client: Arc::new(DustClient::new(
            http_client,
            config.dust.clone(),
            config.prompt_template_path.clone(),
        )),
        image_client: Arc::new(image_client),
    };
    let app = build_router(app_state);

    let bind_address = format!("{}:{}", args.ip, args.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Server started on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
