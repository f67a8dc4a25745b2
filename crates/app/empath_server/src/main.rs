//! Empath API server binary.
//!
//! Prints `{"port": N}` to stdout after binding so a parent process can
//! discover the bound port.

use clap::Parser;
use tracing::info;

use empath_api::config::ApiConfig;

/// CLI arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "empath_server", about = "Empath API server")]
struct Args {
    /// Port to listen on (0 = ephemeral). Overrides `BIND_ADDR`.
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Host interface to bind. Overrides `BIND_ADDR`.
    #[arg(long, env = "HOST")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Write logs to stderr so stdout is reserved for the JSON port message.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,empath_api=debug,empath_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    // BIND_ADDR is the base; --host/--port (or HOST/PORT) override it.
    let mut config = ApiConfig::from_env();
    if args.host.is_some() || args.port.is_some() {
        let host = args.host.as_deref().unwrap_or("127.0.0.1");
        let port = args.port.unwrap_or(0);
        config.bind_addr = format!("{host}:{port}");
    }

    info!(bind_addr = %config.bind_addr, "starting empath_server");

    let state = empath_api::AppState::new(config.clone());
    let app = empath_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    // Report the bound port as JSON on stdout so a parent process can read it.
    println!("{}", serde_json::json!({"port": local_addr.port()}));

    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
