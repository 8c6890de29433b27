//! listpilot - OAuth broker and campaign-send proxy.
//!
//! Main entry point: parses configuration from flags and environment,
//! wires the provider client into the server, and runs it.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use listpilot_provider::{HttpProvider, ProviderApi, ProviderConfig};
use listpilot_server::{Server, ServerConfig};

/// listpilot - OAuth broker and campaign-send proxy
#[derive(Parser)]
#[command(name = "listpilot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1:8080", env = "LISTPILOT_BIND")]
    bind: SocketAddr,

    /// Frontend base URL; OAuth callback results redirect here
    #[arg(long, default_value = "http://localhost:3000", env = "LISTPILOT_FRONTEND_URL")]
    frontend_url: String,

    /// OAuth client id registered with the provider
    #[arg(long, env = "PROVIDER_CLIENT_ID")]
    client_id: String,

    /// OAuth client secret
    #[arg(long, env = "PROVIDER_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,

    /// Redirect URI registered for the authorization-code flow
    #[arg(
        long,
        default_value = "http://localhost:8080/oauth-callback",
        env = "PROVIDER_REDIRECT_URI"
    )]
    redirect_uri: String,

    /// Allowed CORS origins (comma-separated; empty allows any origin)
    #[arg(long, env = "LISTPILOT_CORS_ORIGINS", value_delimiter = ',')]
    cors_origins: Vec<String>,

    /// Idle session TTL in seconds; sessions never expire when unset
    #[arg(long, env = "LISTPILOT_SESSION_TTL_SECS")]
    session_ttl_secs: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "listpilot=debug,tower_http=debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let provider_config = ProviderConfig::mailchimp()
        .with_client_id(cli.client_id)
        .with_client_secret(cli.client_secret)
        .with_redirect_uri(cli.redirect_uri);
    let provider: Arc<dyn ProviderApi> = Arc::new(HttpProvider::new(provider_config));

    let config = ServerConfig::default()
        .with_bind_address(cli.bind)
        .with_frontend_url(cli.frontend_url)
        .with_cors_origins(cli.cors_origins)
        .with_session_ttl(cli.session_ttl_secs.map(Duration::from_secs));

    info!(bind = %config.bind_address, "listpilot starting");

    let server = Server::new(provider, config);
    server.run().await?;

    Ok(())
}
