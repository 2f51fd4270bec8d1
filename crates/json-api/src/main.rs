//! Waitline JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    session::{CookieStore, SessionHandler},
    trailing_slash::remove_slash,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use waitline_app::context::AppContext;

use crate::{
    config::{ServerConfig, observability::LogFormat},
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod config;
mod display;
mod extensions;
mod healthcheck;
mod router;
mod shutdown;
mod state;
mod status;
mod waitlist;

#[cfg(test)]
mod test_helpers;

/// Waitline JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level));

    match config.logging.log_format {
        LogFormat::Compact => tracing_subscriber::fmt().with_env_filter(env_filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init(),
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let app = match AppContext::from_database_url(&config.database.database_url, &config.auth.admin_pin)
        .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    if config.auth.session_secret.is_none() {
        warn!("SESSION_SECRET not set; admin sessions will not survive restarts");
    }

    let session_key = match config.auth.session_key() {
        Ok(key) => key,
        Err(key_error) => {
            error!("invalid session secret: {key_error}");

            process::exit(1);
        }
    };

    let session_handler = match SessionHandler::builder(CookieStore::new(), &session_key).build() {
        Ok(handler) => handler,
        Err(session_error) => {
            error!("failed to build session handler: {session_error}");

            process::exit(1);
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .hoop(session_handler)
        .push(router::app_router());

    let doc = OpenApi::new("Waitline API", "0.1.0").merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
