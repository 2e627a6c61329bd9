use std::io;

use actix_web::{App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use darsana_server::api;
use darsana_server::config::ServerConfig;

/// Main entry point for the server.
///
/// Reads `ServerConfig` from the environment (and `.env`), installs the
/// tracing subscriber and starts the Actix-web HTTP server.
#[actix_web::main]
async fn main() -> io::Result<()> {
	let _ = dotenvy::dotenv();

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new("darsana_server=info,darsana_core=info")),
		)
		.init();

	let config = ServerConfig::from_env().map_err(|e| {
		error!("{e}");
		io::Error::new(io::ErrorKind::InvalidInput, e)
	})?;

	info!(
		host = %config.host,
		port = config.port,
		workers = config.workers,
		max_body_bytes = config.max_body_bytes,
		"Starting darsana server"
	);

	let max_body_bytes = config.max_body_bytes;
	HttpServer::new(move || {
		App::new()
			.wrap(api::cors())
			.configure(api::configure(max_body_bytes))
	})
		.workers(config.workers)
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
