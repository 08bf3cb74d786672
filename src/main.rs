#![warn(clippy::pedantic)]

mod config;
mod db;
mod error;
mod model;
mod ratelimit;
mod route;
mod serialize;
mod template;
#[cfg(test)]
mod test;

use std::net::SocketAddr;

use axum::{extract::Request, Router, ServiceExt};
use tower::Layer;
use tower_governor::GovernorLayer;
use tower_http::{
	compression::CompressionLayer, normalize_path::NormalizePathLayer, trace::TraceLayer,
};

pub use config::Config;
pub use error::Error;

pub type Database = sqlx::Pool<sqlx::Postgres>;
pub type AppState = State;

/// The shared application state.
///
/// This should contain all shared dependencies that handlers need to access,
/// such as a database connection pool or the runtime configuration.
///
/// For dependencies only used by a single handler, you can combine states instead.
#[derive(Clone, axum::extract::FromRef)]
pub struct State {
	pub database: Database,
	pub config: Config,
}

fn app(state: State) -> Router {
	route::routes()
		.fallback(route::not_found)
		.layer(TraceLayer::new_for_http())
		.layer(CompressionLayer::new())
		.with_state(state)
}

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt::init();
	dotenvy::dotenv().ok();

	let config = Config::from_env();

	let database = Database::connect(
		&std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
	)
	.await
	.expect("failed to connect to database");

	sqlx::migrate!()
		.run(&database)
		.await
		.expect("failed to run migrations");

	let state = State {
		database,
		config: config.clone(),
	};

	let governor = ratelimit::pages();

	ratelimit::cleanup_old_limits(&governor);

	let app = app(state).layer(GovernorLayer { config: governor });
	let app = NormalizePathLayer::trim_trailing_slash().layer(app);

	let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port))
		.await
		.expect("failed to bind to port");

	tracing::info!("listening on port {}", config.port);

	// The limiter keys on the peer address, which only exists if the
	// listener is served with connect info.
	axum::serve(
		listener,
		ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
	)
	.await
	.unwrap();
}
