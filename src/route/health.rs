use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
	pub status: &'static str,
	pub version: &'static str,
	pub timestamp: DateTime<Utc>,
}

/// Liveness probe; answers before the database does.
#[allow(clippy::unused_async)]
pub async fn health() -> Json<Health> {
	Json(Health {
		status: "ok",
		version: env!("CARGO_PKG_VERSION"),
		timestamp: Utc::now(),
	})
}
