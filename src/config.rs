use std::env;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
	pub port: u16,
	/// Base that stored image paths are resolved against.
	pub media_url: String,
}

impl Config {
	pub fn from_env() -> Self {
		Self {
			port: env::var("PORT")
				.ok()
				.and_then(|port| port.parse().ok())
				.unwrap_or(3000),
			media_url: env::var("MEDIA_URL").unwrap_or_else(|_| "/media".to_string()),
		}
	}
}
