use std::{sync::Arc, time::Duration};

use axum::{
	body::Body,
	response::{IntoResponse, Response},
};
use governor::middleware::StateInformationMiddleware;
use tower_governor::{
	governor::{GovernorConfig, GovernorConfigBuilder},
	key_extractor::PeerIpKeyExtractor,
	GovernorError,
};

/// One bucket per peer address, shared by every page.
pub fn pages() -> Arc<GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>> {
	Arc::new(
		GovernorConfigBuilder::default()
			.per_second(10)
			.burst_size(50)
			.use_headers()
			.error_handler(error_handler)
			.finish()
			.unwrap(),
	)
}

fn error_handler(error: GovernorError) -> Response<Body> {
	crate::Error::from(error).into_response()
}

/// Drops per-peer buckets that have gone quiet so the limiter map
/// does not grow with every visitor ever seen.
pub fn cleanup_old_limits(
	config: &Arc<GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>>,
) {
	let limiter = config.limiter().clone();
	let interval = Duration::from_secs(60);

	std::thread::spawn(move || loop {
		std::thread::sleep(interval);

		tracing::debug!("rate limiting storage size: {}", limiter.len());

		limiter.retain_recent();
	});
}
