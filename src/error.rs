use askama::Template;
use axum::{
	body::Body,
	http::{Response, StatusCode},
	response::{Html, IntoResponse},
};
use tower_governor::GovernorError;

use crate::{serialize, template::ErrorTemplate};

/// Error type for the application.
///
/// The Display trait is not sent to the client, so it can name slugs
/// and tables freely; the client only sees the status line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("no post with slug {0:?}")]
	UnknownPost(String),
	#[error("no tag titled {0:?}")]
	UnknownTag(String),
	#[error("no such page")]
	PageNotFound,
	#[error("serialize error: {0}")]
	Serialize(#[from] serialize::Error),
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
	#[error("template error: {0}")]
	Template(#[from] askama::Error),
	#[error("rate limit error: {0}")]
	RateLimit(#[from] GovernorError),
}

impl Error {
	pub fn status(&self) -> StatusCode {
		match self {
			Error::UnknownPost(..) | Error::UnknownTag(..) | Error::PageNotFound => {
				StatusCode::NOT_FOUND
			}
			Error::RateLimit(GovernorError::TooManyRequests { .. }) => {
				StatusCode::TOO_MANY_REQUESTS
			}
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response<Body> {
		let status = self.status();

		if status.is_server_error() {
			tracing::error!(error = %self, "request failed");
		}

		let page = ErrorTemplate {
			status: status.as_u16(),
			reason: status.canonical_reason().unwrap_or("Error"),
		};

		let mut response = match page.render() {
			Ok(html) => (status, Html(html)).into_response(),
			Err(_) => (status, status.to_string()).into_response(),
		};

		if let Error::RateLimit(GovernorError::TooManyRequests {
			headers: Some(headers),
			..
		}) = self
		{
			response.headers_mut().extend(headers);
		}

		response
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn lookup_misses_map_to_not_found() {
		assert_eq!(
			Error::UnknownPost("oak".into()).status(),
			StatusCode::NOT_FOUND
		);
		assert_eq!(
			Error::UnknownTag("oak".into()).status(),
			StatusCode::NOT_FOUND
		);
		assert_eq!(Error::PageNotFound.status(), StatusCode::NOT_FOUND);
	}

	#[test]
	fn throttled_requests_map_to_too_many_requests() {
		let error = Error::RateLimit(GovernorError::TooManyRequests {
			wait_time: 1,
			headers: None,
		});

		assert_eq!(error.status(), StatusCode::TOO_MANY_REQUESTS);
	}

	#[test]
	fn faults_map_to_internal_server_error() {
		let error = Error::Database(sqlx::Error::RowNotFound);

		assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn rate_limit_headers_survive_into_response() {
		let mut headers = axum::http::HeaderMap::new();
		headers.insert("x-ratelimit-after", 3.into());

		let response = Error::RateLimit(GovernorError::TooManyRequests {
			wait_time: 3,
			headers: Some(headers),
		})
		.into_response();

		assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
		assert_eq!(response.headers()["x-ratelimit-after"], "3");
	}
}
