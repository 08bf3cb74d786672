use askama::Template;
use axum::response::{Html, IntoResponse};

use crate::{template::ContactsTemplate, Error};

/// Returns the static contacts page.
#[allow(clippy::unused_async)]
pub async fn page() -> Result<impl IntoResponse, Error> {
	Ok(Html(ContactsTemplate.render()?))
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[tokio::test]
	async fn contacts_needs_no_database() {
		let server = server();

		let response = server.get("/contacts").await;

		assert_eq!(response.status_code(), 200);
		assert!(response.text().contains("Letters to the editor"));
	}
}
