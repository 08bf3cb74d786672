use axum::{routing::get, Router};

use crate::{
	db, model,
	serialize::{self, PostCard},
	AppState, Error, State,
};

pub mod contacts;
pub mod health;
pub mod home;
pub mod post;
pub mod tag;

/// How many posts the front page lists.
pub const FRESH_POSTS: i64 = 5;
/// How many posts the sidebar ranks by like count.
pub const POPULAR_POSTS: i64 = 5;
/// How many tags the sidebar lists.
pub const POPULAR_TAGS: i64 = 5;
/// How many posts a tag page lists.
pub const RELATED_POSTS: i64 = 20;

pub fn routes() -> Router<AppState> {
	Router::new()
		.route("/", get(home::index))
		.route("/posts/:slug", get(post::detail))
		.route("/tags/:tag_title", get(tag::filter))
		.route("/contacts", get(contacts::page))
		.route("/health", get(health::health))
}

#[allow(clippy::unused_async)]
pub async fn not_found() -> Error {
	Error::PageNotFound
}

/// Hydrates a page of posts into cards, with one query per side table
/// no matter how many posts are on the page.
pub(crate) async fn load_cards(
	state: &State,
	posts: Vec<model::Post>,
) -> Result<Vec<PostCard>, Error> {
	let ids = posts.iter().map(|post| post.id).collect::<Vec<_>>();

	let counts = db::comment_counts(&state.database, &ids).await?;
	let mut tags = db::tags_for_posts(&state.database, &ids).await?;

	Ok(serialize::post_cards(
		posts,
		&counts,
		&mut tags,
		&state.config.media_url,
	)?)
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[tokio::test]
	async fn unknown_paths_render_not_found() {
		let server = server();

		let response = server.get("/no-such-page").await;

		assert_eq!(response.status_code(), 404);
		assert!(response.text().contains("404"));
	}
}
