use askama::Template;
use axum::{
	extract::{Path, State},
	response::{Html, IntoResponse},
};

use super::{load_cards, POPULAR_POSTS, POPULAR_TAGS};
use crate::{db, serialize, template::PostDetailTemplate, AppState, Error};

/// Returns a single post by its slug, with the full text, comments
/// and like count.
pub async fn detail(
	State(state): State<AppState>,
	Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
	let post = db::post_by_slug(&state.database, &slug)
		.await?
		.ok_or(Error::UnknownPost(slug))?;

	let comments = db::comments_for_post(&state.database, post.id).await?;
	let tags = db::tags_for_post(&state.database, post.id).await?;

	let popular = db::popular_posts(&state.database, POPULAR_POSTS).await?;
	let popular_tags = db::popular_tags(&state.database, POPULAR_TAGS).await?;

	let page = PostDetailTemplate {
		post: serialize::post_page(post, comments, tags, &state.config.media_url),
		most_popular_posts: load_cards(&state, popular).await?,
		popular_tags: popular_tags.into_iter().map(Into::into).collect(),
	};

	Ok(Html(page.render()?))
}
