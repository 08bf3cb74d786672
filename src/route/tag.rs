use askama::Template;
use axum::{
	extract::{Path, State},
	response::{Html, IntoResponse},
};

use super::{load_cards, POPULAR_POSTS, POPULAR_TAGS, RELATED_POSTS};
use crate::{db, template::PostsListTemplate, AppState, Error};

/// Returns every post filed under a tag, newest first.
///
/// The tag is looked up before its posts so that a made-up tag title
/// is a miss rather than an empty listing.
pub async fn filter(
	State(state): State<AppState>,
	Path(tag_title): Path<String>,
) -> Result<impl IntoResponse, Error> {
	let tag = db::tag_by_title(&state.database, &tag_title)
		.await?
		.ok_or(Error::UnknownTag(tag_title))?;

	let related = db::posts_with_tag(&state.database, &tag.title, RELATED_POSTS).await?;
	let popular = db::popular_posts(&state.database, POPULAR_POSTS).await?;
	let popular_tags = db::popular_tags(&state.database, POPULAR_TAGS).await?;

	let posts = load_cards(&state, related).await?;

	let page = PostsListTemplate {
		tag: tag.title,
		posts,
		most_popular_posts: load_cards(&state, popular).await?,
		popular_tags: popular_tags.into_iter().map(Into::into).collect(),
	};

	Ok(Html(page.render()?))
}
