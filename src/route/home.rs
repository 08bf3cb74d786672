use askama::Template;
use axum::{
	extract::State,
	response::{Html, IntoResponse},
};

use super::{load_cards, FRESH_POSTS, POPULAR_POSTS, POPULAR_TAGS};
use crate::{db, template::IndexTemplate, AppState, Error};

/// Returns the front page: the freshest posts in the main column, the
/// most commented posts and most used tags alongside.
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
	let fresh = db::most_fresh(&state.database, FRESH_POSTS).await?;
	let popular = db::popular_posts(&state.database, POPULAR_POSTS).await?;
	let tags = db::popular_tags(&state.database, POPULAR_TAGS).await?;

	let page = IndexTemplate {
		page_posts: load_cards(&state, fresh).await?,
		most_popular_posts: load_cards(&state, popular).await?,
		popular_tags: tags.into_iter().map(Into::into).collect(),
	};

	Ok(Html(page.render()?))
}
