use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::model::{Comment, DetailedPost, Post, TagCount};

/// List views show this many characters of a post's body.
pub const TEASER_LEN: usize = 200;

/// A fault while shaping rows into render contexts.
///
/// Both variants mean the database handed us an inconsistent picture;
/// they fail the whole request rather than render a partial page.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("no comment count for post {0}")]
	MissingCommentCount(Uuid),
	#[error("post {0} has no tags")]
	Untagged(String),
}

/// A post as the list pages show it.
#[derive(Debug, Clone, Serialize)]
pub struct PostCard {
	pub title: String,
	pub teaser_text: String,
	pub author: String,
	pub comments_amount: i64,
	pub image_url: Option<String>,
	pub published_at: DateTime<Utc>,
	pub slug: String,
	pub tags: Vec<TagBadge>,
	pub first_tag_title: String,
}

impl PostCard {
	/// Shapes one post row into a card. The comment count comes from the
	/// aggregation side-table, never from the row itself.
	///
	/// A card needs at least one tag; `first_tag_title` has no fallback.
	pub fn new(
		post: Post,
		comments_amount: i64,
		tags: Vec<TagCount>,
		media_url: &str,
	) -> Result<PostCard, Error> {
		let tags: Vec<TagBadge> = tags.into_iter().map(TagBadge::from).collect();
		let first_tag_title = match tags.first() {
			Some(tag) => tag.title.clone(),
			None => return Err(Error::Untagged(post.slug)),
		};

		Ok(PostCard {
			title: post.title,
			teaser_text: teaser(&post.text).to_owned(),
			author: post.author,
			comments_amount,
			image_url: image_url(post.image.as_deref(), media_url),
			published_at: post.published_at,
			slug: post.slug,
			tags,
			first_tag_title,
		})
	}
}

/// Shapes an ordered post list into cards, attaching each post's comment
/// count and tags from the batch-query side-tables. Output order and
/// length match the input.
///
/// A post id the count query did not cover can only mean the post list
/// and the count query disagree about what exists; that fails the whole
/// batch instead of defaulting the count to zero.
pub fn post_cards(
	posts: Vec<Post>,
	counts: &HashMap<Uuid, i64>,
	tags: &mut HashMap<Uuid, Vec<TagCount>>,
	media_url: &str,
) -> Result<Vec<PostCard>, Error> {
	posts
		.into_iter()
		.map(|post| {
			let comments_amount = counts
				.get(&post.id)
				.copied()
				.ok_or(Error::MissingCommentCount(post.id))?;
			let badges = tags.remove(&post.id).unwrap_or_default();

			PostCard::new(post, comments_amount, badges, media_url)
		})
		.collect()
}

/// A post as the detail page shows it: full text, comments, likes.
#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
	pub title: String,
	pub text: String,
	pub author: String,
	pub comments: Vec<CommentView>,
	pub likes_amount: i64,
	pub image_url: Option<String>,
	pub published_at: DateTime<Utc>,
	pub slug: String,
	pub tags: Vec<TagBadge>,
}

/// Shapes the detail row and its relations into the detail context.
pub fn post_page(
	post: DetailedPost,
	comments: Vec<Comment>,
	tags: Vec<TagCount>,
	media_url: &str,
) -> PostPage {
	PostPage {
		title: post.title,
		text: post.text,
		author: post.author,
		comments: comments.into_iter().map(CommentView::from).collect(),
		likes_amount: post.likes,
		image_url: image_url(post.image.as_deref(), media_url),
		published_at: post.published_at,
		slug: post.slug,
		tags: tags.into_iter().map(TagBadge::from).collect(),
	}
}

/// A tag chip: the title plus how many posts carry the tag.
#[derive(Debug, Clone, Serialize)]
pub struct TagBadge {
	pub title: String,
	pub posts_with_tag: i64,
}

impl From<TagCount> for TagBadge {
	fn from(tag: TagCount) -> TagBadge {
		TagBadge {
			title: tag.title,
			posts_with_tag: tag.posts_with_tag,
		}
	}
}

/// A comment as the detail page shows it.
#[derive(Debug, Clone, Serialize)]
pub struct CommentView {
	pub text: String,
	pub published_at: DateTime<Utc>,
	pub author: String,
}

impl From<Comment> for CommentView {
	fn from(comment: Comment) -> CommentView {
		CommentView {
			text: comment.text,
			published_at: comment.published_at,
			author: comment.author,
		}
	}
}

/// The first [`TEASER_LEN`] characters of `text`, cut on a character
/// boundary. Mid-word cuts are accepted; the list views add an ellipsis.
pub fn teaser(text: &str) -> &str {
	match text.char_indices().nth(TEASER_LEN) {
		Some((boundary, _)) => &text[..boundary],
		None => text,
	}
}

/// Resolves a stored image file name against the media base URL.
pub fn image_url(image: Option<&str>, media_url: &str) -> Option<String> {
	image.map(|file| format!("{}/{}", media_url.trim_end_matches('/'), file))
}
