use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A post row as the list pages read it.
///
/// The author's username is joined in so the pages never walk a
/// relation; `image` holds the stored file name, not a URL.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
	pub id: Uuid,
	pub title: String,
	pub text: String,
	pub slug: String,
	pub image: Option<String>,
	pub published_at: DateTime<Utc>,
	pub author: String,
}

/// A post row fetched for the detail page, with its like count
/// computed in the same query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DetailedPost {
	pub id: Uuid,
	pub title: String,
	pub text: String,
	pub slug: String,
	pub image: Option<String>,
	pub published_at: DateTime<Utc>,
	pub author: String,
	pub likes: i64,
}

/// A tag with the number of posts that carry it.
///
/// Both the global popularity query and the per-post tag queries
/// produce this shape; the count always means the same thing.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TagCount {
	pub title: String,
	pub posts_with_tag: i64,
}

/// A comment with its author's username joined in.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comment {
	pub text: String,
	pub published_at: DateTime<Utc>,
	pub author: String,
}
