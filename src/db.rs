use std::collections::HashMap;

use uuid::Uuid;

use crate::{
	model::{Comment, DetailedPost, Post, TagCount},
	Database,
};

/// Returns the newest posts, most recent first.
pub async fn most_fresh(db: &Database, limit: i64) -> Result<Vec<Post>, sqlx::Error> {
	sqlx::query_as::<_, Post>(
		r#"
		SELECT p.id, p.title, p.text, p.slug, p.image, p.published_at, a.username AS author
		FROM post p
		JOIN author a ON a.id = p.author_id
		ORDER BY p.published_at DESC
		LIMIT $1
		"#,
	)
	.bind(limit)
	.fetch_all(db)
	.await
}

/// Returns the most liked posts, ties broken newest-first.
pub async fn popular_posts(db: &Database, limit: i64) -> Result<Vec<Post>, sqlx::Error> {
	sqlx::query_as::<_, Post>(
		r#"
		SELECT p.id, p.title, p.text, p.slug, p.image, p.published_at, a.username AS author
		FROM post p
		JOIN author a ON a.id = p.author_id
		LEFT JOIN post_like l ON l.post_id = p.id
		GROUP BY p.id, a.username
		ORDER BY COUNT(l.author_id) DESC, p.published_at DESC
		LIMIT $1
		"#,
	)
	.bind(limit)
	.fetch_all(db)
	.await
}

/// Returns a comment count for every existing post in `ids`.
///
/// One statement for the whole id set; posts without comments come
/// back with a zero count. Only an id that is missing from `post`
/// itself is absent from the map.
pub async fn comment_counts(db: &Database, ids: &[Uuid]) -> Result<HashMap<Uuid, i64>, sqlx::Error> {
	let rows = sqlx::query_as::<_, (Uuid, i64)>(
		r#"
		SELECT p.id, COUNT(c.id)
		FROM post p
		LEFT JOIN comment c ON c.post_id = p.id
		WHERE p.id = ANY($1)
		GROUP BY p.id
		"#,
	)
	.bind(ids)
	.fetch_all(db)
	.await?;

	Ok(rows.into_iter().collect())
}

/// Returns the tags of every post in `ids`, keyed by post, each tag
/// carrying its global usage count. One statement for the whole set;
/// tags are ordered by title within a post.
pub async fn tags_for_posts(
	db: &Database,
	ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<TagCount>>, sqlx::Error> {
	let rows = sqlx::query_as::<_, (Uuid, String, i64)>(
		r#"
		SELECT pt.post_id, t.title, COUNT(pt2.post_id)
		FROM post_tag pt
		JOIN tag t ON t.id = pt.tag_id
		JOIN post_tag pt2 ON pt2.tag_id = t.id
		WHERE pt.post_id = ANY($1)
		GROUP BY pt.post_id, t.id, t.title
		ORDER BY pt.post_id, t.title
		"#,
	)
	.bind(ids)
	.fetch_all(db)
	.await?;

	let mut tags: HashMap<Uuid, Vec<TagCount>> = HashMap::new();
	for (post_id, title, posts_with_tag) in rows {
		tags.entry(post_id).or_default().push(TagCount {
			title,
			posts_with_tag,
		});
	}

	Ok(tags)
}

/// Returns the most used tags, descending by usage.
pub async fn popular_tags(db: &Database, limit: i64) -> Result<Vec<TagCount>, sqlx::Error> {
	sqlx::query_as::<_, TagCount>(
		r#"
		SELECT t.title, COUNT(pt.post_id) AS posts_with_tag
		FROM tag t
		LEFT JOIN post_tag pt ON pt.tag_id = t.id
		GROUP BY t.id, t.title
		ORDER BY COUNT(pt.post_id) DESC, t.title
		LIMIT $1
		"#,
	)
	.bind(limit)
	.fetch_all(db)
	.await
}

/// Returns a single tag by its exact title, with its usage count.
pub async fn tag_by_title(db: &Database, title: &str) -> Result<Option<TagCount>, sqlx::Error> {
	sqlx::query_as::<_, TagCount>(
		r#"
		SELECT t.title, COUNT(pt.post_id) AS posts_with_tag
		FROM tag t
		LEFT JOIN post_tag pt ON pt.tag_id = t.id
		WHERE t.title = $1
		GROUP BY t.id, t.title
		"#,
	)
	.bind(title)
	.fetch_optional(db)
	.await
}

/// Returns a single post by its slug, with its like count computed
/// in the same statement.
pub async fn post_by_slug(db: &Database, slug: &str) -> Result<Option<DetailedPost>, sqlx::Error> {
	sqlx::query_as::<_, DetailedPost>(
		r#"
		SELECT p.id, p.title, p.text, p.slug, p.image, p.published_at,
			a.username AS author, COUNT(l.author_id) AS likes
		FROM post p
		JOIN author a ON a.id = p.author_id
		LEFT JOIN post_like l ON l.post_id = p.id
		WHERE p.slug = $1
		GROUP BY p.id, a.username
		"#,
	)
	.bind(slug)
	.fetch_optional(db)
	.await
}

/// Returns a post's comments, oldest first.
pub async fn comments_for_post(db: &Database, post: Uuid) -> Result<Vec<Comment>, sqlx::Error> {
	sqlx::query_as::<_, Comment>(
		r#"
		SELECT c.text, c.published_at, a.username AS author
		FROM comment c
		JOIN author a ON a.id = c.author_id
		WHERE c.post_id = $1
		ORDER BY c.published_at
		"#,
	)
	.bind(post)
	.fetch_all(db)
	.await
}

/// Returns a single post's tags with their global usage counts,
/// ordered by title.
pub async fn tags_for_post(db: &Database, post: Uuid) -> Result<Vec<TagCount>, sqlx::Error> {
	sqlx::query_as::<_, TagCount>(
		r#"
		SELECT t.title, COUNT(pt2.post_id) AS posts_with_tag
		FROM post_tag pt
		JOIN tag t ON t.id = pt.tag_id
		JOIN post_tag pt2 ON pt2.tag_id = t.id
		WHERE pt.post_id = $1
		GROUP BY t.id, t.title
		ORDER BY t.title
		"#,
	)
	.bind(post)
	.fetch_all(db)
	.await
}

/// Returns the posts filed under a tag, newest first. A tag nobody
/// has used yields an empty list, not an error.
pub async fn posts_with_tag(
	db: &Database,
	title: &str,
	limit: i64,
) -> Result<Vec<Post>, sqlx::Error> {
	sqlx::query_as::<_, Post>(
		r#"
		SELECT p.id, p.title, p.text, p.slug, p.image, p.published_at, a.username AS author
		FROM post p
		JOIN author a ON a.id = p.author_id
		JOIN post_tag pt ON pt.post_id = p.id
		JOIN tag t ON t.id = pt.tag_id
		WHERE t.title = $1
		ORDER BY p.published_at DESC
		LIMIT $2
		"#,
	)
	.bind(title)
	.bind(limit)
	.fetch_all(db)
	.await
}
