use askama::Template;

use crate::serialize::{PostCard, PostPage, TagBadge};

/// Front page: fresh posts in the main column, popular posts and tags
/// in the sidebar.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
	pub most_popular_posts: Vec<PostCard>,
	pub page_posts: Vec<PostCard>,
	pub popular_tags: Vec<TagBadge>,
}

#[derive(Template)]
#[template(path = "post-details.html")]
pub struct PostDetailTemplate {
	pub post: PostPage,
	pub popular_tags: Vec<TagBadge>,
	pub most_popular_posts: Vec<PostCard>,
}

#[derive(Template)]
#[template(path = "posts-list.html")]
pub struct PostsListTemplate {
	pub tag: String,
	pub popular_tags: Vec<TagBadge>,
	pub posts: Vec<PostCard>,
	pub most_popular_posts: Vec<PostCard>,
}

#[derive(Template)]
#[template(path = "contacts.html")]
pub struct ContactsTemplate;

/// The page every failed request renders; it carries the status line
/// and nothing about the underlying fault.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
	pub status: u16,
	pub reason: &'static str,
}

#[cfg(test)]
mod test {
	use chrono::Utc;

	use super::*;
	use crate::serialize::CommentView;

	fn badge(title: &str) -> TagBadge {
		TagBadge {
			title: title.into(),
			posts_with_tag: 4,
		}
	}

	fn card(slug: &str) -> PostCard {
		PostCard {
			title: "Northern lights".into(),
			teaser_text: "Twelve hours of night".into(),
			author: "ann".into(),
			comments_amount: 3,
			image_url: None,
			published_at: Utc::now(),
			slug: slug.into(),
			tags: vec![badge("travel")],
			first_tag_title: "travel".into(),
		}
	}

	#[test]
	fn index_renders_cards_and_sidebar() {
		let html = IndexTemplate {
			most_popular_posts: vec![card("northern-lights")],
			page_posts: vec![card("fresh-post")],
			popular_tags: vec![badge("travel")],
		}
		.render()
		.unwrap();

		assert!(html.contains("/posts/fresh-post"));
		assert!(html.contains("Twelve hours of night"));
		assert!(html.contains("/tags/travel"));
		assert!(html.contains("3 comments"));
	}

	#[test]
	fn detail_renders_comments_and_likes() {
		let html = PostDetailTemplate {
			post: PostPage {
				title: "Northern lights".into(),
				text: "The whole story".into(),
				author: "ann".into(),
				comments: vec![CommentView {
					text: "Lovely".into(),
					published_at: Utc::now(),
					author: "bob".into(),
				}],
				likes_amount: 7,
				image_url: Some("/media/aurora.jpg".into()),
				published_at: Utc::now(),
				slug: "northern-lights".into(),
				tags: vec![badge("travel")],
			},
			popular_tags: vec![badge("travel")],
			most_popular_posts: vec![card("northern-lights")],
		}
		.render()
		.unwrap();

		assert!(html.contains("The whole story"));
		assert!(html.contains("7 likes"));
		assert!(html.contains("Lovely"));
		assert!(html.contains("/media/aurora.jpg"));
	}

	#[test]
	fn empty_tag_page_says_so() {
		let html = PostsListTemplate {
			tag: "winter".into(),
			popular_tags: vec![badge("travel")],
			posts: Vec::new(),
			most_popular_posts: vec![card("northern-lights")],
		}
		.render()
		.unwrap();

		assert!(html.contains("#winter"));
		assert!(html.contains("Nothing has been filed"));
	}

	#[test]
	fn contacts_is_static() {
		let html = ContactsTemplate.render().unwrap();

		assert!(html.contains("Letters to the editor"));
	}

	#[test]
	fn error_page_shows_status() {
		let html = ErrorTemplate {
			status: 404,
			reason: "Not Found",
		}
		.render()
		.unwrap();

		assert!(html.contains("404"));
		assert!(html.contains("Not Found"));
	}
}
