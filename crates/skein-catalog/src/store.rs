//! In-memory catalog storage.

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use skein_types::{Result, SkeinError};

use crate::model::{
    NewPattern, NewPost, NewUser, Page, Pattern, PatternFilter, Post, PostCategory, User, optional,
    required,
};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    patterns: Vec<Pattern>,
    posts: Vec<Post>,
}

impl Tables {
    /// Record ids are 1-based positions; nothing is ever removed.
    fn user(&self, id: u64) -> Result<&User> {
        lookup(&self.users, id).ok_or(SkeinError::not_found("user", id))
    }
}

fn lookup<T>(records: &[T], id: u64) -> Option<&T> {
    let index = usize::try_from(id).ok()?.checked_sub(1)?;
    records.get(index)
}

const fn next_id(len: usize) -> u64 {
    len as u64 + 1
}

/// Users, patterns and posts held in memory.
///
/// Nothing is persisted; the catalog starts empty and is dropped with the
/// process. All methods take `&self` and can be called from concurrent
/// request handlers.
#[derive(Debug, Default)]
pub struct Catalog {
    tables: RwLock<Tables>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user.
    ///
    /// # Errors
    ///
    /// Returns [`SkeinError::InvalidInput`] for blank fields and
    /// [`SkeinError::Conflict`] if the username or email is taken.
    pub async fn create_user(&self, new: NewUser) -> Result<User> {
        let username = required("username", &new.username)?;
        let email = required("email", &new.email)?;
        let full_name = required("full_name", &new.full_name)?;

        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.username == username) {
            return Err(SkeinError::Conflict(format!(
                "username '{username}' is already registered"
            )));
        }
        if tables.users.iter().any(|u| u.email.eq_ignore_ascii_case(&email)) {
            return Err(SkeinError::Conflict(format!(
                "email '{email}' is already registered"
            )));
        }

        let user = User {
            id: next_id(tables.users.len()),
            username,
            email,
            full_name,
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        info!(user_id = user.id, username = %user.username, "registered user");
        Ok(user)
    }

    /// Lists users in registration order.
    pub async fn list_users(&self, page: Page) -> Vec<User> {
        let tables = self.tables.read().await;
        page.apply(tables.users.iter()).cloned().collect()
    }

    /// Looks up a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`SkeinError::NotFound`] if no such user exists.
    pub async fn get_user(&self, id: u64) -> Result<User> {
        self.tables.read().await.user(id).cloned()
    }

    /// Stores a pattern uploaded by an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`SkeinError::InvalidInput`] for a blank title or description
    /// and [`SkeinError::NotFound`] if the author does not exist.
    pub async fn create_pattern(&self, new: NewPattern) -> Result<Pattern> {
        let title = required("title", &new.title)?;
        let description = required("description", &new.description)?;

        let mut tables = self.tables.write().await;
        let author = tables.user(new.author_id)?.clone();
        let pattern = Pattern {
            id: next_id(tables.patterns.len()),
            title,
            description,
            difficulty: new.difficulty,
            category: new.category,
            yarn_weight: optional(new.yarn_weight),
            needle_size: optional(new.needle_size),
            estimated_time: optional(new.estimated_time),
            author_id: author.id,
            created_at: Utc::now(),
            is_public: new.is_public,
            author,
        };
        tables.patterns.push(pattern.clone());
        info!(
            pattern_id = pattern.id,
            author_id = pattern.author_id,
            category = %pattern.category,
            "stored pattern"
        );
        Ok(pattern)
    }

    /// Lists public patterns matching the filter, in upload order.
    pub async fn list_patterns(&self, filter: PatternFilter, page: Page) -> Vec<Pattern> {
        let tables = self.tables.read().await;
        let matching = tables
            .patterns
            .iter()
            .filter(|p| p.is_public && filter.matches(p));
        let patterns: Vec<Pattern> = page.apply(matching).cloned().collect();
        debug!(?filter, count = patterns.len(), "listed patterns");
        patterns
    }

    /// Looks up a pattern by id, including private ones.
    ///
    /// # Errors
    ///
    /// Returns [`SkeinError::NotFound`] if no such pattern exists.
    pub async fn get_pattern(&self, id: u64) -> Result<Pattern> {
        let tables = self.tables.read().await;
        lookup(&tables.patterns, id)
            .cloned()
            .ok_or(SkeinError::not_found("pattern", id))
    }

    /// Publishes a post written by an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`SkeinError::InvalidInput`] for a blank title or content and
    /// [`SkeinError::NotFound`] if the author does not exist.
    pub async fn create_post(&self, new: NewPost, author_id: u64) -> Result<Post> {
        let title = required("title", &new.title)?;
        let content = required("content", &new.content)?;

        let mut tables = self.tables.write().await;
        let author = tables.user(author_id)?.clone();
        let post = Post {
            id: next_id(tables.posts.len()),
            title,
            content,
            category: new.category,
            author_id,
            created_at: Utc::now(),
            author,
        };
        tables.posts.push(post.clone());
        info!(post_id = post.id, author_id, category = %post.category, "published post");
        Ok(post)
    }

    /// Lists posts newest first, optionally restricted to one board.
    pub async fn list_posts(&self, category: Option<PostCategory>, page: Page) -> Vec<Post> {
        let tables = self.tables.read().await;
        let matching = tables
            .posts
            .iter()
            .rev()
            .filter(|p| category.is_none_or(|c| c == p.category));
        page.apply(matching).cloned().collect()
    }

    /// Looks up a post by id.
    ///
    /// # Errors
    ///
    /// Returns [`SkeinError::NotFound`] if no such post exists.
    pub async fn get_post(&self, id: u64) -> Result<Post> {
        let tables = self.tables.read().await;
        lookup(&tables.posts, id)
            .cloned()
            .ok_or(SkeinError::not_found("post", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, PatternCategory};
    use skein_types::InvalidInput;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            username: name.to_string(),
            email: format!("{name}@example.com"),
            full_name: format!("{name} Knitter"),
        }
    }

    fn new_pattern(
        title: &str,
        difficulty: Difficulty,
        category: PatternCategory,
        author_id: u64,
    ) -> NewPattern {
        NewPattern {
            title: title.to_string(),
            description: "A lovely pattern".to_string(),
            difficulty,
            category,
            yarn_weight: Some("DK".to_string()),
            needle_size: Some(" 4mm ".to_string()),
            estimated_time: Some(String::new()),
            author_id,
            is_public: true,
        }
    }

    fn new_post(title: &str, category: PostCategory) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: "Hello fellow knitters".to_string(),
            category,
        }
    }

    #[tokio::test]
    async fn test_users_get_sequential_ids() {
        let catalog = Catalog::new();
        let alice = catalog.create_user(new_user("alice")).await.unwrap();
        let bob = catalog.create_user(new_user("bob")).await.unwrap();

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(catalog.get_user(2).await.unwrap().username, "bob");
        assert_eq!(catalog.list_users(Page::default()).await.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_user_conflicts() {
        let catalog = Catalog::new();
        catalog.create_user(new_user("alice")).await.unwrap();

        let err = catalog.create_user(new_user("alice")).await.unwrap_err();
        assert!(matches!(err, SkeinError::Conflict(_)));

        let mut other = new_user("alicia");
        other.email = "ALICE@example.com".to_string();
        let err = catalog.create_user(other).await.unwrap_err();
        assert!(matches!(err, SkeinError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_blank_fields_rejected() {
        let catalog = Catalog::new();
        let mut user = new_user("carol");
        user.full_name = "  ".to_string();
        let err = catalog.create_user(user).await.unwrap_err();
        assert!(matches!(
            err,
            SkeinError::InvalidInput(InvalidInput::Blank("full_name"))
        ));
    }

    #[tokio::test]
    async fn test_missing_records() {
        let catalog = Catalog::new();
        assert!(matches!(
            catalog.get_user(0).await,
            Err(SkeinError::NotFound { resource: "user", id: 0 })
        ));
        assert!(matches!(
            catalog.get_pattern(3).await,
            Err(SkeinError::NotFound { resource: "pattern", id: 3 })
        ));
        assert!(matches!(
            catalog.get_post(u64::MAX).await,
            Err(SkeinError::NotFound { resource: "post", .. })
        ));
    }

    #[tokio::test]
    async fn test_pattern_requires_author() {
        let catalog = Catalog::new();
        let err = catalog
            .create_pattern(new_pattern(
                "Mitts",
                Difficulty::Beginner,
                PatternCategory::Accessories,
                9,
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, SkeinError::NotFound { resource: "user", id: 9 }));
    }

    #[tokio::test]
    async fn test_pattern_embeds_author_and_trims_optionals() {
        let catalog = Catalog::new();
        let author = catalog.create_user(new_user("dana")).await.unwrap();
        let pattern = catalog
            .create_pattern(new_pattern(
                "Beanie",
                Difficulty::Beginner,
                PatternCategory::Hat,
                author.id,
            ))
            .await
            .unwrap();

        assert_eq!(pattern.author, author);
        assert_eq!(pattern.needle_size.as_deref(), Some("4mm"));
        assert_eq!(pattern.estimated_time, None);
        assert_eq!(catalog.get_pattern(pattern.id).await.unwrap(), pattern);
    }

    #[tokio::test]
    async fn test_pattern_filters_and_privacy() {
        let catalog = Catalog::new();
        let author = catalog.create_user(new_user("erin")).await.unwrap().id;
        catalog
            .create_pattern(new_pattern(
                "Beanie",
                Difficulty::Beginner,
                PatternCategory::Hat,
                author,
            ))
            .await
            .unwrap();
        catalog
            .create_pattern(new_pattern(
                "Fair Isle Hat",
                Difficulty::Advanced,
                PatternCategory::Hat,
                author,
            ))
            .await
            .unwrap();
        catalog
            .create_pattern(new_pattern(
                "Garter Scarf",
                Difficulty::Beginner,
                PatternCategory::Scarf,
                author,
            ))
            .await
            .unwrap();
        let mut hidden = new_pattern("Draft", Difficulty::Beginner, PatternCategory::Hat, author);
        hidden.is_public = false;
        let hidden = catalog.create_pattern(hidden).await.unwrap();

        let all = catalog.list_patterns(PatternFilter::default(), Page::default()).await;
        assert_eq!(all.len(), 3);

        let hats = catalog
            .list_patterns(
                PatternFilter {
                    difficulty: None,
                    category: Some(PatternCategory::Hat),
                },
                Page::default(),
            )
            .await;
        let titles: Vec<_> = hats.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Beanie", "Fair Isle Hat"]);

        let easy_hats = catalog
            .list_patterns(
                PatternFilter {
                    difficulty: Some(Difficulty::Beginner),
                    category: Some(PatternCategory::Hat),
                },
                Page::default(),
            )
            .await;
        assert_eq!(easy_hats.len(), 1);

        let second = catalog
            .list_patterns(PatternFilter::default(), Page::new(1, 1))
            .await;
        assert_eq!(second[0].title, "Fair Isle Hat");

        // Private patterns stay reachable by id.
        assert_eq!(catalog.get_pattern(hidden.id).await.unwrap().title, "Draft");
    }

    #[tokio::test]
    async fn test_posts_newest_first_with_category_filter() {
        let catalog = Catalog::new();
        let author = catalog.create_user(new_user("finn")).await.unwrap().id;
        for (title, category) in [
            ("First", PostCategory::Question),
            ("Second", PostCategory::Showcase),
            ("Third", PostCategory::Question),
        ] {
            catalog.create_post(new_post(title, category), author).await.unwrap();
        }

        let posts = catalog.list_posts(None, Page::default()).await;
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);

        let questions = catalog
            .list_posts(Some(PostCategory::Question), Page::default())
            .await;
        let titles: Vec<_> = questions.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Third", "First"]);

        let post = catalog.get_post(2).await.unwrap();
        assert_eq!(post.author.username, "finn");
    }

    #[tokio::test]
    async fn test_post_requires_author() {
        let catalog = Catalog::new();
        let err = catalog
            .create_post(new_post("Hi", PostCategory::Discussion), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, SkeinError::NotFound { resource: "user", id: 1 }));
    }
}
