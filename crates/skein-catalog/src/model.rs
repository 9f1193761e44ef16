//! Catalog records and their creation payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use skein_types::InvalidInput;

/// Largest page a list query may return.
pub const MAX_PAGE_LIMIT: usize = 100;

/// Pattern difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Suitable for first projects.
    Beginner,
    /// Requires familiarity with shaping and colorwork.
    Intermediate,
    /// Complex construction.
    Advanced,
}

impl Difficulty {
    /// Returns the difficulty as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Returns the display label shown in the community UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "초급",
            Self::Intermediate => "중급",
            Self::Advanced => "고급",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(InvalidInput::Choice {
                field: "difficulty",
                value: s.to_string(),
                expected: "beginner, intermediate, advanced",
            }),
        }
    }
}

/// What kind of item a pattern makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternCategory {
    /// Hats.
    Hat,
    /// Scarves.
    Scarf,
    /// Sweaters.
    Sweater,
    /// Blankets.
    Blanket,
    /// Bags, mittens and other small items.
    Accessories,
}

impl PatternCategory {
    /// Returns the category as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hat => "hat",
            Self::Scarf => "scarf",
            Self::Sweater => "sweater",
            Self::Blanket => "blanket",
            Self::Accessories => "accessories",
        }
    }

    /// Returns the display label shown in the community UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hat => "모자",
            Self::Scarf => "목도리",
            Self::Sweater => "스웨터",
            Self::Blanket => "담요",
            Self::Accessories => "액세서리",
        }
    }
}

impl std::fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PatternCategory {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hat" => Ok(Self::Hat),
            "scarf" => Ok(Self::Scarf),
            "sweater" => Ok(Self::Sweater),
            "blanket" => Ok(Self::Blanket),
            "accessories" => Ok(Self::Accessories),
            _ => Err(InvalidInput::Choice {
                field: "category",
                value: s.to_string(),
                expected: "hat, scarf, sweater, blanket, accessories",
            }),
        }
    }
}

/// Community board a post belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    /// How-to articles.
    Tutorial,
    /// Finished object photos and stories.
    Showcase,
    /// Help requests.
    Question,
    /// Free discussion.
    Discussion,
}

impl PostCategory {
    /// Returns the category as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tutorial => "tutorial",
            Self::Showcase => "showcase",
            Self::Question => "question",
            Self::Discussion => "discussion",
        }
    }

    /// Returns the display label shown in the community UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Tutorial => "튜토리얼",
            Self::Showcase => "작품 자랑",
            Self::Question => "질문",
            Self::Discussion => "자유 토론",
        }
    }
}

impl std::fmt::Display for PostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PostCategory {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tutorial" => Ok(Self::Tutorial),
            "showcase" => Ok(Self::Showcase),
            "question" => Ok(Self::Question),
            "discussion" => Ok(Self::Discussion),
            _ => Err(InvalidInput::Choice {
                field: "category",
                value: s.to_string(),
                expected: "tutorial, showcase, question, discussion",
            }),
        }
    }
}

/// A registered community member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: u64,
    /// Unique handle.
    pub username: String,
    /// Unique contact address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

/// Payload for registering a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Unique handle.
    pub username: String,
    /// Unique contact address.
    pub email: String,
    /// Display name.
    pub full_name: String,
}

/// A shared knitting pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Unique identifier.
    pub id: u64,
    /// Pattern title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Kind of item.
    pub category: PatternCategory,
    /// Recommended yarn, as written by the author (e.g., "DK").
    pub yarn_weight: Option<String>,
    /// Recommended needles (e.g., "4.5mm").
    pub needle_size: Option<String>,
    /// Expected time to finish (e.g., "2-3 hours").
    pub estimated_time: Option<String>,
    /// Id of the uploading user.
    pub author_id: u64,
    /// Upload time.
    pub created_at: DateTime<Utc>,
    /// Whether the pattern appears in listings.
    pub is_public: bool,
    /// The uploading user.
    pub author: User,
}

/// Payload for uploading a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPattern {
    /// Pattern title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Kind of item.
    pub category: PatternCategory,
    /// Recommended yarn.
    #[serde(default)]
    pub yarn_weight: Option<String>,
    /// Recommended needles.
    #[serde(default)]
    pub needle_size: Option<String>,
    /// Expected time to finish.
    #[serde(default)]
    pub estimated_time: Option<String>,
    /// Id of the uploading user.
    pub author_id: u64,
    /// Whether the pattern appears in listings.
    #[serde(default = "default_public")]
    pub is_public: bool,
}

const fn default_public() -> bool {
    true
}

/// A community board post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier.
    pub id: u64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Board the post belongs to.
    pub category: PostCategory,
    /// Id of the writing user.
    pub author_id: u64,
    /// Publication time.
    pub created_at: DateTime<Utc>,
    /// The writing user.
    pub author: User,
}

/// Payload for writing a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Board the post belongs to.
    pub category: PostCategory,
}

/// Offset pagination for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Number of records to skip.
    #[serde(default)]
    pub skip: usize,
    /// Maximum number of records to return, capped at [`MAX_PAGE_LIMIT`].
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Page {
    /// Creates a page.
    #[must_use]
    pub const fn new(skip: usize, limit: usize) -> Self {
        Self { skip, limit }
    }

    /// Returns the effective limit after capping.
    #[must_use]
    pub fn effective_limit(&self) -> usize {
        self.limit.min(MAX_PAGE_LIMIT)
    }

    /// Applies the page to an iterator.
    pub fn apply<I: Iterator>(&self, iter: I) -> impl Iterator<Item = I::Item> {
        iter.skip(self.skip).take(self.effective_limit())
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: MAX_PAGE_LIMIT,
        }
    }
}

const fn default_limit() -> usize {
    MAX_PAGE_LIMIT
}

/// Optional filters for pattern listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternFilter {
    /// Only patterns of this difficulty.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Only patterns in this category.
    #[serde(default)]
    pub category: Option<PatternCategory>,
}

impl PatternFilter {
    /// Returns true if the pattern passes the filter.
    #[must_use]
    pub fn matches(&self, pattern: &Pattern) -> bool {
        self.difficulty.is_none_or(|d| d == pattern.difficulty)
            && self.category.is_none_or(|c| c == pattern.category)
    }
}

/// Trims a required text field, rejecting blank values.
pub(crate) fn required(field: &'static str, value: &str) -> Result<String, InvalidInput> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InvalidInput::Blank(field));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional text field, mapping blank values to `None`.
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
