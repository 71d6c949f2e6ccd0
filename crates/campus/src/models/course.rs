use iso8601_timestamp::Timestamp;

use super::{Author, Category};

/// Enrollment code granting one user access to a paid course
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Token {
    /// Position within the token list, 1 to 25
    pub id: u32,

    /// The 5-character code itself
    pub token: String,

    /// Id of the user who redeemed this code, if any
    pub user: Option<String>,
}

/// A single video unit belonging to a course
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Lesson {
    /// Unique Id within the course
    pub id: String,

    pub title: String,
    pub description: String,

    /// Playback URL
    pub url: String,
}

/// One image inside an addon bundle
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AddonContent {
    pub id: String,
    pub image: String,
}

/// Supplementary content bundle attached to a course
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Addon {
    /// Unique Id within the course
    pub id: String,

    pub title: String,
    pub description: String,

    /// Creation date
    pub date: Timestamp,

    pub contents: Vec<AddonContent>,
}

/// User rating, at most one per user per course
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Review {
    /// Id of the reviewing user
    pub id: String,

    /// Reviewer's display name
    pub name: String,

    /// Rating out of 5; `None` marks an unrated sentinel entry
    pub rating: Option<u8>,

    pub comment: String,

    /// Submission date
    pub time: Timestamp,
}

/// Course model
///
/// The aggregate root: exclusively owns its embedded tokens, lessons,
/// addons and reviews. `author` and `category` are value snapshots taken at
/// creation time; edits to the source records do not propagate here.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Course {
    /// Unique Id
    #[serde(rename = "_id")]
    pub id: String,

    /// Unique course name
    pub name: String,

    pub description: String,

    /// Enrollment fee, 0 to 100 000
    pub fee: u32,

    /// Author snapshot
    pub author: Author,

    /// Category snapshot
    pub category: Category,

    /// Cover image URL
    pub image: String,

    pub language: Option<String>,

    /// Number of enrolled users
    #[serde(default)]
    pub subscriptions: i64,

    /// Fixed set of 25 enrollment codes generated at creation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<Token>,

    #[serde(default)]
    pub lessons: Vec<Lesson>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addons: Vec<Addon>,

    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Course {
    /// Strip the fields only admins may see
    pub fn redacted(mut self) -> Course {
        self.tokens.clear();
        self.addons.clear();
        self
    }
}

/// Aggregated review data for one course
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReviewSummary {
    /// The requesting user's own review, if present
    pub user_review: Option<Review>,

    /// All rated reviews
    pub reviews: Vec<Review>,

    pub reviews_count: usize,

    /// Arithmetic mean of ratings, 0.0 when there are none
    pub avg_rating: f64,
}
