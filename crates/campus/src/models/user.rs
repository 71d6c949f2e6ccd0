use iso8601_timestamp::Timestamp;

/// Email verification status
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "status")]
pub enum EmailVerification {
    /// Account is verified
    Verified,
    /// Pending email verification
    Pending { token: String, expiry: Timestamp },
}

/// Password reset information
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PasswordReset {
    /// Token required to change password
    pub token: String,
    /// Time at which this token expires
    pub expiry: Timestamp,
}

/// A course the user is enrolled in, with watch progress
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Subscription {
    pub course_id: String,
    /// Ids of the lessons the user has finished watching
    pub watched: Vec<String>,
}

/// User model
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    /// Unique Id
    #[serde(rename = "_id")]
    pub id: String,

    /// Unique username
    pub username: String,

    /// User's email
    pub email: String,

    /// Normalised email
    pub email_normalised: String,

    pub first_name: String,
    pub last_name: String,

    /// Mobile number, digits only
    pub mobile: String,

    /// Argon2 hashed password
    pub password: String,

    /// Profile image URL
    pub image: Option<String>,

    /// Whether the user may perform admin operations
    #[serde(default)]
    pub is_admin: bool,

    /// Email verification status
    pub verification: EmailVerification,

    /// Password reset information
    pub password_reset: Option<PasswordReset>,

    /// Courses this user is enrolled in
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,

    /// Bookmarked course ids
    #[serde(default)]
    pub bookmarks: Vec<String>,
}

impl User {
    pub fn is_verified(&self) -> bool {
        matches!(self.verification, EmailVerification::Verified)
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// User data safe to return to clients (no credentials)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub image: Option<String>,
    pub is_admin: bool,
    pub is_verified: bool,
    pub subscriptions: Vec<Subscription>,
    pub bookmarks: Vec<String>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> UserProfile {
        let is_verified = user.is_verified();

        UserProfile {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            mobile: user.mobile,
            image: user.image,
            is_admin: user.is_admin,
            is_verified,
            subscriptions: user.subscriptions,
            bookmarks: user.bookmarks,
        }
    }
}
