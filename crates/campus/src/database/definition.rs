use crate::{
    models::{Addon, Author, Category, Course, Lesson, Page, Review, Session, User},
    Result, Success,
};

use super::Migration;

#[async_trait]
pub trait AbstractDatabase: std::marker::Sync {
    /// Run a database migration
    async fn run_migration(&self, migration: Migration) -> Success;

    /// Find user by id
    async fn find_user(&self, id: &str) -> Result<User>;

    /// Find user by username
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Find user by normalised email
    async fn find_user_by_normalised_email(&self, normalised_email: &str)
        -> Result<Option<User>>;

    /// Find user with active pending email verification
    async fn find_user_with_email_verification(&self, token: &str) -> Result<User>;

    /// Find user with active password reset
    async fn find_user_with_password_reset(&self, token: &str) -> Result<User>;

    /// List users whose first name matches the filter, case-insensitively
    async fn list_users(&self, name: &str, page: Page) -> Result<Vec<User>>;

    /// Count all users
    async fn count_users(&self) -> Result<u64>;

    /// Save user
    async fn save_user(&self, user: &User) -> Success;

    /// Delete user
    async fn delete_user(&self, id: &str) -> Success;

    /// Enroll a user in a course; false when already enrolled
    async fn add_subscription(&self, user_id: &str, course_id: &str) -> Result<bool>;

    /// Remove a user's enrollment; false when there was none
    async fn remove_subscription(&self, user_id: &str, course_id: &str) -> Result<bool>;

    /// Bookmark a course; false when already bookmarked
    async fn add_bookmark(&self, user_id: &str, course_id: &str) -> Result<bool>;

    /// Remove a bookmark; no-op when absent
    async fn remove_bookmark(&self, user_id: &str, course_id: &str) -> Success;

    /// Record a watched lesson on the matching subscription
    async fn add_watched_lesson(
        &self,
        user_id: &str,
        course_id: &str,
        lesson_id: &str,
    ) -> Result<bool>;

    /// Set or clear a user's profile image
    async fn set_user_image(&self, user_id: &str, image: Option<String>) -> Success;

    /// Find session by token
    async fn find_session_by_token(&self, token: &str) -> Result<Option<Session>>;

    /// Save session
    async fn save_session(&self, session: &Session) -> Success;

    /// Delete session
    async fn delete_session(&self, id: &str) -> Success;

    /// Find author by id
    async fn find_author(&self, id: &str) -> Result<Author>;

    /// List authors by name filter
    async fn list_authors(&self, name: &str, page: Page) -> Result<Vec<Author>>;

    /// Count all authors
    async fn count_authors(&self) -> Result<u64>;

    /// Save author
    async fn save_author(&self, author: &Author) -> Success;

    /// Delete author
    async fn delete_author(&self, id: &str) -> Success;

    /// Find category by id
    async fn find_category(&self, id: &str) -> Result<Category>;

    /// List categories by name filter
    async fn list_categories(&self, name: &str, page: Page) -> Result<Vec<Category>>;

    /// Count all categories
    async fn count_categories(&self) -> Result<u64>;

    /// Save category
    async fn save_category(&self, category: &Category) -> Success;

    /// Delete category
    async fn delete_category(&self, id: &str) -> Success;

    /// Find course by id
    async fn find_course(&self, id: &str) -> Result<Course>;

    /// Find course by exact name
    async fn find_course_by_name(&self, name: &str) -> Result<Option<Course>>;

    /// List courses by name filter
    async fn list_courses(&self, name: &str, page: Page) -> Result<Vec<Course>>;

    /// Count all courses
    async fn count_courses(&self) -> Result<u64>;

    /// Save course
    async fn save_course(&self, course: &Course) -> Success;

    /// Delete course
    async fn delete_course(&self, id: &str) -> Success;

    /// Adjust a course's subscriber counter
    async fn adjust_subscriber_count(&self, course_id: &str, delta: i64) -> Success;

    /// Atomically assign an unredeemed enrollment code to a user
    ///
    /// False when no matching unredeemed code exists on the course.
    async fn redeem_token(&self, course_id: &str, token: &str, user_id: &str) -> Result<bool>;

    /// Append a lesson to a course
    async fn push_lesson(&self, course_id: &str, lesson: &Lesson) -> Success;

    /// Remove a lesson by id; no-op when absent
    async fn pull_lesson(&self, course_id: &str, lesson_id: &str) -> Success;

    /// Append an addon to a course
    async fn push_addon(&self, course_id: &str, addon: &Addon) -> Success;

    /// Remove an addon by id; no-op when absent
    async fn pull_addon(&self, course_id: &str, addon_id: &str) -> Success;

    /// Atomically insert a review unless the user already has one
    ///
    /// False when a review by this user is already present.
    async fn push_review(&self, course_id: &str, review: &Review) -> Result<bool>;

    /// Remove all reviews by the given user
    async fn pull_review(&self, course_id: &str, user_id: &str) -> Success;
}
