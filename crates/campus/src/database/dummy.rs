use futures::lock::Mutex;
use iso8601_timestamp::Timestamp;
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    models::{
        Addon, Author, Category, Course, EmailVerification, Lesson, Page, Review, Session,
        Subscription, User,
    },
    Error, Result, Success,
};

use super::{definition::AbstractDatabase, Migration};

/// In-memory database with the same update semantics as the Mongo adapter
#[derive(Default, Clone)]
pub struct DummyDb {
    pub users: Arc<Mutex<HashMap<String, User>>>,
    pub sessions: Arc<Mutex<HashMap<String, Session>>>,
    pub authors: Arc<Mutex<HashMap<String, Author>>>,
    pub categories: Arc<Mutex<HashMap<String, Category>>>,
    pub courses: Arc<Mutex<HashMap<String, Course>>>,
}

fn matches_name(name: &str, filter: &str) -> bool {
    name.to_lowercase().contains(&filter.to_lowercase())
}

fn paginate<T: Clone>(mut entries: Vec<(String, T)>, page: Page) -> Vec<T> {
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries
        .into_iter()
        .skip(page.skip() as usize)
        .take(page.size as usize)
        .map(|(_, entry)| entry)
        .collect()
}

fn not_expired(expiry: &Timestamp) -> bool {
    expiry.to_unix_timestamp_ms() >= Timestamp::now_utc().to_unix_timestamp_ms()
}

#[async_trait]
impl AbstractDatabase for DummyDb {
    /// Run a database migration
    async fn run_migration(&self, migration: Migration) -> Success {
        info!("Skipping migration {:?} on dummy database", migration);
        Ok(())
    }

    /// Find user by id
    async fn find_user(&self, id: &str) -> Result<User> {
        let users = self.users.lock().await;
        users.get(id).cloned().ok_or(Error::UnknownUser)
    }

    /// Find user by username
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.users.lock().await;
        Ok(users
            .values()
            .find(|user| user.username.eq_ignore_ascii_case(username))
            .cloned())
    }

    /// Find user by normalised email
    async fn find_user_by_normalised_email(
        &self,
        normalised_email: &str,
    ) -> Result<Option<User>> {
        let users = self.users.lock().await;
        Ok(users
            .values()
            .find(|user| user.email_normalised == normalised_email)
            .cloned())
    }

    /// Find user with active pending email verification
    async fn find_user_with_email_verification(&self, token_to_match: &str) -> Result<User> {
        let users = self.users.lock().await;
        users
            .values()
            .find(|user| match &user.verification {
                EmailVerification::Pending { token, expiry } => {
                    token == token_to_match && not_expired(expiry)
                }
                _ => false,
            })
            .cloned()
            .ok_or(Error::InvalidToken)
    }

    /// Find user with active password reset
    async fn find_user_with_password_reset(&self, token: &str) -> Result<User> {
        let users = self.users.lock().await;
        users
            .values()
            .find(|user| {
                if let Some(reset) = &user.password_reset {
                    reset.token == token && not_expired(&reset.expiry)
                } else {
                    false
                }
            })
            .cloned()
            .ok_or(Error::InvalidToken)
    }

    /// List users whose first name matches the filter
    async fn list_users(&self, name: &str, page: Page) -> Result<Vec<User>> {
        let users = self.users.lock().await;
        Ok(paginate(
            users
                .values()
                .filter(|user| matches_name(&user.first_name, name))
                .map(|user| (user.first_name.clone(), user.clone()))
                .collect(),
            page,
        ))
    }

    /// Count all users
    async fn count_users(&self) -> Result<u64> {
        Ok(self.users.lock().await.len() as u64)
    }

    /// Save user
    async fn save_user(&self, user: &User) -> Success {
        let mut users = self.users.lock().await;
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    /// Delete user
    async fn delete_user(&self, id: &str) -> Success {
        let mut users = self.users.lock().await;
        users.remove(id);
        Ok(())
    }

    /// Enroll a user in a course
    async fn add_subscription(&self, user_id: &str, course_id: &str) -> Result<bool> {
        let mut users = self.users.lock().await;
        if let Some(user) = users.get_mut(user_id) {
            if user
                .subscriptions
                .iter()
                .any(|sub| sub.course_id == course_id)
            {
                return Ok(false);
            }

            user.subscriptions.push(Subscription {
                course_id: course_id.to_string(),
                watched: vec![],
            });

            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove a user's enrollment
    async fn remove_subscription(&self, user_id: &str, course_id: &str) -> Result<bool> {
        let mut users = self.users.lock().await;
        if let Some(user) = users.get_mut(user_id) {
            let before = user.subscriptions.len();
            user.subscriptions.retain(|sub| sub.course_id != course_id);
            return Ok(user.subscriptions.len() != before);
        }

        Ok(false)
    }

    /// Bookmark a course
    async fn add_bookmark(&self, user_id: &str, course_id: &str) -> Result<bool> {
        let mut users = self.users.lock().await;
        if let Some(user) = users.get_mut(user_id) {
            if user.bookmarks.iter().any(|id| id == course_id) {
                return Ok(false);
            }

            user.bookmarks.push(course_id.to_string());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove a bookmark
    async fn remove_bookmark(&self, user_id: &str, course_id: &str) -> Success {
        let mut users = self.users.lock().await;
        if let Some(user) = users.get_mut(user_id) {
            user.bookmarks.retain(|id| id != course_id);
        }

        Ok(())
    }

    /// Record a watched lesson on the matching subscription
    async fn add_watched_lesson(
        &self,
        user_id: &str,
        course_id: &str,
        lesson_id: &str,
    ) -> Result<bool> {
        let mut users = self.users.lock().await;
        if let Some(user) = users.get_mut(user_id) {
            if let Some(subscription) = user
                .subscriptions
                .iter_mut()
                .find(|sub| sub.course_id == course_id)
            {
                if !subscription.watched.iter().any(|id| id == lesson_id) {
                    subscription.watched.push(lesson_id.to_string());
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }

    /// Set or clear a user's profile image
    async fn set_user_image(&self, user_id: &str, image: Option<String>) -> Success {
        let mut users = self.users.lock().await;
        if let Some(user) = users.get_mut(user_id) {
            user.image = image;
        }

        Ok(())
    }

    /// Find session by token
    async fn find_session_by_token(&self, token: &str) -> Result<Option<Session>> {
        let sessions = self.sessions.lock().await;
        Ok(sessions
            .values()
            .find(|session| session.token == token)
            .cloned())
    }

    /// Save session
    async fn save_session(&self, session: &Session) -> Success {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    /// Delete session
    async fn delete_session(&self, id: &str) -> Success {
        let mut sessions = self.sessions.lock().await;
        sessions.remove(id);
        Ok(())
    }

    /// Find author by id
    async fn find_author(&self, id: &str) -> Result<Author> {
        let authors = self.authors.lock().await;
        authors.get(id).cloned().ok_or(Error::UnknownAuthor)
    }

    /// List authors by name filter
    async fn list_authors(&self, name: &str, page: Page) -> Result<Vec<Author>> {
        let authors = self.authors.lock().await;
        Ok(paginate(
            authors
                .values()
                .filter(|author| matches_name(&author.name, name))
                .map(|author| (author.name.clone(), author.clone()))
                .collect(),
            page,
        ))
    }

    /// Count all authors
    async fn count_authors(&self) -> Result<u64> {
        Ok(self.authors.lock().await.len() as u64)
    }

    /// Save author
    async fn save_author(&self, author: &Author) -> Success {
        let mut authors = self.authors.lock().await;
        authors.insert(author.id.clone(), author.clone());
        Ok(())
    }

    /// Delete author
    async fn delete_author(&self, id: &str) -> Success {
        let mut authors = self.authors.lock().await;
        authors.remove(id);
        Ok(())
    }

    /// Find category by id
    async fn find_category(&self, id: &str) -> Result<Category> {
        let categories = self.categories.lock().await;
        categories.get(id).cloned().ok_or(Error::UnknownCategory)
    }

    /// List categories by name filter
    async fn list_categories(&self, name: &str, page: Page) -> Result<Vec<Category>> {
        let categories = self.categories.lock().await;
        Ok(paginate(
            categories
                .values()
                .filter(|category| matches_name(&category.name, name))
                .map(|category| (category.name.clone(), category.clone()))
                .collect(),
            page,
        ))
    }

    /// Count all categories
    async fn count_categories(&self) -> Result<u64> {
        Ok(self.categories.lock().await.len() as u64)
    }

    /// Save category
    async fn save_category(&self, category: &Category) -> Success {
        let mut categories = self.categories.lock().await;
        categories.insert(category.id.clone(), category.clone());
        Ok(())
    }

    /// Delete category
    async fn delete_category(&self, id: &str) -> Success {
        let mut categories = self.categories.lock().await;
        categories.remove(id);
        Ok(())
    }

    /// Find course by id
    async fn find_course(&self, id: &str) -> Result<Course> {
        let courses = self.courses.lock().await;
        courses.get(id).cloned().ok_or(Error::UnknownCourse)
    }

    /// Find course by exact name
    async fn find_course_by_name(&self, name: &str) -> Result<Option<Course>> {
        let courses = self.courses.lock().await;
        Ok(courses
            .values()
            .find(|course| course.name == name)
            .cloned())
    }

    /// List courses by name filter
    async fn list_courses(&self, name: &str, page: Page) -> Result<Vec<Course>> {
        let courses = self.courses.lock().await;
        Ok(paginate(
            courses
                .values()
                .filter(|course| matches_name(&course.name, name))
                .map(|course| (course.name.clone(), course.clone()))
                .collect(),
            page,
        ))
    }

    /// Count all courses
    async fn count_courses(&self) -> Result<u64> {
        Ok(self.courses.lock().await.len() as u64)
    }

    /// Save course
    async fn save_course(&self, course: &Course) -> Success {
        let mut courses = self.courses.lock().await;
        courses.insert(course.id.clone(), course.clone());
        Ok(())
    }

    /// Delete course
    async fn delete_course(&self, id: &str) -> Success {
        let mut courses = self.courses.lock().await;
        courses.remove(id);
        Ok(())
    }

    /// Adjust a course's subscriber counter
    async fn adjust_subscriber_count(&self, course_id: &str, delta: i64) -> Success {
        let mut courses = self.courses.lock().await;
        if let Some(course) = courses.get_mut(course_id) {
            course.subscriptions += delta;
        }

        Ok(())
    }

    /// Atomically assign an unredeemed enrollment code to a user
    async fn redeem_token(&self, course_id: &str, token: &str, user_id: &str) -> Result<bool> {
        let mut courses = self.courses.lock().await;
        if let Some(course) = courses.get_mut(course_id) {
            if let Some(entry) = course
                .tokens
                .iter_mut()
                .find(|entry| entry.token == token && entry.user.is_none())
            {
                entry.user = Some(user_id.to_string());
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Append a lesson to a course
    async fn push_lesson(&self, course_id: &str, lesson: &Lesson) -> Success {
        let mut courses = self.courses.lock().await;
        if let Some(course) = courses.get_mut(course_id) {
            course.lessons.push(lesson.clone());
        }

        Ok(())
    }

    /// Remove a lesson by id
    async fn pull_lesson(&self, course_id: &str, lesson_id: &str) -> Success {
        let mut courses = self.courses.lock().await;
        if let Some(course) = courses.get_mut(course_id) {
            course.lessons.retain(|lesson| lesson.id != lesson_id);
        }

        Ok(())
    }

    /// Append an addon to a course
    async fn push_addon(&self, course_id: &str, addon: &Addon) -> Success {
        let mut courses = self.courses.lock().await;
        if let Some(course) = courses.get_mut(course_id) {
            course.addons.push(addon.clone());
        }

        Ok(())
    }

    /// Remove an addon by id
    async fn pull_addon(&self, course_id: &str, addon_id: &str) -> Success {
        let mut courses = self.courses.lock().await;
        if let Some(course) = courses.get_mut(course_id) {
            course.addons.retain(|addon| addon.id != addon_id);
        }

        Ok(())
    }

    /// Atomically insert a review unless the user already has one
    async fn push_review(&self, course_id: &str, review: &Review) -> Result<bool> {
        let mut courses = self.courses.lock().await;
        if let Some(course) = courses.get_mut(course_id) {
            if course.reviews.iter().any(|entry| entry.id == review.id) {
                return Ok(false);
            }

            course.reviews.push(review.clone());
            return Ok(true);
        }

        Ok(false)
    }

    /// Remove all reviews by the given user
    async fn pull_review(&self, course_id: &str, user_id: &str) -> Success {
        let mut courses = self.courses.lock().await;
        if let Some(course) = courses.get_mut(course_id) {
            course.reviews.retain(|review| review.id != user_id);
        }

        Ok(())
    }
}
