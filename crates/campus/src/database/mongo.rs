use bson::{to_document, Bson, Document};
use futures::stream::TryStreamExt;
use mongodb::options::UpdateOptions;
use std::ops::Deref;

use crate::{
    models::{Addon, Author, Category, Course, Lesson, Page, Review, Session, User},
    Error, Result, Success,
};

use super::{definition::AbstractDatabase, Migration};

#[derive(Clone)]
pub struct MongoDb(pub mongodb::Database);

impl Deref for MongoDb {
    type Target = mongodb::Database;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl MongoDb {
    fn name_filter(name: &str) -> Document {
        doc! {
            "name": {
                "$regex": name,
                "$options": "i"
            }
        }
    }

    async fn find_by_id<T>(&self, collection: &'static str, id: &str, missing: Error) -> Result<T>
    where
        T: serde::de::DeserializeOwned + Send + Sync,
    {
        self.collection(collection)
            .find_one(doc! {
                "_id": id
            })
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find_one",
                with: collection,
            })?
            .ok_or(missing)
    }

    async fn save_by_id<T>(&self, collection: &'static str, id: &str, document: &T) -> Success
    where
        T: serde::Serialize + Send + Sync,
    {
        self.collection::<T>(collection)
            .update_one(
                doc! {
                    "_id": id
                },
                doc! {
                    "$set": to_document(document).map_err(|_| Error::DatabaseError {
                        operation: "to_document",
                        with: collection,
                    })?
                },
            )
            .with_options(UpdateOptions::builder().upsert(true).build())
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "upsert_one",
                with: collection,
            })
            .map(|_| ())
    }

    async fn delete_by_id(&self, collection: &'static str, id: &str) -> Success {
        self.collection::<Document>(collection)
            .delete_one(doc! {
                "_id": id
            })
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "delete_one",
                with: collection,
            })
            .map(|_| ())
    }

    async fn list<T>(
        &self,
        collection: &'static str,
        filter: Document,
        sort_key: &str,
        page: Page,
    ) -> Result<Vec<T>>
    where
        T: serde::de::DeserializeOwned + Send + Sync,
    {
        self.collection::<T>(collection)
            .find(filter)
            .sort(doc! { sort_key: 1 })
            .skip(page.skip())
            .limit(page.size as i64)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find",
                with: collection,
            })?
            .try_collect()
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "collect",
                with: collection,
            })
    }

    async fn count(&self, collection: &'static str) -> Result<u64> {
        self.collection::<Document>(collection)
            .estimated_document_count()
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "count",
                with: collection,
            })
    }

    async fn update_course(&self, course_id: &str, update: Document) -> Result<u64> {
        self.collection::<Course>("courses")
            .update_one(
                doc! {
                    "_id": course_id
                },
                update,
            )
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "update_one",
                with: "course",
            })
            .map(|result| result.matched_count)
    }
}

#[async_trait]
impl AbstractDatabase for MongoDb {
    /// Run a database migration
    async fn run_migration(&self, migration: Migration) -> Success {
        match migration {
            #[cfg(debug_assertions)]
            Migration::WipeAll => {
                // Drop the entire database
                self.drop().await.unwrap();
            }
            Migration::M2026_01_10EnsureUpToSpec => {
                if self
                    .collection::<Document>("courses")
                    .list_index_names()
                    .await
                    .unwrap_or_default()
                    .contains(&"name".to_owned())
                {
                    return Ok(());
                }

                // Make sure all collections exist
                let list = self.list_collection_names().await.unwrap();
                let collections = ["users", "sessions", "authors", "categories", "courses"];

                for name in collections {
                    if !list.contains(&name.to_string()) {
                        self.create_collection(name).await.unwrap();
                    }
                }

                self.run_command(doc! {
                    "createIndexes": "users",
                    "indexes": [
                        {
                            "key": {
                                "username": 1
                            },
                            "name": "username",
                            "unique": true,
                            "collation": {
                                "locale": "en",
                                "strength": 2
                            }
                        },
                        {
                            "key": {
                                "verification.token": 1
                            },
                            "name": "email_verification"
                        },
                        {
                            "key": {
                                "password_reset.token": 1
                            },
                            "name": "password_reset"
                        }
                    ]
                })
                .await
                .unwrap();

                self.run_command(doc! {
                    "createIndexes": "sessions",
                    "indexes": [
                        {
                            "key": {
                                "token": 1
                            },
                            "name": "token",
                            "unique": true
                        },
                        {
                            "key": {
                                "user_id": 1
                            },
                            "name": "user_id"
                        }
                    ]
                })
                .await
                .unwrap();

                self.run_command(doc! {
                    "createIndexes": "courses",
                    "indexes": [
                        {
                            "key": {
                                "name": 1
                            },
                            "name": "name",
                            "unique": true
                        },
                        {
                            "key": {
                                "tokens.token": 1
                            },
                            "name": "enrollment_code"
                        }
                    ]
                })
                .await
                .unwrap();
            }
        }

        Ok(())
    }

    /// Find user by id
    async fn find_user(&self, id: &str) -> Result<User> {
        self.find_by_id("users", id, Error::UnknownUser).await
    }

    /// Find user by username
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.collection("users")
            .find_one(doc! {
                "username": username
            })
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find_one",
                with: "user",
            })
    }

    /// Find user by normalised email
    async fn find_user_by_normalised_email(
        &self,
        normalised_email: &str,
    ) -> Result<Option<User>> {
        self.collection("users")
            .find_one(doc! {
                "email_normalised": normalised_email
            })
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find_one",
                with: "user",
            })
    }

    /// Find user with active pending email verification
    async fn find_user_with_email_verification(&self, token: &str) -> Result<User> {
        self.collection("users")
            .find_one(doc! {
                "verification.token": token,
                "verification.expiry": {
                    "$gte": bson::DateTime::now().try_to_rfc3339_string().expect("failed to convert to rfc3339 time string")
                }
            })
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find_one",
                with: "user",
            })?
            .ok_or(Error::InvalidToken)
    }

    /// Find user with active password reset
    async fn find_user_with_password_reset(&self, token: &str) -> Result<User> {
        self.collection("users")
            .find_one(doc! {
                "password_reset.token": token,
                "password_reset.expiry": {
                    "$gte": bson::DateTime::now().try_to_rfc3339_string().expect("failed to convert to rfc3339 time string")
                }
            })
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find_one",
                with: "user",
            })?
            .ok_or(Error::InvalidToken)
    }

    /// List users whose first name matches the filter
    async fn list_users(&self, name: &str, page: Page) -> Result<Vec<User>> {
        self.list(
            "users",
            doc! {
                "first_name": {
                    "$regex": name,
                    "$options": "i"
                }
            },
            "first_name",
            page,
        )
        .await
    }

    /// Count all users
    async fn count_users(&self) -> Result<u64> {
        self.count("users").await
    }

    /// Save user
    async fn save_user(&self, user: &User) -> Success {
        self.save_by_id("users", &user.id, user).await
    }

    /// Delete user
    async fn delete_user(&self, id: &str) -> Success {
        self.delete_by_id("users", id).await
    }

    /// Enroll a user in a course
    async fn add_subscription(&self, user_id: &str, course_id: &str) -> Result<bool> {
        self.collection::<User>("users")
            .update_one(
                doc! {
                    "_id": user_id,
                    "subscriptions.course_id": {
                        "$ne": course_id
                    }
                },
                doc! {
                    "$push": {
                        "subscriptions": {
                            "course_id": course_id,
                            "watched": []
                        }
                    }
                },
            )
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "update_one",
                with: "user",
            })
            .map(|result| result.matched_count > 0)
    }

    /// Remove a user's enrollment
    async fn remove_subscription(&self, user_id: &str, course_id: &str) -> Result<bool> {
        self.collection::<User>("users")
            .update_one(
                doc! {
                    "_id": user_id
                },
                doc! {
                    "$pull": {
                        "subscriptions": {
                            "course_id": course_id
                        }
                    }
                },
            )
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "update_one",
                with: "user",
            })
            .map(|result| result.modified_count > 0)
    }

    /// Bookmark a course
    async fn add_bookmark(&self, user_id: &str, course_id: &str) -> Result<bool> {
        self.collection::<User>("users")
            .update_one(
                doc! {
                    "_id": user_id,
                    "bookmarks": {
                        "$ne": course_id
                    }
                },
                doc! {
                    "$push": {
                        "bookmarks": course_id
                    }
                },
            )
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "update_one",
                with: "user",
            })
            .map(|result| result.matched_count > 0)
    }

    /// Remove a bookmark
    async fn remove_bookmark(&self, user_id: &str, course_id: &str) -> Success {
        self.collection::<User>("users")
            .update_one(
                doc! {
                    "_id": user_id
                },
                doc! {
                    "$pull": {
                        "bookmarks": course_id
                    }
                },
            )
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "update_one",
                with: "user",
            })
            .map(|_| ())
    }

    /// Record a watched lesson on the matching subscription
    async fn add_watched_lesson(
        &self,
        user_id: &str,
        course_id: &str,
        lesson_id: &str,
    ) -> Result<bool> {
        self.collection::<User>("users")
            .update_one(
                doc! {
                    "_id": user_id,
                    "subscriptions.course_id": course_id,
                    "subscriptions.watched": {
                        "$ne": lesson_id
                    }
                },
                doc! {
                    "$push": {
                        "subscriptions.$.watched": lesson_id
                    }
                },
            )
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "update_one",
                with: "user",
            })
            .map(|result| result.matched_count > 0)
    }

    /// Set or clear a user's profile image
    async fn set_user_image(&self, user_id: &str, image: Option<String>) -> Success {
        let image = image.map(Bson::String).unwrap_or(Bson::Null);

        self.collection::<User>("users")
            .update_one(
                doc! {
                    "_id": user_id
                },
                doc! {
                    "$set": {
                        "image": image
                    }
                },
            )
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "update_one",
                with: "user",
            })
            .map(|_| ())
    }

    /// Find session by token
    async fn find_session_by_token(&self, token: &str) -> Result<Option<Session>> {
        self.collection("sessions")
            .find_one(doc! {
                "token": token
            })
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find_one",
                with: "session",
            })
    }

    /// Save session
    async fn save_session(&self, session: &Session) -> Success {
        self.save_by_id("sessions", &session.id, session).await
    }

    /// Delete session
    async fn delete_session(&self, id: &str) -> Success {
        self.delete_by_id("sessions", id).await
    }

    /// Find author by id
    async fn find_author(&self, id: &str) -> Result<Author> {
        self.find_by_id("authors", id, Error::UnknownAuthor).await
    }

    /// List authors by name filter
    async fn list_authors(&self, name: &str, page: Page) -> Result<Vec<Author>> {
        self.list("authors", Self::name_filter(name), "name", page).await
    }

    /// Count all authors
    async fn count_authors(&self) -> Result<u64> {
        self.count("authors").await
    }

    /// Save author
    async fn save_author(&self, author: &Author) -> Success {
        self.save_by_id("authors", &author.id, author).await
    }

    /// Delete author
    async fn delete_author(&self, id: &str) -> Success {
        self.delete_by_id("authors", id).await
    }

    /// Find category by id
    async fn find_category(&self, id: &str) -> Result<Category> {
        self.find_by_id("categories", id, Error::UnknownCategory)
            .await
    }

    /// List categories by name filter
    async fn list_categories(&self, name: &str, page: Page) -> Result<Vec<Category>> {
        self.list("categories", Self::name_filter(name), "name", page).await
    }

    /// Count all categories
    async fn count_categories(&self) -> Result<u64> {
        self.count("categories").await
    }

    /// Save category
    async fn save_category(&self, category: &Category) -> Success {
        self.save_by_id("categories", &category.id, category).await
    }

    /// Delete category
    async fn delete_category(&self, id: &str) -> Success {
        self.delete_by_id("categories", id).await
    }

    /// Find course by id
    async fn find_course(&self, id: &str) -> Result<Course> {
        self.find_by_id("courses", id, Error::UnknownCourse).await
    }

    /// Find course by exact name
    async fn find_course_by_name(&self, name: &str) -> Result<Option<Course>> {
        self.collection("courses")
            .find_one(doc! {
                "name": name
            })
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find_one",
                with: "course",
            })
    }

    /// List courses by name filter
    async fn list_courses(&self, name: &str, page: Page) -> Result<Vec<Course>> {
        self.list("courses", Self::name_filter(name), "name", page).await
    }

    /// Count all courses
    async fn count_courses(&self) -> Result<u64> {
        self.count("courses").await
    }

    /// Save course
    async fn save_course(&self, course: &Course) -> Success {
        self.save_by_id("courses", &course.id, course).await
    }

    /// Delete course
    async fn delete_course(&self, id: &str) -> Success {
        self.delete_by_id("courses", id).await
    }

    /// Adjust a course's subscriber counter
    async fn adjust_subscriber_count(&self, course_id: &str, delta: i64) -> Success {
        self.update_course(
            course_id,
            doc! {
                "$inc": {
                    "subscriptions": delta
                }
            },
        )
        .await
        .map(|_| ())
    }

    /// Atomically assign an unredeemed enrollment code to a user
    ///
    /// The "not yet redeemed" predicate lives in the same filter as the
    /// positional update, so a code can only ever be claimed once.
    async fn redeem_token(&self, course_id: &str, token: &str, user_id: &str) -> Result<bool> {
        self.collection::<Course>("courses")
            .update_one(
                doc! {
                    "_id": course_id,
                    "tokens": {
                        "$elemMatch": {
                            "token": token,
                            "user": Bson::Null
                        }
                    }
                },
                doc! {
                    "$set": {
                        "tokens.$.user": user_id
                    }
                },
            )
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "update_one",
                with: "course",
            })
            .map(|result| result.matched_count > 0)
    }

    /// Append a lesson to a course
    async fn push_lesson(&self, course_id: &str, lesson: &Lesson) -> Success {
        self.update_course(
            course_id,
            doc! {
                "$push": {
                    "lessons": to_document(lesson).map_err(|_| Error::DatabaseError {
                        operation: "to_document",
                        with: "lesson",
                    })?
                }
            },
        )
        .await
        .map(|_| ())
    }

    /// Remove a lesson by id
    async fn pull_lesson(&self, course_id: &str, lesson_id: &str) -> Success {
        self.update_course(
            course_id,
            doc! {
                "$pull": {
                    "lessons": {
                        "id": lesson_id
                    }
                }
            },
        )
        .await
        .map(|_| ())
    }

    /// Append an addon to a course
    async fn push_addon(&self, course_id: &str, addon: &Addon) -> Success {
        self.update_course(
            course_id,
            doc! {
                "$push": {
                    "addons": to_document(addon).map_err(|_| Error::DatabaseError {
                        operation: "to_document",
                        with: "addon",
                    })?
                }
            },
        )
        .await
        .map(|_| ())
    }

    /// Remove an addon by id
    async fn pull_addon(&self, course_id: &str, addon_id: &str) -> Success {
        self.update_course(
            course_id,
            doc! {
                "$pull": {
                    "addons": {
                        "id": addon_id
                    }
                }
            },
        )
        .await
        .map(|_| ())
    }

    /// Atomically insert a review unless the user already has one
    async fn push_review(&self, course_id: &str, review: &Review) -> Result<bool> {
        self.collection::<Course>("courses")
            .update_one(
                doc! {
                    "_id": course_id,
                    "reviews.id": {
                        "$ne": &review.id
                    }
                },
                doc! {
                    "$push": {
                        "reviews": to_document(review).map_err(|_| Error::DatabaseError {
                            operation: "to_document",
                            with: "review",
                        })?
                    }
                },
            )
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "update_one",
                with: "course",
            })
            .map(|result| result.matched_count > 0)
    }

    /// Remove all reviews by the given user
    async fn pull_review(&self, course_id: &str, user_id: &str) -> Success {
        self.update_course(
            course_id,
            doc! {
                "$pull": {
                    "reviews": {
                        "id": user_id
                    }
                }
            },
        )
        .await
        .map(|_| ())
    }
}
