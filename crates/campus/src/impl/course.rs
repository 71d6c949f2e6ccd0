use std::collections::HashSet;

use iso8601_timestamp::Timestamp;

use crate::{
    models::{Addon, AddonContent, Course, Lesson, Review, ReviewSummary, Token, User},
    util::enrollment_code,
    Campus, CampusEvent, Error, Result, Success,
};

/// Number of enrollment codes generated for every course
pub const TOKEN_COUNT: u32 = 25;

/// Validated course creation input
pub struct NewCourse {
    pub name: String,
    pub description: String,
    pub fee: u32,
    pub author_id: String,
    pub category_id: String,
    pub language: Option<String>,
    /// Cover image URL, already stored by the upload pipeline
    pub image: String,
}

/// Validated input for a lesson or addon entry
pub struct NewEntry {
    pub title: String,
    pub description: String,
}

impl NewEntry {
    pub fn validate(&self) -> Success {
        let len = |s: &str| s.chars().count();

        if !(1..=100).contains(&len(&self.title)) {
            return Err(Error::IncorrectData { with: "title" });
        }

        if len(&self.description) > 255 {
            return Err(Error::IncorrectData {
                with: "description",
            });
        }

        Ok(())
    }
}

fn generate_tokens() -> Vec<Token> {
    // Random 5-character codes; re-draw on the off chance of a collision
    // so every code on the course is distinct
    let mut seen = HashSet::new();

    (1..=TOKEN_COUNT)
        .map(|id| {
            let mut code = enrollment_code();
            while !seen.insert(code.clone()) {
                code = enrollment_code();
            }

            Token {
                id,
                token: code,
                user: None,
            }
        })
        .collect()
}

impl Course {
    /// Check the field constraints shared by creation and edits
    pub fn validate(&self) -> Success {
        let len = |s: &str| s.chars().count();

        if !(3..=50).contains(&len(&self.name)) {
            return Err(Error::IncorrectData { with: "name" });
        }

        if !(3..=255).contains(&len(&self.description)) {
            return Err(Error::IncorrectData {
                with: "description",
            });
        }

        if self.fee > 100_000 {
            return Err(Error::IncorrectData { with: "fee" });
        }

        if let Some(language) = &self.language {
            if !(3..=10).contains(&len(language)) {
                return Err(Error::IncorrectData { with: "language" });
            }
        }

        Ok(())
    }

    /// Create a new course
    ///
    /// Resolves the author and category references into value snapshots,
    /// generates the fixed set of enrollment codes and pre-creates the
    /// course's upload directory tree.
    pub async fn create(campus: &Campus, data: NewCourse) -> Result<Course> {
        let author = campus.database.find_author(&data.author_id).await?;
        let category = campus.database.find_category(&data.category_id).await?;

        if campus
            .database
            .find_course_by_name(&data.name)
            .await?
            .is_some()
        {
            return Err(Error::CourseNameTaken);
        }

        let course = Course {
            id: ulid::Ulid::new().to_string(),

            name: data.name,
            description: data.description,
            fee: data.fee,

            author,
            category,

            image: data.image,
            language: data.language,

            subscriptions: 0,

            tokens: generate_tokens(),
            lessons: vec![],
            addons: vec![],
            reviews: vec![],
        };

        course.validate()?;

        campus.files.ensure_course_tree(&course.id)?;
        campus.database.save_course(&course).await?;

        info!("course_created|{}", course.name);

        campus
            .publish_event(CampusEvent::CreateCourse {
                course: course.clone(),
            })
            .await;

        Ok(course)
    }

    /// Delete a course
    pub async fn delete(campus: &Campus, course_id: &str) -> Success {
        campus.database.delete_course(course_id).await?;

        campus
            .publish_event(CampusEvent::DeleteCourse {
                course_id: course_id.to_string(),
            })
            .await;

        Ok(())
    }

    /// Redeem an enrollment code for a user
    ///
    /// The code must exist on the course and must not have been redeemed
    /// before; the check and the assignment are one atomic update.
    pub async fn redeem_code(
        campus: &Campus,
        course_id: &str,
        code: &str,
        user_id: &str,
    ) -> Success {
        if campus
            .database
            .redeem_token(course_id, code, user_id)
            .await?
        {
            Ok(())
        } else {
            Err(Error::UnknownToken)
        }
    }

    /// Append a lesson with a freshly stored video URL
    pub async fn append_lesson(
        campus: &Campus,
        course_id: &str,
        entry: NewEntry,
        url: String,
    ) -> Result<Lesson> {
        entry.validate()?;

        // Course must exist; appending to a missing course is an error
        campus.database.find_course(course_id).await?;

        let lesson = Lesson {
            id: ulid::Ulid::new().to_string(),
            title: entry.title,
            description: entry.description,
            url,
        };

        campus.database.push_lesson(course_id, &lesson).await?;

        Ok(lesson)
    }

    /// Remove a lesson by id; absent ids are a no-op
    pub async fn remove_lesson(campus: &Campus, course_id: &str, lesson_id: &str) -> Success {
        campus.database.pull_lesson(course_id, lesson_id).await
    }

    /// Append an addon with a freshly stored image URL
    pub async fn append_addon(
        campus: &Campus,
        course_id: &str,
        entry: NewEntry,
        image: String,
    ) -> Result<Addon> {
        entry.validate()?;

        campus.database.find_course(course_id).await?;

        let addon = Addon {
            id: ulid::Ulid::new().to_string(),
            title: entry.title,
            description: entry.description,
            date: Timestamp::now_utc(),
            contents: vec![AddonContent {
                id: ulid::Ulid::new().to_string(),
                image,
            }],
        };

        campus.database.push_addon(course_id, &addon).await?;

        Ok(addon)
    }

    /// Remove an addon by id; absent ids are a no-op
    pub async fn remove_addon(campus: &Campus, course_id: &str, addon_id: &str) -> Success {
        campus.database.pull_addon(course_id, addon_id).await
    }

    /// Submit a review for a course
    ///
    /// At most one review per user: the guard is part of the same atomic
    /// update as the insert, so a repeat submission is a no-op and the
    /// return value reports whether the review was recorded.
    pub async fn submit_review(
        campus: &Campus,
        course_id: &str,
        user: &User,
        rating: u8,
        comment: String,
    ) -> Result<bool> {
        if rating > 5 {
            return Err(Error::IncorrectData { with: "rating" });
        }

        if comment.chars().count() > 1024 {
            return Err(Error::IncorrectData { with: "comment" });
        }

        campus.database.find_course(course_id).await?;

        let review = Review {
            id: user.id.clone(),
            name: user.display_name(),
            rating: Some(rating),
            comment,
            time: Timestamp::now_utc(),
        };

        campus.database.push_review(course_id, &review).await
    }

    /// Remove all reviews by the given user
    pub async fn remove_review(campus: &Campus, course_id: &str, user_id: &str) -> Success {
        campus.database.pull_review(course_id, user_id).await
    }

    /// Aggregate the rated reviews of a course
    ///
    /// Unrated sentinel entries are excluded; the average is 0.0 when no
    /// rated reviews exist.
    pub async fn review_summary(
        campus: &Campus,
        course_id: &str,
        user_id: &str,
    ) -> Result<ReviewSummary> {
        let course = campus.database.find_course(course_id).await?;

        let reviews: Vec<Review> = course
            .reviews
            .into_iter()
            .filter(|review| review.rating.is_some())
            .collect();

        let user_review = reviews.iter().find(|review| review.id == user_id).cloned();

        let reviews_count = reviews.len();
        let avg_rating = if reviews_count == 0 {
            0.0
        } else {
            reviews
                .iter()
                .filter_map(|review| review.rating)
                .map(f64::from)
                .sum::<f64>()
                / reviews_count as f64
        };

        Ok(ReviewSummary {
            user_review,
            reviews,
            reviews_count,
            avg_rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Author, Category};
    use crate::FileStore;

    async fn scratch_campus() -> Campus {
        let campus = Campus {
            files: FileStore::new(
                std::env::temp_dir().join(format!("campus-core-{}", ulid::Ulid::new())),
                "http://localhost:8000/files",
            ),
            ..Default::default()
        };

        campus
            .database
            .save_author(&Author {
                id: "author".to_string(),
                name: "John Smith".to_string(),
                profession: "Teacher".to_string(),
                email: None,
                mobile: None,
                image: None,
            })
            .await
            .unwrap();

        campus
            .database
            .save_category(&Category {
                id: "category".to_string(),
                name: "Science".to_string(),
                icon: "http://localhost:8000/resources/category.png".to_string(),
            })
            .await
            .unwrap();

        campus
    }

    fn physics_101() -> NewCourse {
        NewCourse {
            name: "Physics 101".to_string(),
            description: "An introduction to mechanics.".to_string(),
            fee: 500,
            author_id: "author".to_string(),
            category_id: "category".to_string(),
            language: None,
            image: String::new(),
        }
    }

    fn test_user(id: &str, first_name: &str) -> User {
        User {
            id: id.to_string(),
            username: format!("{}42", first_name),
            email: format!("{}@example.com", first_name),
            email_normalised: format!("{}@example.com", first_name),
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            mobile: "777123456".to_string(),
            password: String::new(),
            image: None,
            is_admin: false,
            verification: crate::models::EmailVerification::Verified,
            password_reset: None,
            subscriptions: vec![],
            bookmarks: vec![],
        }
    }

    #[async_std::test]
    async fn creation_generates_25_unique_tokens_and_snapshots() {
        let campus = scratch_campus().await;
        let course = Course::create(&campus, physics_101()).await.unwrap();

        assert_eq!(course.tokens.len(), TOKEN_COUNT as usize);

        let ids: HashSet<u32> = course.tokens.iter().map(|t| t.id).collect();
        assert_eq!(ids, (1..=TOKEN_COUNT).collect());

        let codes: HashSet<&str> = course.tokens.iter().map(|t| t.token.as_str()).collect();
        assert_eq!(codes.len(), TOKEN_COUNT as usize);
        assert!(course.tokens.iter().all(|t| t.user.is_none()));

        assert_eq!(course.author.name, "John Smith");
        assert_eq!(course.category.name, "Science");
        assert_eq!(course.fee, 500);
        assert!(course.lessons.is_empty());
        assert!(course.addons.is_empty());
        assert!(course.reviews.is_empty());

        // Upload tree exists before any asset arrives
        assert!(campus
            .files
            .base_dir()
            .join("courses")
            .join(&course.id)
            .join("videos")
            .is_dir());
    }

    #[async_std::test]
    async fn creation_rejects_bad_references_and_duplicates() {
        let campus = scratch_campus().await;

        let mut data = physics_101();
        data.author_id = "missing".to_string();
        assert_eq!(
            Course::create(&campus, data).await.unwrap_err(),
            Error::UnknownAuthor
        );

        let mut data = physics_101();
        data.category_id = "missing".to_string();
        assert_eq!(
            Course::create(&campus, data).await.unwrap_err(),
            Error::UnknownCategory
        );

        Course::create(&campus, physics_101()).await.unwrap();
        assert_eq!(
            Course::create(&campus, physics_101()).await.unwrap_err(),
            Error::CourseNameTaken
        );
    }

    #[async_std::test]
    async fn creation_rejects_out_of_range_fields() {
        let campus = scratch_campus().await;

        let mut data = physics_101();
        data.fee = 100_001;
        assert_eq!(
            Course::create(&campus, data).await.unwrap_err(),
            Error::IncorrectData { with: "fee" }
        );

        let mut data = physics_101();
        data.name = "ab".to_string();
        assert_eq!(
            Course::create(&campus, data).await.unwrap_err(),
            Error::IncorrectData { with: "name" }
        );
    }

    #[async_std::test]
    async fn codes_redeem_exactly_once() {
        let campus = scratch_campus().await;
        let course = Course::create(&campus, physics_101()).await.unwrap();
        let code = course.tokens[3].token.clone();

        Course::redeem_code(&campus, &course.id, &code, "user_a")
            .await
            .unwrap();

        let stored = campus.database.find_course(&course.id).await.unwrap();
        let redeemed: Vec<&Token> = stored
            .tokens
            .iter()
            .filter(|t| t.user.is_some())
            .collect();

        assert_eq!(redeemed.len(), 1);
        assert_eq!(redeemed[0].token, code);
        assert_eq!(redeemed[0].user.as_deref(), Some("user_a"));

        // Replay is rejected and nothing else changes
        assert_eq!(
            Course::redeem_code(&campus, &course.id, &code, "user_b")
                .await
                .unwrap_err(),
            Error::UnknownToken
        );

        let stored = campus.database.find_course(&course.id).await.unwrap();
        assert_eq!(
            stored.tokens.iter().filter(|t| t.user.is_some()).count(),
            1
        );
        assert_eq!(
            stored.tokens.iter().find(|t| t.token == code).unwrap().user,
            Some("user_a".to_string())
        );
    }

    #[async_std::test]
    async fn unknown_codes_leave_the_course_unchanged() {
        let campus = scratch_campus().await;
        let course = Course::create(&campus, physics_101()).await.unwrap();

        assert_eq!(
            Course::redeem_code(&campus, &course.id, "zzzzz", "user_a")
                .await
                .unwrap_err(),
            Error::UnknownToken
        );

        let stored = campus.database.find_course(&course.id).await.unwrap();
        assert!(stored.tokens.iter().all(|t| t.user.is_none()));
    }

    #[async_std::test]
    async fn lessons_append_and_remove() {
        let campus = scratch_campus().await;
        let course = Course::create(&campus, physics_101()).await.unwrap();

        let lesson = Course::append_lesson(
            &campus,
            &course.id,
            NewEntry {
                title: "Intro".to_string(),
                description: "First steps.".to_string(),
            },
            "http://localhost:8000/files/courses/x/videos/intro.mp4".to_string(),
        )
        .await
        .unwrap();

        let stored = campus.database.find_course(&course.id).await.unwrap();
        assert_eq!(stored.lessons.len(), 1);
        assert_eq!(stored.lessons[0].title, "Intro");

        // Removing an absent id is a no-op
        Course::remove_lesson(&campus, &course.id, "missing")
            .await
            .unwrap();
        let stored = campus.database.find_course(&course.id).await.unwrap();
        assert_eq!(stored.lessons.len(), 1);

        Course::remove_lesson(&campus, &course.id, &lesson.id)
            .await
            .unwrap();
        let stored = campus.database.find_course(&course.id).await.unwrap();
        assert!(stored.lessons.is_empty());
    }

    #[async_std::test]
    async fn lesson_ids_are_always_fresh() {
        let campus = scratch_campus().await;
        let course = Course::create(&campus, physics_101()).await.unwrap();

        for no in 0..3 {
            Course::append_lesson(
                &campus,
                &course.id,
                NewEntry {
                    title: format!("Lesson {}", no),
                    description: "...".to_string(),
                },
                String::new(),
            )
            .await
            .unwrap();
        }

        let stored = campus.database.find_course(&course.id).await.unwrap();
        let ids: HashSet<&str> = stored.lessons.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[async_std::test]
    async fn appending_to_missing_course_fails() {
        let campus = scratch_campus().await;

        assert_eq!(
            Course::append_lesson(
                &campus,
                "missing",
                NewEntry {
                    title: "Intro".to_string(),
                    description: "...".to_string(),
                },
                String::new(),
            )
            .await
            .unwrap_err(),
            Error::UnknownCourse
        );
    }

    #[async_std::test]
    async fn addons_carry_one_content_entry() {
        let campus = scratch_campus().await;
        let course = Course::create(&campus, physics_101()).await.unwrap();

        let addon = Course::append_addon(
            &campus,
            &course.id,
            NewEntry {
                title: "Formula sheet".to_string(),
                description: "Printable reference.".to_string(),
            },
            "http://localhost:8000/files/courses/x/addons/sheet.png".to_string(),
        )
        .await
        .unwrap();

        assert_eq!(addon.contents.len(), 1);
        assert_ne!(addon.id, addon.contents[0].id);

        Course::remove_addon(&campus, &course.id, &addon.id)
            .await
            .unwrap();
        let stored = campus.database.find_course(&course.id).await.unwrap();
        assert!(stored.addons.is_empty());
    }

    #[async_std::test]
    async fn second_review_by_the_same_user_is_a_no_op() {
        let campus = scratch_campus().await;
        let course = Course::create(&campus, physics_101()).await.unwrap();
        let user = test_user("user_a", "Alice");

        assert!(
            Course::submit_review(&campus, &course.id, &user, 4, "Solid.".to_string())
                .await
                .unwrap()
        );

        assert!(
            !Course::submit_review(&campus, &course.id, &user, 1, "Changed my mind.".to_string())
                .await
                .unwrap()
        );

        let stored = campus.database.find_course(&course.id).await.unwrap();
        assert_eq!(stored.reviews.len(), 1);
        assert_eq!(stored.reviews[0].rating, Some(4));
    }

    #[async_std::test]
    async fn summary_averages_ratings() {
        let campus = scratch_campus().await;
        let course = Course::create(&campus, physics_101()).await.unwrap();

        let alice = test_user("user_a", "Alice");
        let bob = test_user("user_b", "Bob");

        Course::submit_review(&campus, &course.id, &alice, 4, "Good.".to_string())
            .await
            .unwrap();
        Course::submit_review(&campus, &course.id, &bob, 5, "Great.".to_string())
            .await
            .unwrap();

        let summary = Course::review_summary(&campus, &course.id, &alice.id)
            .await
            .unwrap();

        assert_eq!(summary.reviews_count, 2);
        assert_eq!(summary.avg_rating, 4.5);
        assert_eq!(
            summary.user_review.as_ref().map(|r| r.rating),
            Some(Some(4))
        );
    }

    #[async_std::test]
    async fn summary_with_no_reviews_is_zero_not_nan() {
        let campus = scratch_campus().await;
        let course = Course::create(&campus, physics_101()).await.unwrap();

        let summary = Course::review_summary(&campus, &course.id, "user_a")
            .await
            .unwrap();

        assert_eq!(summary.reviews_count, 0);
        assert_eq!(summary.avg_rating, 0.0);
        assert!(summary.user_review.is_none());
    }

    #[async_std::test]
    async fn summary_excludes_unrated_sentinels() {
        let campus = scratch_campus().await;
        let mut course = Course::create(&campus, physics_101()).await.unwrap();

        course.reviews.push(Review {
            id: "legacy".to_string(),
            name: "Legacy User".to_string(),
            rating: None,
            comment: String::new(),
            time: Timestamp::now_utc(),
        });
        campus.database.save_course(&course).await.unwrap();

        let alice = test_user("user_a", "Alice");
        Course::submit_review(&campus, &course.id, &alice, 3, "Fine.".to_string())
            .await
            .unwrap();

        let summary = Course::review_summary(&campus, &course.id, &alice.id)
            .await
            .unwrap();

        assert_eq!(summary.reviews_count, 1);
        assert_eq!(summary.avg_rating, 3.0);
    }

    #[async_std::test]
    async fn removing_reviews_by_user() {
        let campus = scratch_campus().await;
        let course = Course::create(&campus, physics_101()).await.unwrap();
        let alice = test_user("user_a", "Alice");

        Course::submit_review(&campus, &course.id, &alice, 4, "Good.".to_string())
            .await
            .unwrap();
        Course::remove_review(&campus, &course.id, &alice.id)
            .await
            .unwrap();

        let stored = campus.database.find_course(&course.id).await.unwrap();
        assert!(stored.reviews.is_empty());

        // And the user may review again afterwards
        assert!(
            Course::submit_review(&campus, &course.id, &alice, 5, "Better now.".to_string())
                .await
                .unwrap()
        );
    }
}
