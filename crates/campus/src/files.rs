use std::path::{Path, PathBuf};

use crate::{Error, Result, Success};

/// Logical asset class an upload belongs to
#[derive(Debug, Clone, Copy)]
pub enum AssetScope<'a> {
    /// Course cover images
    Courses,
    /// Lesson videos for one course
    CourseVideos(&'a str),
    /// Addon images for one course
    CourseAddons(&'a str),
    Authors,
    Categories,
    Users,
}

impl AssetScope<'_> {
    fn relative(&self) -> String {
        match self {
            AssetScope::Courses => "courses".to_string(),
            AssetScope::CourseVideos(course_id) => format!("courses/{}/videos", course_id),
            AssetScope::CourseAddons(course_id) => format!("courses/{}/addons", course_id),
            AssetScope::Authors => "authors".to_string(),
            AssetScope::Categories => "categories".to_string(),
            AssetScope::Users => "users".to_string(),
        }
    }
}

/// A reserved destination for an incoming upload
#[derive(Debug)]
pub struct Upload {
    /// Where the handler should persist the file
    pub dest: PathBuf,
    /// Publicly resolvable URL recorded on the owning document
    pub url: String,
}

/// Upload pipeline: maps asset scopes to on-disk directories and public URLs
///
/// Handlers persist files to reserved destinations; documents only ever store
/// the returned URL as an opaque string.
#[derive(Clone)]
pub struct FileStore {
    base_dir: PathBuf,
    public_base: String,
}

impl Default for FileStore {
    fn default() -> FileStore {
        FileStore::new("data/uploads", "http://localhost:8000/files")
    }
}

impl FileStore {
    pub fn new(base_dir: impl Into<PathBuf>, public_base: impl Into<String>) -> FileStore {
        FileStore {
            base_dir: base_dir.into(),
            public_base: public_base.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Create the directory tree for a new course up front, so a course
    /// document never exists without a place for its assets
    pub fn ensure_course_tree(&self, course_id: &str) -> Success {
        for scope in [
            AssetScope::CourseVideos(course_id),
            AssetScope::CourseAddons(course_id),
        ] {
            std::fs::create_dir_all(self.base_dir.join(scope.relative())).map_err(|err| {
                error!("Failed to create course directory tree: {}", err);
                Error::FileStoreFailed
            })?;
        }

        Ok(())
    }

    /// Reserve a collision-resistant destination within the given scope
    pub fn reserve(&self, scope: AssetScope<'_>, extension: Option<&str>) -> Result<Upload> {
        let relative = scope.relative();

        std::fs::create_dir_all(self.base_dir.join(&relative)).map_err(|err| {
            error!("Failed to create upload directory: {}", err);
            Error::FileStoreFailed
        })?;

        let filename = match extension {
            Some(ext) => format!("{}.{}", ulid::Ulid::new(), ext),
            None => ulid::Ulid::new().to_string(),
        };

        Ok(Upload {
            dest: self.base_dir.join(&relative).join(&filename),
            url: format!("{}/{}/{}", self.public_base, relative, filename),
        })
    }
}
