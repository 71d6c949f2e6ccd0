/// Category model
///
/// Same snapshot pattern as [`Author`]: courses embed a value copy.
///
/// [`Author`]: super::Author
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Category {
    /// Unique Id
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    /// Icon URL
    pub icon: String,
}
