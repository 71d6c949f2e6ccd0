/// Author model
///
/// Copied by value into courses at creation time, never referenced live.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Author {
    /// Unique Id
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,
    pub profession: String,

    pub email: Option<String>,
    pub mobile: Option<String>,

    /// Portrait image URL
    pub image: Option<String>,
}
