/// Session model
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Session {
    /// Unique Id
    #[serde(rename = "_id")]
    pub id: String,

    /// Session token, sent in the `x-session-token` header
    pub token: String,

    /// User this session belongs to
    pub user_id: String,

    /// Friendly name for the session
    pub name: String,
}
