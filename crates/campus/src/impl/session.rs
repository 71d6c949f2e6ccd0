use crate::{models::Session, Campus, CampusEvent, Success};

impl Session {
    /// Delete this session
    pub async fn delete(self, campus: &Campus) -> Success {
        campus.database.delete_session(&self.id).await?;

        campus
            .publish_event(CampusEvent::DeleteSession {
                user_id: self.user_id,
                session_id: self.id,
            })
            .await;

        Ok(())
    }
}
