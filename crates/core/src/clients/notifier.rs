use rentahan_primitives::error::ApiError;
use uuid::Uuid;

/// Fire-and-forget user notifications (push/toast surface in the app). Kept
/// behind a client so a real delivery channel can slot in later.
#[derive(Clone)]
pub struct NotifierClient {}

impl Default for NotifierClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifierClient {
    pub fn new() -> Self {
        Self {}
    }

    pub async fn notify(&self, user_id: Uuid, message: &str) -> Result<(), ApiError> {
        tracing::info!(%user_id, message, "notifying user");
        Ok(())
    }
}
