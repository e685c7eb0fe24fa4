use rentahan_primitives::models::chat_message::ChatMessage;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Per-booking conversation history, append-only.
#[derive(Default)]
pub struct MessageRepository {
    messages: RwLock<HashMap<Uuid, Vec<ChatMessage>>>,
}

impl MessageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, Vec<ChatMessage>>> {
        self.messages.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, Vec<ChatMessage>>> {
        self.messages.write().unwrap_or_else(|p| p.into_inner())
    }

    pub fn append(&self, message: ChatMessage) -> ChatMessage {
        self.write()
            .entry(message.booking_id)
            .or_default()
            .push(message.clone());
        message
    }

    pub fn for_booking(&self, booking_id: Uuid) -> Vec<ChatMessage> {
        let mut messages = self
            .read()
            .get(&booking_id)
            .cloned()
            .unwrap_or_default();
        messages.sort_by_key(|m| m.created_at);
        messages
    }
}
