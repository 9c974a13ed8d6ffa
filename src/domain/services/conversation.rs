#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use crate::domain::models::Message;
use crate::domain::models::ModelCatalog;
use crate::domain::models::Role;

/// A session's bounded conversation context plus its selected model.
///
/// The first entry is always the system message. Beyond it, at most `limit`
/// user/assistant turns are retained; the oldest are evicted first.
pub struct Conversation {
    messages: Vec<Message>,
    model: String,
    limit: usize,
}

impl Conversation {
    pub fn new(catalog: &ModelCatalog, system_prompt: &str, limit: usize) -> Conversation {
        return Conversation {
            messages: vec![Message::new(Role::System, system_prompt)],
            model: catalog.default_model().to_string(),
            limit,
        };
    }

    pub fn append(&mut self, role: Role, content: &str) {
        self.messages.push(Message::new(role, content));

        let excess = self.messages.len().saturating_sub(self.limit + 1);
        if excess > 0 {
            // The system message at index 0 is never evicted.
            self.messages.drain(1..1 + excess);
        }
    }

    /// Drops every turn except the system message and restores the default
    /// model. The session itself stays alive.
    pub fn reset(&mut self, catalog: &ModelCatalog) {
        self.messages.truncate(1);
        self.model = catalog.default_model().to_string();
    }

    /// Switches the selected model when `name` is in the catalog. Returns
    /// false and leaves the previous model active otherwise.
    pub fn set_model(&mut self, catalog: &ModelCatalog, name: &str) -> bool {
        if !catalog.contains(name) {
            return false;
        }

        self.model = name.to_string();
        return true;
    }

    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn model(&self) -> &str {
        return &self.model;
    }
}
