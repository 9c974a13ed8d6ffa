#[cfg(test)]
#[path = "sessions_test.rs"]
mod tests;

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use super::Conversation;
use super::Framer;
use crate::domain::models::ModelCatalog;

/// Per-connection state. Owned by the registry for its lifetime and only
/// ever touched from the connection's own task.
pub struct Session {
    pub id: String,
    pub framer: Framer,
    pub conversation: Conversation,
}

/// The registry of live sessions, keyed by `<remote-address>:<remote-port>`.
/// Entries are inserted on accept and removed on connection end or error;
/// nothing is shared between entries beyond the read-only catalog.
pub struct Sessions {
    catalog: Arc<ModelCatalog>,
    system_prompt: String,
    history_limit: usize,
    active: DashMap<String, Arc<Mutex<Session>>>,
}

impl Sessions {
    pub fn new(catalog: Arc<ModelCatalog>, system_prompt: &str, history_limit: usize) -> Sessions {
        return Sessions {
            catalog,
            system_prompt: system_prompt.to_string(),
            history_limit,
            active: DashMap::new(),
        };
    }

    pub fn open(&self, id: &str) -> Arc<Mutex<Session>> {
        let session = Arc::new(Mutex::new(Session {
            id: id.to_string(),
            framer: Framer::new(),
            conversation: Conversation::new(
                &self.catalog,
                &self.system_prompt,
                self.history_limit,
            ),
        }));

        self.active.insert(id.to_string(), session.clone());

        return session;
    }

    pub fn get(&self, id: &str) -> Option<Arc<Mutex<Session>>> {
        return self.active.get(id).map(|entry| return entry.value().clone());
    }

    pub fn close(&self, id: &str) {
        self.active.remove(id);
    }

    pub fn count(&self) -> usize {
        return self.active.len();
    }

    pub fn catalog(&self) -> &ModelCatalog {
        return &self.catalog;
    }
}
