//! In-Memory Wizard Session Store
//!
//! Sessions live for the lifetime of the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::WizardSession;
use crate::domain::foundation::AssessmentId;
use crate::ports::{SessionStoreError, WizardSessionStore};

/// In-memory storage for wizard sessions
#[derive(Debug, Clone, Default)]
pub struct InMemoryWizardSessionStore {
    sessions: Arc<RwLock<HashMap<AssessmentId, WizardSession>>>,
}

impl InMemoryWizardSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl WizardSessionStore for InMemoryWizardSessionStore {
    async fn save(&self, session: &WizardSession) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn load(&self, id: AssessmentId) -> Result<WizardSession, SessionStoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .cloned()
            .ok_or(SessionStoreError::NotFound(id))
    }
}
