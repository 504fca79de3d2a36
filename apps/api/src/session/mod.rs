//! Session store: the single owner of a candidate's in-progress profile.
//!
//! A `ResumeSession` lives for one user session and is passed explicitly to
//! whatever needs it. Consumers hold `SessionHandle`s; once the session ends,
//! every handle fails with `StoreError::ContextUnavailable`. Nothing is persisted.

use std::sync::{Arc, Weak};

use thiserror::Error;
use tokio::sync::{watch, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{PartialProfile, Profile, TemplateVariant};

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("resume session is not available (ended or never started)")]
    ContextUnavailable,
}

#[derive(Debug, Default)]
struct SessionData {
    profile: Profile,
    template: TemplateVariant,
    cover_letter: String,
}

#[derive(Debug)]
struct SessionState {
    id: Uuid,
    data: RwLock<SessionData>,
    /// Bumped on every write; subscribers re-read whatever they display.
    revision: watch::Sender<u64>,
}

impl SessionState {
    fn notify(&self) {
        self.revision.send_modify(|rev| *rev += 1);
        debug!(session = %self.id, revision = *self.revision.borrow(), "session updated");
    }
}

/// Owner of the session. Dropping it (or calling `end`) invalidates every handle.
#[derive(Debug)]
pub struct ResumeSession {
    state: Arc<SessionState>,
}

impl ResumeSession {
    /// Starts a session with an empty profile, the default template and no cover letter.
    pub fn start() -> Self {
        let (revision, _) = watch::channel(0);
        let state = Arc::new(SessionState {
            id: Uuid::new_v4(),
            data: RwLock::new(SessionData::default()),
            revision,
        });
        info!(session = %state.id, "resume session started");
        Self { state }
    }

    pub fn id(&self) -> Uuid {
        self.state.id
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            state: Arc::downgrade(&self.state),
        }
    }

    /// Ends the session, discarding everything it held.
    pub fn end(self) {
        info!(session = %self.state.id, "resume session ended");
    }
}

/// Read/write accessor for a session, cheap to clone.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    state: Weak<SessionState>,
}

impl SessionHandle {
    fn state(&self) -> Result<Arc<SessionState>, StoreError> {
        self.state.upgrade().ok_or(StoreError::ContextUnavailable)
    }

    pub async fn profile(&self) -> Result<Profile, StoreError> {
        let state = self.state()?;
        let data = state.data.read().await;
        Ok(data.profile.clone())
    }

    /// Shallow-merges the provided top-level fields into the current profile.
    pub async fn update_profile(&self, patch: PartialProfile) -> Result<(), StoreError> {
        let state = self.state()?;
        patch.apply_to(&mut state.data.write().await.profile);
        state.notify();
        Ok(())
    }

    pub async fn selected_template(&self) -> Result<TemplateVariant, StoreError> {
        let state = self.state()?;
        let data = state.data.read().await;
        Ok(data.template)
    }

    pub async fn set_selected_template(&self, variant: TemplateVariant) -> Result<(), StoreError> {
        let state = self.state()?;
        state.data.write().await.template = variant;
        state.notify();
        Ok(())
    }

    pub async fn cover_letter(&self) -> Result<String, StoreError> {
        let state = self.state()?;
        let data = state.data.read().await;
        Ok(data.cover_letter.clone())
    }

    pub async fn set_cover_letter(&self, text: String) -> Result<(), StoreError> {
        let state = self.state()?;
        state.data.write().await.cover_letter = text;
        state.notify();
        Ok(())
    }

    /// Back to an empty profile, default template and no cover letter.
    pub async fn reset(&self) -> Result<(), StoreError> {
        let state = self.state()?;
        *state.data.write().await = SessionData::default();
        state.notify();
        info!(session = %state.id, "resume session reset");
        Ok(())
    }

    /// Change feed: the receiver observes a new revision after every write and
    /// reports closed once the session ends.
    pub fn subscribe(&self) -> Result<watch::Receiver<u64>, StoreError> {
        Ok(self.state()?.revision.subscribe())
    }
}
