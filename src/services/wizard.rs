//! Wizard service
//!
//! Opens, persists, and discards wizard sessions around the draft store.
//! The session itself stays a pure state machine; this service is the glue
//! that writes the draft through on every change and resumes it on open.

use crate::state::{DraftStorage, WizardPhase, WizardSession};
use crate::utils::errors::Result;
use crate::utils::logging::log_draft_action;

#[derive(Debug, Clone)]
pub struct WizardService {
    drafts: DraftStorage,
}

impl WizardService {
    pub fn new(drafts: DraftStorage) -> Self {
        Self { drafts }
    }

    /// Open the wizard for a user, resuming a stored draft when one exists.
    ///
    /// A missing or malformed stored draft silently yields a fresh session.
    pub async fn open(&self, user_id: i64) -> Result<WizardSession> {
        let session = match self.drafts.load_draft(user_id).await? {
            Some(draft) => {
                log_draft_action(user_id, "resumed", None);
                WizardSession::resume(user_id, draft)
            }
            None => {
                log_draft_action(user_id, "opened", None);
                WizardSession::new(user_id)
            }
        };
        Ok(session)
    }

    /// Write the session's draft through to the store.
    ///
    /// Called after every mutation; an empty draft clears the slot instead
    /// of storing an all-default record.
    pub async fn persist(&self, session: &WizardSession) -> Result<()> {
        if session.draft.is_empty() {
            self.drafts.clear_draft(session.user_id).await?;
        } else {
            self.drafts.save_draft(session.user_id, &session.draft).await?;
            log_draft_action(session.user_id, "saved", Some(session.step.name()));
        }
        Ok(())
    }

    /// Confirm the discard: clear the stored draft and close the wizard
    pub async fn discard(&self, session: &mut WizardSession) -> Result<WizardPhase> {
        let phase = session.discard();
        if phase == WizardPhase::Closed {
            self.drafts.clear_draft(session.user_id).await?;
            log_draft_action(session.user_id, "discarded", None);
        }
        Ok(phase)
    }
}
