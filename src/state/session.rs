//! Wizard session management
//!
//! This module tracks one user's pass through the event-creation wizard:
//! the draft being assembled, the current step, the close-confirmation
//! phase, and the in-flight submission flag.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::draft::{ActivityType, EventDraft, TransportDetails};
use crate::state::wizard::{
    close_transition, step_sequence, CloseEvent, WizardPhase, WizardStep,
};
use crate::utils::errors::{Result, TrailBuddyError};

/// Transport choice made on the transport-options step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportChoice {
    Public,
    Car,
    None,
}

/// One user's pass through the event-creation wizard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardSession {
    /// User this session belongs to
    pub user_id: i64,
    /// Draft being assembled across the steps
    pub draft: EventDraft,
    /// Current step (always a member of the derived step list)
    pub step: WizardStep,
    /// Close-confirmation phase
    pub phase: WizardPhase,
    /// Whether a submission is currently in flight
    pub submitting: bool,
    /// When this session was last updated
    pub updated_at: DateTime<Utc>,
}

impl WizardSession {
    /// Open a fresh wizard for a user
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            draft: EventDraft::new(),
            step: WizardStep::Activity,
            phase: WizardPhase::Open,
            submitting: false,
            updated_at: Utc::now(),
        }
    }

    /// Open the wizard with a previously stored draft.
    ///
    /// The step pointer restarts at the activity step; the step list itself
    /// is re-derived from the resumed answers.
    pub fn resume(user_id: i64, draft: EventDraft) -> Self {
        Self {
            user_id,
            draft,
            ..Self::new(user_id)
        }
    }

    /// Freshly derived step list for the current draft
    pub fn steps(&self) -> Vec<WizardStep> {
        step_sequence(&self.draft)
    }

    /// 1-based progress through the current step list
    pub fn progress(&self) -> (usize, usize) {
        let steps = self.steps();
        let position = steps
            .iter()
            .position(|s| *s == self.step)
            .unwrap_or(0);
        (position + 1, steps.len())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn ensure_open(&self) -> Result<()> {
        if self.phase != WizardPhase::Open {
            return Err(TrailBuddyError::InvalidStateTransition {
                from: format!("{:?}", self.phase),
                to: "Open".to_string(),
            });
        }
        Ok(())
    }

    /// Position of the current step in the given list, re-anchored to the
    /// nearest surviving earlier step when conditional logic has removed
    /// the step the pointer was on.
    fn anchored_position(&self, steps: &[WizardStep]) -> usize {
        // the list always starts with Activity, so an anchor always exists
        steps.iter().rposition(|s| *s <= self.step).unwrap_or(0)
    }

    /// Move forward to the entry after the current step in the freshly
    /// recomputed list. Used by confirmation-button steps.
    pub fn advance(&mut self) -> Result<WizardStep> {
        self.ensure_open()?;
        let steps = self.steps();
        let position = self.anchored_position(&steps);

        self.step = *steps.get(position + 1).unwrap_or(&steps[position]);
        self.touch();
        Ok(self.step)
    }

    /// Move back to the previous entry in the current step list, if any
    pub fn back(&mut self) -> Result<WizardStep> {
        self.ensure_open()?;
        let steps = self.steps();
        let position = self.anchored_position(&steps);

        self.step = steps[position.saturating_sub(1)];
        self.touch();
        Ok(self.step)
    }

    /// Pick an activity type. Auto-advances, and drops a stale route
    /// selection when the new activity does not use one.
    pub fn select_activity(&mut self, activity: ActivityType) -> Result<WizardStep> {
        self.ensure_open()?;
        self.draft.activity_type = Some(activity);
        if !activity.needs_route() {
            self.draft.route_id = None;
        }
        self.touch();
        self.advance()
    }

    /// Pick a route. Auto-advances.
    pub fn select_route(&mut self, route_id: Uuid) -> Result<WizardStep> {
        self.ensure_open()?;
        if self.step != WizardStep::Route {
            return Err(TrailBuddyError::InvalidStateTransition {
                from: self.step.to_string(),
                to: WizardStep::Route.to_string(),
            });
        }
        self.draft.route_id = Some(route_id);
        self.touch();
        self.advance()
    }

    /// Set the date and time; stays on the step until confirmed
    pub fn set_date_time(&mut self, date: Option<NaiveDate>, time: Option<NaiveTime>) {
        self.draft.date = date;
        self.draft.time = time;
        self.touch();
    }

    /// Set the event name and participant cap; stays on the step
    pub fn set_details(&mut self, event_name: &str, max_participants: Option<i32>) {
        self.draft.event_name = event_name.to_string();
        self.draft.max_participants = max_participants;
        self.touch();
    }

    /// Set the description and disclaimer flag; stays on the step
    pub fn set_description(&mut self, description: &str, has_disclaimer: bool) {
        self.draft.description = description.to_string();
        self.draft.has_disclaimer = has_disclaimer;
        self.touch();
    }

    /// Pick a transport option. Auto-advances; switching modes replaces the
    /// detail record, re-picking the current mode keeps what was entered.
    pub fn choose_transport(&mut self, choice: TransportChoice) -> Result<WizardStep> {
        self.ensure_open()?;
        let keep_current = matches!(
            (&self.draft.transport, choice),
            (Some(TransportDetails::Public { .. }), TransportChoice::Public)
                | (Some(TransportDetails::Car { .. }), TransportChoice::Car)
        );
        if !keep_current {
            self.draft.transport = Some(match choice {
                TransportChoice::Public => TransportDetails::public(),
                TransportChoice::Car => TransportDetails::car(),
                TransportChoice::None => TransportDetails::None,
            });
        }
        self.touch();
        self.advance()
    }

    /// Fill in the public-transport detail step
    pub fn set_public_transport(
        &mut self,
        meeting_point: &str,
        ticket_cost: &str,
        instructions: &str,
    ) -> Result<()> {
        match self.draft.transport {
            Some(TransportDetails::Public { .. }) => {
                self.draft.transport = Some(TransportDetails::Public {
                    meeting_point: meeting_point.to_string(),
                    ticket_cost: ticket_cost.to_string(),
                    instructions: instructions.to_string(),
                });
                self.touch();
                Ok(())
            }
            _ => Err(TrailBuddyError::InvalidInput(
                "Public transport details require the public transport choice".to_string(),
            )),
        }
    }

    /// Fill in the car-transport detail step
    pub fn set_car_transport(
        &mut self,
        pickup_location: &str,
        fuel_cost: &str,
        car_description: &str,
    ) -> Result<()> {
        match self.draft.transport {
            Some(TransportDetails::Car { .. }) => {
                self.draft.transport = Some(TransportDetails::Car {
                    pickup_location: pickup_location.to_string(),
                    fuel_cost: fuel_cost.to_string(),
                    car_description: car_description.to_string(),
                });
                self.touch();
                Ok(())
            }
            _ => Err(TrailBuddyError::InvalidInput(
                "Car transport details require the car choice".to_string(),
            )),
        }
    }

    /// Ask to close the wizard. With unsaved data this moves to the
    /// discard confirmation instead of closing.
    pub fn request_close(&mut self) -> WizardPhase {
        self.phase = close_transition(
            self.phase,
            self.draft.has_unsaved_changes(),
            CloseEvent::CloseRequested,
        );
        self.touch();
        self.phase
    }

    /// Return from the discard confirmation to editing
    pub fn continue_editing(&mut self) -> WizardPhase {
        self.phase = close_transition(
            self.phase,
            self.draft.has_unsaved_changes(),
            CloseEvent::ContinueEditing,
        );
        self.touch();
        self.phase
    }

    /// Discard the draft: reset all fields and the step pointer, close
    pub fn discard(&mut self) -> WizardPhase {
        self.phase = close_transition(
            self.phase,
            self.draft.has_unsaved_changes(),
            CloseEvent::Discard,
        );
        if self.phase == WizardPhase::Closed {
            self.draft = EventDraft::new();
            self.step = WizardStep::Activity;
        }
        self.touch();
        self.phase
    }

    /// Mark a submission as in flight. At most one at a time.
    pub fn begin_submission(&mut self) -> Result<()> {
        if self.submitting {
            return Err(TrailBuddyError::SubmissionInProgress);
        }
        self.submitting = true;
        self.touch();
        Ok(())
    }

    /// Clear the in-flight flag. A successful submission also resets the
    /// draft and step pointer and closes the wizard; a failed one leaves
    /// the draft intact for retry.
    pub fn finish_submission(&mut self, success: bool) {
        self.submitting = false;
        if success {
            self.draft = EventDraft::new();
            self.step = WizardStep::Activity;
            self.phase = WizardPhase::Closed;
        }
        self.touch();
    }
}
