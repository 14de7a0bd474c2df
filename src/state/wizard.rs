//! Wizard step machine
//!
//! Pure functions describing the event-creation wizard: which steps exist,
//! in what order they appear for a given draft, and how the close/discard
//! confirmation behaves. Everything here is synchronous and side-effect
//! free so the step-skipping behavior can be unit tested in isolation.

use serde::{Deserialize, Serialize};

use crate::models::draft::{EventDraft, TransportDetails};

/// A single step of the event-creation wizard.
///
/// Declaration order is the canonical step order; `Ord` follows it so a
/// step pointer stranded by conditional logic can be re-anchored to the
/// nearest surviving earlier step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    Activity,
    Route,
    DateTime,
    Details,
    Description,
    Transport,
    PublicTransport,
    CarTransport,
    Preview,
}

impl WizardStep {
    /// Steps with an explicit continue button, as opposed to steps that
    /// auto-advance as soon as the user picks a value
    pub fn requires_confirmation(self) -> bool {
        matches!(
            self,
            WizardStep::DateTime
                | WizardStep::Details
                | WizardStep::Description
                | WizardStep::PublicTransport
                | WizardStep::CarTransport
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            WizardStep::Activity => "activity",
            WizardStep::Route => "route",
            WizardStep::DateTime => "datetime",
            WizardStep::Details => "details",
            WizardStep::Description => "description",
            WizardStep::Transport => "transport",
            WizardStep::PublicTransport => "transport-public",
            WizardStep::CarTransport => "transport-car",
            WizardStep::Preview => "preview",
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Derive the step list for the current draft answers.
///
/// The list always starts with the activity step and ends with the preview
/// step. The route step appears only for route-eligible activities, and a
/// transport-detail step only for the matching transport choice. Callers
/// recompute this on every navigation rather than caching it, so a step
/// that conditional logic removed can never be stepped into.
pub fn step_sequence(draft: &EventDraft) -> Vec<WizardStep> {
    let mut steps = vec![WizardStep::Activity];

    if draft
        .activity_type
        .map(|activity| activity.needs_route())
        .unwrap_or(false)
    {
        steps.push(WizardStep::Route);
    }

    steps.extend([
        WizardStep::DateTime,
        WizardStep::Details,
        WizardStep::Description,
        WizardStep::Transport,
    ]);

    match draft.transport {
        Some(TransportDetails::Public { .. }) => steps.push(WizardStep::PublicTransport),
        Some(TransportDetails::Car { .. }) => steps.push(WizardStep::CarTransport),
        Some(TransportDetails::None) | None => {}
    }

    steps.push(WizardStep::Preview);
    steps
}

/// Close/discard confirmation phase of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardPhase {
    Open,
    ConfirmingDiscard,
    Closed,
}

/// Events driving the close-confirmation machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseEvent {
    CloseRequested,
    ContinueEditing,
    Discard,
}

/// Pure transition function for the close-confirmation machine.
///
/// Closing while the draft holds unsaved data asks for confirmation first;
/// closing an empty wizard closes immediately. Events that do not apply in
/// the current phase leave it unchanged.
pub fn close_transition(phase: WizardPhase, has_changes: bool, event: CloseEvent) -> WizardPhase {
    match (phase, event) {
        (WizardPhase::Open, CloseEvent::CloseRequested) => {
            if has_changes {
                WizardPhase::ConfirmingDiscard
            } else {
                WizardPhase::Closed
            }
        }
        (WizardPhase::ConfirmingDiscard, CloseEvent::ContinueEditing) => WizardPhase::Open,
        (WizardPhase::ConfirmingDiscard, CloseEvent::Discard) => WizardPhase::Closed,
        (phase, _) => phase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::draft::ActivityType;

    fn draft_with_activity(activity: ActivityType) -> EventDraft {
        EventDraft {
            activity_type: Some(activity),
            ..EventDraft::default()
        }
    }

    #[test]
    fn test_sequence_bounds_for_all_drafts() {
        let activities = [
            None,
            Some(ActivityType::Hiking),
            Some(ActivityType::Cycling),
            Some(ActivityType::Climbing),
            Some(ActivityType::Skiing),
            Some(ActivityType::Bouldering),
            Some(ActivityType::Social),
        ];
        let transports = [
            None,
            Some(TransportDetails::public()),
            Some(TransportDetails::car()),
            Some(TransportDetails::None),
        ];

        for activity in activities {
            for transport in &transports {
                let draft = EventDraft {
                    activity_type: activity,
                    transport: transport.clone(),
                    ..EventDraft::default()
                };
                let steps = step_sequence(&draft);
                assert_eq!(steps.first(), Some(&WizardStep::Activity));
                assert_eq!(steps.last(), Some(&WizardStep::Preview));
            }
        }
    }

    #[test]
    fn test_route_step_follows_activity_for_route_activities() {
        for activity in [
            ActivityType::Hiking,
            ActivityType::Cycling,
            ActivityType::Climbing,
        ] {
            let steps = step_sequence(&draft_with_activity(activity));
            let route_positions: Vec<usize> = steps
                .iter()
                .enumerate()
                .filter(|(_, s)| **s == WizardStep::Route)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(route_positions, vec![1]);
        }
    }

    #[test]
    fn test_route_step_absent_for_other_activities() {
        for activity in [
            ActivityType::Skiing,
            ActivityType::Bouldering,
            ActivityType::Social,
        ] {
            let steps = step_sequence(&draft_with_activity(activity));
            assert!(!steps.contains(&WizardStep::Route));
        }
    }

    #[test]
    fn test_transport_detail_step_matches_choice() {
        let mut draft = EventDraft::default();

        draft.transport = Some(TransportDetails::public());
        let steps = step_sequence(&draft);
        assert!(steps.contains(&WizardStep::PublicTransport));
        assert!(!steps.contains(&WizardStep::CarTransport));

        draft.transport = Some(TransportDetails::car());
        let steps = step_sequence(&draft);
        assert!(steps.contains(&WizardStep::CarTransport));
        assert!(!steps.contains(&WizardStep::PublicTransport));

        draft.transport = Some(TransportDetails::None);
        let steps = step_sequence(&draft);
        assert!(!steps.contains(&WizardStep::PublicTransport));
        assert!(!steps.contains(&WizardStep::CarTransport));
    }

    #[test]
    fn test_skiing_no_transport_sequence() {
        let draft = EventDraft {
            activity_type: Some(ActivityType::Skiing),
            transport: Some(TransportDetails::None),
            ..EventDraft::default()
        };
        assert_eq!(
            step_sequence(&draft),
            vec![
                WizardStep::Activity,
                WizardStep::DateTime,
                WizardStep::Details,
                WizardStep::Description,
                WizardStep::Transport,
                WizardStep::Preview,
            ]
        );
    }

    #[test]
    fn test_confirmation_steps() {
        assert!(WizardStep::DateTime.requires_confirmation());
        assert!(WizardStep::PublicTransport.requires_confirmation());
        assert!(!WizardStep::Activity.requires_confirmation());
        assert!(!WizardStep::Transport.requires_confirmation());
        assert!(!WizardStep::Preview.requires_confirmation());
    }

    #[test]
    fn test_close_with_changes_asks_first() {
        assert_eq!(
            close_transition(WizardPhase::Open, true, CloseEvent::CloseRequested),
            WizardPhase::ConfirmingDiscard
        );
    }

    #[test]
    fn test_close_without_changes_closes_immediately() {
        assert_eq!(
            close_transition(WizardPhase::Open, false, CloseEvent::CloseRequested),
            WizardPhase::Closed
        );
    }

    #[test]
    fn test_confirmation_offers_exactly_two_exits() {
        assert_eq!(
            close_transition(
                WizardPhase::ConfirmingDiscard,
                true,
                CloseEvent::ContinueEditing
            ),
            WizardPhase::Open
        );
        assert_eq!(
            close_transition(WizardPhase::ConfirmingDiscard, true, CloseEvent::Discard),
            WizardPhase::Closed
        );
        // A second close request while confirming changes nothing
        assert_eq!(
            close_transition(
                WizardPhase::ConfirmingDiscard,
                true,
                CloseEvent::CloseRequested
            ),
            WizardPhase::ConfirmingDiscard
        );
    }
}
