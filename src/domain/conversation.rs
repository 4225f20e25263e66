//! Conversation state entity.
//!
//! Tracks one in-progress guided search per chat thread. The step is a
//! tagged variant so each step statically carries exactly the data it needs;
//! a separate `StepKind` discriminant drives forward-only transition checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::SiteEntry;
use super::ids::{ConversationId, SourceId};
use super::state_machine::{StateMachine, TransitionError};

/// Where the dialogue currently stands, with that step's payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConversationStep {
    /// Menu was sent; waiting for the site choice.
    AwaitingSiteSelection,
    /// Sites chosen; waiting for the job title.
    AwaitingJobTitle { sources: Vec<SiteEntry> },
    /// A single regional site was chosen; waiting for the job title, with
    /// the location already fixed by the site itself.
    AwaitingJobTitleDirect {
        sources: Vec<SiteEntry>,
        location: String,
    },
    /// Job title stored; waiting for the location.
    AwaitingLocation {
        sources: Vec<SiteEntry>,
        job_title: String,
    },
}

impl ConversationStep {
    pub fn kind(&self) -> StepKind {
        match self {
            ConversationStep::AwaitingSiteSelection => StepKind::AwaitingSiteSelection,
            ConversationStep::AwaitingJobTitle { .. } => StepKind::AwaitingJobTitle,
            ConversationStep::AwaitingJobTitleDirect { .. } => StepKind::AwaitingJobTitleDirect,
            ConversationStep::AwaitingLocation { .. } => StepKind::AwaitingLocation,
        }
    }
}

/// Step discriminant used for transition validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    AwaitingSiteSelection,
    AwaitingJobTitle,
    AwaitingJobTitleDirect,
    AwaitingLocation,
}

impl StateMachine for StepKind {
    fn can_transition_to(&self, target: &Self) -> bool {
        use StepKind::*;
        matches!(
            (self, target),
            (AwaitingSiteSelection, AwaitingJobTitle)
                | (AwaitingSiteSelection, AwaitingJobTitleDirect)
                | (AwaitingJobTitle, AwaitingLocation)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use StepKind::*;
        match self {
            AwaitingSiteSelection => vec![AwaitingJobTitle, AwaitingJobTitleDirect],
            AwaitingJobTitle => vec![AwaitingLocation],
            // Both end in the search; the state is deleted, not advanced.
            AwaitingJobTitleDirect => vec![],
            AwaitingLocation => vec![],
        }
    }
}

/// One in-progress dialogue, keyed by its chat thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationState {
    pub conversation_id: ConversationId,
    pub step: ConversationStep,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ConversationState {
    /// Opens a new dialogue at the site-selection step.
    pub fn new(conversation_id: ConversationId) -> Self {
        let now = Utc::now();
        Self {
            conversation_id,
            step: ConversationStep::AwaitingSiteSelection,
            created_at: now,
            updated_at: now,
        }
    }

    /// Advances to the next step, validating the move is forward.
    pub fn advance(&mut self, step: ConversationStep) -> Result<(), TransitionError> {
        self.step.kind().transition_to(step.kind())?;
        self.step = step;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Source ids of the chosen sites, once past site selection.
    pub fn selected_source_ids(&self) -> Vec<SourceId> {
        let sources = match &self.step {
            ConversationStep::AwaitingSiteSelection => return Vec::new(),
            ConversationStep::AwaitingJobTitle { sources } => sources,
            ConversationStep::AwaitingJobTitleDirect { sources, .. } => sources,
            ConversationStep::AwaitingLocation { sources, .. } => sources,
        };
        sources.iter().map(|e| e.source_id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::SiteEntry;

    fn entry(name: &str) -> SiteEntry {
        SiteEntry::new(name, format!("{}.example", name.to_lowercase()))
    }

    fn state() -> ConversationState {
        ConversationState::new(ConversationId::new("chat-1"))
    }

    #[test]
    fn new_state_awaits_site_selection() {
        let state = state();
        assert_eq!(state.step.kind(), StepKind::AwaitingSiteSelection);
        assert!(state.selected_source_ids().is_empty());
    }

    #[test]
    fn advance_to_job_title_keeps_sources() {
        let mut state = state();
        state
            .advance(ConversationStep::AwaitingJobTitle {
                sources: vec![entry("LinkedIn"), entry("Gupy")],
            })
            .unwrap();

        assert_eq!(state.step.kind(), StepKind::AwaitingJobTitle);
        assert_eq!(state.selected_source_ids().len(), 2);
    }

    #[test]
    fn advance_to_location_keeps_job_title() {
        let mut state = state();
        state
            .advance(ConversationStep::AwaitingJobTitle {
                sources: vec![entry("Gupy")],
            })
            .unwrap();
        state
            .advance(ConversationStep::AwaitingLocation {
                sources: vec![entry("Gupy")],
                job_title: "Engenheiro de Dados".to_string(),
            })
            .unwrap();

        match &state.step {
            ConversationStep::AwaitingLocation { job_title, .. } => {
                assert_eq!(job_title, "Engenheiro de Dados");
            }
            other => panic!("unexpected step: {:?}", other),
        }
    }

    #[test]
    fn direct_step_holds_the_fixed_location() {
        let mut state = state();
        state
            .advance(ConversationStep::AwaitingJobTitleDirect {
                sources: vec![entry("RioVagas")],
                location: "Rio de Janeiro".to_string(),
            })
            .unwrap();

        match &state.step {
            ConversationStep::AwaitingJobTitleDirect { location, .. } => {
                assert_eq!(location, "Rio de Janeiro");
            }
            other => panic!("unexpected step: {:?}", other),
        }
    }

    #[test]
    fn steps_never_regress() {
        let mut state = state();
        state
            .advance(ConversationStep::AwaitingJobTitle {
                sources: vec![entry("Gupy")],
            })
            .unwrap();

        let result = state.advance(ConversationStep::AwaitingSiteSelection);
        assert!(result.is_err());
        assert_eq!(state.step.kind(), StepKind::AwaitingJobTitle);
    }

    #[test]
    fn terminal_steps_have_no_outgoing_transitions() {
        assert!(StepKind::AwaitingJobTitleDirect.is_terminal());
        assert!(StepKind::AwaitingLocation.is_terminal());
        assert!(!StepKind::AwaitingSiteSelection.is_terminal());
        assert!(!StepKind::AwaitingJobTitle.is_terminal());
    }

    #[test]
    fn selection_step_cannot_jump_straight_to_location() {
        let mut state = state();
        let result = state.advance(ConversationStep::AwaitingLocation {
            sources: vec![entry("Gupy")],
            job_title: "QA".to_string(),
        });
        assert!(result.is_err());
    }
}
