//! Domain layer containing the decision logic of the guided search flow.
//!
//! # Module Organization
//!
//! - `ids` - Opaque conversation and source identifiers
//! - `catalog` - Ordered registry of searchable job sites
//! - `selection` - Menu-answer parsing into a validated site set
//! - `conversation` - Per-thread dialogue state and its step machine
//! - `state_machine` - Transition-validation trait shared by step enums
//! - `replies` - Every user-facing message text

pub mod catalog;
pub mod conversation;
pub mod ids;
pub mod replies;
pub mod selection;
pub mod state_machine;

pub use catalog::{SiteCatalog, SiteEntry};
pub use conversation::{ConversationState, ConversationStep, StepKind};
pub use ids::{ConversationId, SourceId};
pub use selection::{parse_selection, SelectionError, ALL_KEYWORD};
pub use state_machine::{StateMachine, TransitionError};
