//! State management module
//!
//! This module handles the wizard step machine, per-user wizard sessions,
//! and draft persistence.

pub mod session;
pub mod storage;
pub mod wizard;

// Re-export commonly used state components
pub use session::{TransportChoice, WizardSession};
pub use storage::{DraftStorage, KeyValueStore, MemoryKeyValueStore, RedisKeyValueStore};
pub use wizard::{close_transition, step_sequence, CloseEvent, WizardPhase, WizardStep};
