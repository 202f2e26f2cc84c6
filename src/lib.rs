//! HackMatch - application and teammate-matching service for hackathons
//!
//! Participants build an application profile, browse other submitted
//! profiles, and form mutual matches through an interested/pass flow.
//! The reconciliation of mutual interest is a pure state machine in
//! [`core::reconciler`], executed transactionally by the Postgres store.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{decide, Decision};
pub use models::{
    Application, ApplicationStatus, Interaction, InteractionStatus, MatchSummary, PublicProfile,
    ReactionAction,
};
