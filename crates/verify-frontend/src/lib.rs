//! Decision core and HTTP journeys for the identity verification hub front-end.
//!
//! The journeys are thin axum routers over pure decision functions. Everything the hub owns
//! (session state, federation reporting, IdP display metadata, analytics) is reached through
//! the collaborator traits in [`journeys`], so the core never touches process-wide state.

pub mod config;
pub mod error;
pub mod journeys;
pub mod telemetry;
