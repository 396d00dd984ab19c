//! Team member directory for task assignment.
//!
//! The directory resolves user identities for the task engine. Credentials
//! and sessions stay with the host application; this context only knows who
//! exists, what they are called, and which role they hold.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
