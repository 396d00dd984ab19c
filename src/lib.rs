//! `WorkNest`: task administration core for small teams.
//!
//! This crate provides the task lifecycle and assignment engine: creating
//! tasks, assigning several users at once, progressing status, freezing,
//! soft deletion and restoration, reassignment, comments, and an
//! append-only activity trail of every mutation.
//!
//! # Architecture
//!
//! `WorkNest` follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, assignment, comments and activity trail
//! - [`user`]: Directory of team members consulted for assignment

pub mod task;
pub mod user;
