//! Task lifecycle management for `WorkNest`.
//!
//! This module creates tasks, replaces their assignee sets, changes their
//! status unless they are frozen, soft-deletes and restores them, stores
//! comments, and records one activity entry per mutation. Callers pass an
//! explicit [`domain::Actor`] into every operation instead of relying on an
//! ambient security context. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
