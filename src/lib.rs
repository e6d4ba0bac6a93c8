//! Crouton
//!
//! Crouton is the data-transfer layer for a weekly cob-order application:
//! immutable value types for orders, recurring orders and their exceptions,
//! users, credentials, and calendar weeks, plus the pure ISO-8601 week
//! arithmetic that drives the weekly changeover and order deadline.
//!
//! The crate performs no I/O and holds no state. Transport, persistence,
//! and session enforcement are its consumers' concerns.

pub mod orders;
pub mod schedule;
pub mod users;
pub mod variants;
pub mod weeks;

mod uuids;
