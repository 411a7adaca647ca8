//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the persisted credentials (token + cached account) and is
//! the only module that touches `localStorage`. `auth` is the reactive
//! in-memory view provided through Leptos context.

pub mod auth;
pub mod session;
