//! # Infrastructure Layer
//!
//! Concrete persistence implementations for the Streetcode backend.
//! The repository traits live in `sc_core`; this crate provides their
//! MySQL implementations over SQLx together with connection pool
//! management.

pub mod database;

pub use database::connection::create_pool;
pub use database::mysql::{MySqlTokenRepository, MySqlUserRepository};
