//! HTTP API layer for the Streetcode backend
//!
//! Exposes the authentication endpoints over Actix-web and wires the
//! domain services from `sc_core` to the MySQL repositories in
//! `sc_infra`.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
