//! Session state and the contracts it obeys.

pub mod app;
pub mod config;
pub mod constants;
pub mod message;
pub mod roster;
pub mod send;
pub mod transcript;
