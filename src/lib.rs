//! Parlor is a full-screen terminal chat front-end for a local bot relay.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns session state: the transcript, the bot roster and
//!   selection, the send-cycle contract, and configuration.
//! - [`api`] defines the relay wire payloads and the HTTP client.
//! - [`ui`] renders the terminal interface and runs the interactive event
//!   loop that drives user input and display updates.
//! - [`utils`] carries input sanitization, syntax highlighting, scroll
//!   math, and logging.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::run`], which resolves settings and dispatches into
//! [`ui::chat_loop`] for the interactive session.

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
