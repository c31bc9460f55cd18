//! Terminal client for readplan: argument parsing, rendering, the interactive shell.
//!
//! Everything here is a consumer of [`readplan::api`]; nothing below the API knows a
//! terminal exists.

pub mod commands;
pub mod render;
pub mod setup;
pub mod shell;
pub mod styles;
pub mod templates;

pub use commands::run;
