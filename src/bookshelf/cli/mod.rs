//! Command-line front end. See `commands.rs` for the flow.

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
