//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as standalone files under
//! `templates/`, so layout can be edited and diffed without touching Rust. They are
//! embedded at compile time.
//!
//! Line breaks are explicit: every output line ends with a literal newline inside
//! the template, and block tags sit at the start of the line they control. Width and
//! padding math happens in `render.rs`; templates only place strings and pick styles.

pub const BOOKS_TEMPLATE: &str = include_str!("templates/books.tmp");
pub const STATS_TEMPLATE: &str = include_str!("templates/stats.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
