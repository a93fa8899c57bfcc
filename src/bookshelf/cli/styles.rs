//! Styles for the bookshelf CLI.
//!
//! Templates never name colors. They tag text with a semantic style name
//! (`{{ book.title | style("title") }}`) and this module maps those names to
//! `console::Style`s. When stdout is not a color terminal the `style` filter leaves
//! text untouched.
//!
//! Chart bars keep the palette the library has always used: green/red for the
//! reading status, orange for genres, light blue for decades.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const HEADING: &str = "heading";
    pub const TITLE: &str = "title";
    pub const LABEL: &str = "label";
    pub const MUTED: &str = "muted";
    pub const READ: &str = "read";
    pub const UNREAD: &str = "unread";
    pub const BAR_GENRE: &str = "bar-genre";
    pub const BAR_DECADE: &str = "bar-decade";
    pub const METRIC: &str = "metric";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

/// Named styles applied by the `style` template filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Styles `text`, or returns it as-is when colors are off.
    ///
    /// An unknown name is flagged with `(!?)` so template typos show up in output.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("(!?) {}", text),
        }
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

pub static BOOKSHELF_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(rgb_to_ansi256((140, 140, 140)));
    Theme::new()
        .add(names::HEADING, Style::new().green().bold())
        .add(names::TITLE, Style::new().bold())
        .add(names::LABEL, Style::new().bold())
        .add(names::MUTED, muted.clone())
        .add(names::READ, Style::new().green())
        .add(names::UNREAD, Style::new().red())
        .add(
            names::BAR_GENRE,
            Style::new().color256(rgb_to_ansi256((255, 179, 71))),
        )
        .add(
            names::BAR_DECADE,
            Style::new().color256(rgb_to_ansi256((135, 206, 250))),
        )
        .add(names::METRIC, Style::new().cyan().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted)
});
