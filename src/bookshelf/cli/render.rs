//! # Rendering Module
//!
//! Turns `CmdResult` data into terminal text through the minijinja templates in
//! `templates.rs`, styled by the theme in `styles.rs`.
//!
//! Layout calculations (label padding, bar lengths) stay in Rust because they need
//! Unicode-aware widths. Templates pick styles and place the pre-computed strings.
//!
//! Every public `render_*` detects color support on stdout; the `*_internal`
//! variants take an explicit setting so tests can assert on plain text.

use super::styles::{names, BOOKSHELF_THEME};
use super::templates::{BOOKS_TEMPLATE, CONFIG_TEMPLATE, MESSAGES_TEMPLATE, STATS_TEMPLATE};
use bookshelf::api::{CmdMessage, MessageLevel, Stats};
use bookshelf::config::{BookshelfConfig, MAX_CHART_WIDTH};
use bookshelf::model::Book;
use console::Term;
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

const BAR_CHAR: &str = "█";

#[derive(Serialize)]
struct BookCard {
    index: String,
    indent: String,
    title: String,
    author: String,
    published: u16,
    genre: String,
    status: &'static str,
    status_style: &'static str,
}

#[derive(Serialize)]
struct BooksData {
    books: Vec<BookCard>,
    empty_message: String,
}

#[derive(Serialize)]
struct ChartRow {
    label: String,
    bar: String,
    count: usize,
    style: &'static str,
}

#[derive(Serialize)]
struct Chart {
    title: &'static str,
    rows: Vec<ChartRow>,
}

#[derive(Serialize)]
struct AuthorRow {
    label: String,
    count: usize,
}

#[derive(Serialize)]
struct StatsData {
    empty: bool,
    total_books: usize,
    read_books: usize,
    percent_label: String,
    charts: Vec<Chart>,
    authors: Vec<AuthorRow>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

fn colors_supported() -> bool {
    Term::stdout().features().colors_supported()
}

fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: bool,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    let theme = BOOKSHELF_THEME.clone();
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
    env.render_str(template, data)
}

/// Renders books as numbered cards.
pub fn render_books(books: &[Book], empty_message: &str) -> String {
    render_books_internal(books, empty_message, colors_supported())
}

fn render_books_internal(books: &[Book], empty_message: &str, use_color: bool) -> String {
    let number_width = books.len().to_string().len();
    let cards = books
        .iter()
        .enumerate()
        .map(|(i, book)| BookCard {
            index: format!("{:>width$}", i + 1, width = number_width),
            indent: " ".repeat(number_width + 2),
            title: book.title.clone(),
            author: book.author.clone(),
            published: book.published,
            genre: book.genre.clone(),
            status: if book.read { "Read" } else { "Unread" },
            status_style: if book.read { names::READ } else { names::UNREAD },
        })
        .collect();

    let data = BooksData {
        books: cards,
        empty_message: empty_message.to_string(),
    };

    render_template(BOOKS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the statistics summary with its charts.
pub fn render_stats(stats: &Stats, config: &BookshelfConfig) -> String {
    render_stats_internal(stats, config, colors_supported())
}

fn render_stats_internal(stats: &Stats, config: &BookshelfConfig, use_color: bool) -> String {
    // config.json may have been edited by hand past what `config` accepts
    let width = config.chart_width.min(MAX_CHART_WIDTH);
    let mut charts = vec![bar_chart(
        "Reading Status",
        vec![
            ("Read".to_string(), stats.read_books, names::READ),
            ("Unread".to_string(), stats.unread_books(), names::UNREAD),
        ],
        width,
    )];

    if !stats.genre.is_empty() {
        charts.push(bar_chart(
            "Books by Genre",
            stats
                .genre
                .iter()
                .map(|(genre, count)| (genre.clone(), *count, names::BAR_GENRE))
                .collect(),
            width,
        ));
    }

    if !stats.decades.is_empty() {
        charts.push(bar_chart(
            "Books by Decade",
            stats
                .decades
                .iter()
                .map(|(decade, count)| (decade.to_string(), *count, names::BAR_DECADE))
                .collect(),
            width,
        ));
    }

    let top = stats.top_authors(config.top_authors);
    let author_width = top.iter().map(|(name, _)| name.width()).max().unwrap_or(0);
    let authors = top
        .into_iter()
        .map(|(name, count)| AuthorRow {
            label: pad_to_width(name, author_width),
            count,
        })
        .collect();

    let data = StatsData {
        empty: stats.total_books == 0,
        total_books: stats.total_books,
        read_books: stats.read_books,
        percent_label: format!("{}%", stats.percent_read()),
        charts,
        authors,
    };

    render_template(STATS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders every config key with its value.
pub fn render_config(config: &BookshelfConfig) -> String {
    render_config_internal(config, colors_supported())
}

fn render_config_internal(config: &BookshelfConfig, use_color: bool) -> String {
    let data = ConfigData {
        entries: config
            .entries()
            .into_iter()
            .map(|(key, value)| ConfigEntry { key, value })
            .collect(),
    };
    render_template(CONFIG_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, colors_supported())
}

fn render_messages_internal(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Prints command messages to stdout using the template system.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Builds a horizontal bar chart scaled so the largest count spans `width` cells.
fn bar_chart(title: &'static str, rows: Vec<(String, usize, &'static str)>, width: usize) -> Chart {
    let max = rows.iter().map(|(_, count, _)| *count).max().unwrap_or(0);
    let label_width = rows
        .iter()
        .map(|(label, _, _)| label.width())
        .max()
        .unwrap_or(0);

    let rows = rows
        .into_iter()
        .map(|(label, count, style)| ChartRow {
            label: pad_to_width(&label, label_width),
            bar: BAR_CHAR.repeat(bar_length(count, max, width)),
            count,
            style,
        })
        .collect();

    Chart { title, rows }
}

/// Cells for `count` when `max` fills `width`. Non-zero counts always get a cell.
fn bar_length(count: usize, max: usize, width: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    // u128 so `count * width` cannot overflow
    let (count, max, width) = (count as u128, max as u128, width as u128);
    let scaled = (count * width + max / 2) / max;
    scaled.clamp(1, width.max(1)) as usize
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
