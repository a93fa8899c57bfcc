//! # CLI Layer
//!
//! This module is **one possible UI client** for bookshelf. It is the only place that
//! knows about terminal I/O, argument parsing and formatting for humans.
//!
//! ## Flow
//!
//! 1. Parse arguments with clap (`setup.rs`)
//! 2. Install logging and resolve the data directory
//! 3. Load settings; `config` and `init` run here, before the library is read, so a
//!    bad setting can always be fixed from the command line
//! 4. Open the library as a `BookshelfApi` and call the method the command maps to
//! 5. Render the returned `CmdResult` (`render.rs`)
//!
//! Errors bubble up to `main.rs`, which prints them and exits non-zero. Handlers do
//! not re-check business rules; that is the command layer's job.

use super::render::{print_messages, render_books, render_config, render_stats};
use super::setup::{Cli, Commands, LibraryCommands, SetupCommands};
use bookshelf::api::{BookshelfApi, ConfigAction, SettingsApi};
use bookshelf::error::Result;
use bookshelf::init::{load_settings, open_library, resolve_data_dir};
use bookshelf::logging::init_logging;
use bookshelf::model::SearchField;
use bookshelf::store::fs::FileStore;
use clap::Parser;
use tracing::debug;

type Api = BookshelfApi<FileStore>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(cli.dir.as_deref())?;
    debug!(dir = %data_dir.display(), "Using data directory");
    let settings = load_settings(data_dir)?;

    match cli.command {
        Some(Commands::Setup(cmd)) => match cmd {
            SetupCommands::Config { key, value } => handle_config(&settings, key, value),
            SetupCommands::Init => handle_init(&settings),
        },
        Some(Commands::Library(cmd)) => run_library_command(open_library(settings)?, cmd),
        None => handle_list(&open_library(settings)?),
    }
}

fn run_library_command(mut api: Api, cmd: LibraryCommands) -> Result<()> {
    match cmd {
        LibraryCommands::Add {
            title,
            author,
            year,
            genre,
            read,
        } => handle_add(&mut api, title.join(" "), author, year, genre, read),
        LibraryCommands::Remove { title } => handle_remove(&mut api, &title.join(" ")),
        LibraryCommands::List => handle_list(&api),
        LibraryCommands::Search { term, by } => handle_search(&api, &term, by.into()),
        LibraryCommands::Stats => handle_stats(&api),
    }
}

fn handle_add(
    api: &mut Api,
    title: String,
    author: String,
    year: u16,
    genre: String,
    read: bool,
) -> Result<()> {
    let result = api.add_book(author, title, year, genre, read)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(api: &mut Api, title: &str) -> Result<()> {
    let result = api.remove_book(title)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &Api) -> Result<()> {
    let result = api.load_library()?;
    let output = render_books(
        &result.listed_books,
        "No books yet. Add one with `bookshelf add`.",
    );
    print!("{}", output);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(api: &Api, term: &str, field: SearchField) -> Result<()> {
    let result = api.search_books(term, field)?;
    if !result.listed_books.is_empty() {
        print!("{}", render_books(&result.listed_books, ""));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(api: &Api) -> Result<()> {
    let result = api.compute_stats()?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats, api.settings()));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(settings: &SettingsApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = settings.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(settings: &SettingsApi) -> Result<()> {
    let result = settings.init()?;
    print_messages(&result.messages);
    Ok(())
}
