use bookshelf::model::SearchField;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookshelf", bin_name = "bookshelf", version)]
#[command(about = "Keep track of the books on your shelf", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $BOOKSHELF_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Field a search matches against.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SearchBy {
    #[default]
    Title,
    Author,
    Genre,
}

impl From<SearchBy> for SearchField {
    fn from(by: SearchBy) -> Self {
        match by {
            SearchBy::Title => SearchField::Title,
            SearchBy::Author => SearchField::Author,
            SearchBy::Genre => SearchField::Genre,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Library(LibraryCommands),

    #[command(flatten)]
    Setup(SetupCommands),
}

/// Commands that read or change the library.
#[derive(Subcommand, Debug)]
pub enum LibraryCommands {
    /// Add a book to the library
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Author of the book
        #[arg(long)]
        author: String,

        /// Year of publication
        #[arg(long, value_name = "YEAR")]
        year: u16,

        /// Genre, free text
        #[arg(long, default_value = "")]
        genre: String,

        /// Mark the book as already read
        #[arg(long)]
        read: bool,
    },

    /// Remove every book with exactly this title
    #[command(alias = "rm", display_order = 2)]
    Remove {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// List all books
    #[command(alias = "ls", display_order = 3)]
    List,

    /// Search books by title, author or genre
    #[command(display_order = 4)]
    Search {
        /// Text to look for, case-insensitive
        term: String,

        /// Field to search
        #[arg(long, value_enum, default_value_t = SearchBy::Title)]
        by: SearchBy,
    },

    /// Show library statistics
    #[command(display_order = 5)]
    Stats,
}

/// Commands on the data directory. They never read the library file.
#[derive(Subcommand, Debug)]
pub enum SetupCommands {
    /// Get or set configuration
    #[command(display_order = 10)]
    Config {
        /// Configuration key (e.g., top-authors)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory and an empty library
    #[command(display_order = 11)]
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bookshelf").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_collects_title_words() {
        let cli = parse(&[
            "add", "The", "Left", "Hand", "--author", "Le Guin", "--year", "1969", "--read",
        ]);
        match cli.command {
            Some(Commands::Library(LibraryCommands::Add {
                title,
                author,
                year,
                genre,
                read,
            })) => {
                assert_eq!(title.join(" "), "The Left Hand");
                assert_eq!(author, "Le Guin");
                assert_eq!(year, 1969);
                assert_eq!(genre, "");
                assert!(read);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn add_requires_author_and_year() {
        let args = ["bookshelf", "add", "Dune"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn aliases_resolve() {
        assert!(matches!(
            parse(&["ls"]).command,
            Some(Commands::Library(LibraryCommands::List))
        ));
        assert!(matches!(
            parse(&["rm", "Dune"]).command,
            Some(Commands::Library(LibraryCommands::Remove { .. }))
        ));
    }

    #[test]
    fn search_defaults_to_title() {
        match parse(&["search", "dune"]).command {
            Some(Commands::Library(LibraryCommands::Search { term, by })) => {
                assert_eq!(term, "dune");
                assert_eq!(SearchField::from(by), SearchField::Title);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        match parse(&["search", "herb", "--by", "author"]).command {
            Some(Commands::Library(LibraryCommands::Search { by, .. })) => {
                assert_eq!(by, SearchBy::Author)
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = parse(&["stats", "--dir", "/tmp/shelf", "-v"]);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/shelf")));
        assert!(cli.verbose);
    }

    #[test]
    fn config_and_init_are_setup_commands() {
        assert!(matches!(
            parse(&["config", "top-authors", "3"]).command,
            Some(Commands::Setup(SetupCommands::Config { .. }))
        ));
        assert!(matches!(
            parse(&["init"]).command,
            Some(Commands::Setup(SetupCommands::Init))
        ));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        assert!(parse(&[]).command.is_none());
    }
}
