use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "todoz",
    bin_name = "todoz",
    version,
    about = "A small to-do list for the terminal",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the user-wide list instead of the project's .todoz/
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an item
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Item text (words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// List items
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Toggle items between done and not done
    #[command(aliases = ["t", "done"], display_order = 3)]
    Toggle {
        /// Row numbers (e.g. 1 3 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Start editing an item
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// Row number
        index: String,
    },

    /// Save the text of an item being edited
    #[command(alias = "s", display_order = 5)]
    Save {
        /// Row number
        index: String,

        /// New text (words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete items
    #[command(alias = "rm", display_order = 6)]
    Delete {
        /// Row numbers (e.g. 1 3 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Move an item onto another row's position
    #[command(alias = "mv", display_order = 7)]
    Move {
        /// Row to move
        from: String,

        /// Row whose position it takes
        to: String,
    },

    /// Rewrite the whole order (every row exactly once)
    #[command(display_order = 8)]
    Reorder {
        /// Row numbers in their new order
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Show or set configuration
    #[command(display_order = 20)]
    Config {
        /// Config key (storage-key, line-width)
        key: Option<String>,

        /// New value
        value: Option<String>,
    },
}
