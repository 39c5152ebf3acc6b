// src/cli/commands.rs
use clap::Subcommand;

use crate::models::CharacterClass;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        /// Password length (defaults to DEFAULT_PASSWORD_LENGTH)
        #[arg(long, short)]
        length: Option<usize>,

        /// Comma separated classes: lowercase, uppercase, digit, symbol
        #[arg(long, short, value_delimiter = ',')]
        classes: Option<Vec<CharacterClass>>,

        /// Number of passwords to generate
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,

        /// Copy the (last) generated password to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Estimate the strength of an existing password
    Analyze {
        /// Password to rate. A password given here ends up in shell history and
        /// `ps` output; omit it to be prompted with hidden input instead
        password: Option<String>,
    },

    /// Adjust length and classes interactively
    Interactive,
}
