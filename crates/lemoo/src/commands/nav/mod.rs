//! `lemoo nav` subcommand group.

mod generate;
mod show;

use std::path::Path;

use clap::Subcommand;

use generate::GenerateArgs;
use show::ShowArgs;

use crate::error::CliError;

/// Navigation tree commands.
#[derive(Subcommand)]
pub(crate) enum NavCommand {
    /// Print the navigation tree and where it came from.
    Show(ShowArgs),
    /// Derive the navigation tree from registered pages and save it.
    Generate(GenerateArgs),
}

impl NavCommand {
    /// Execute the nav subcommand.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        match self {
            Self::Show(args) => args.execute(config_path),
            Self::Generate(args) => args.execute(config_path),
        }
    }
}
