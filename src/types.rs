//! Shared types for the gistmarks application.
use std::path::PathBuf;

use clap::Subcommand;

use crate::GistError;

/// A specialized Result type for gistmarks operations.
pub type Result<T> = std::result::Result<T, GistError>;

/// Available subcommands for the gistmarks application
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a description into its text and hashtags
    Extract {
        /// Raw description, tags included
        text: String,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Count tags and categories across a gists file
    Count {
        /// JSON file with gist records (default uses config setting)
        #[clap(short, long)]
        file: Option<PathBuf>,

        /// Id of the viewing user, for the myGists counter
        #[clap(short, long)]
        owner: Option<String>,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// List the gists selected by a sidebar filter
    List {
        /// JSON file with gist records (default uses config setting)
        #[clap(short, long)]
        file: Option<PathBuf>,

        /// Id of the viewing user, for the myGists filter
        #[clap(short, long)]
        owner: Option<String>,

        /// Counter key to filter by: all, public, private, noTag, myGists,
        /// starred or a #tag
        #[clap(short = 'F', long, default_value = "all")]
        filter: String,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },
}
