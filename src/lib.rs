//! Gist hashtag library
//!
//! This library splits gist descriptions into free text and `#tags`, and
//! counts tags and sidebar categories across a collection of gists.

mod cli;
mod config;
mod counts;
mod date;
mod errors;
mod filter;
mod helper;
mod note;
mod tags;
mod types;

// Re-export key components
pub use cli::*;
pub use config::*;
pub use counts::*;
pub use date::*;
pub use errors::*;
pub use filter::*;
pub use helper::*;
pub use note::*;
pub use tags::*;
pub use types::*;
