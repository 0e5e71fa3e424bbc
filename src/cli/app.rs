//! CLI module for the gistmarks application
//!
//! This module turns parsed commands into calls on the extraction,
//! counting and filtering code and prints the results.
use std::path::PathBuf;

use console::style;
use log::{debug, info};

use crate::{
    extract_tags, load_gists_from_file, Category, Commands, Config, ExtractedDescription, Gist,
    GistFilter, Result, TagCounts,
};

/// CLI Application handler - processes CLI commands
pub struct App {
    /// Application configuration
    config: Config,

    /// Whether to display verbose output
    verbose: bool,
}

impl App {
    /// Create a new CLI application with the given config
    pub fn new(config: Config, verbose: bool) -> Self {
        if !config.color {
            console::set_colors_enabled(false);
        }
        Self { config, verbose }
    }

    /// Run the CLI application with the given command
    pub fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Extract { text, json } => self.handle_extract(&text, json)?,

            Commands::Count { file, owner, json } => self.handle_count(file, owner, json)?,

            Commands::List {
                file,
                owner,
                filter,
                json,
            } => self.handle_list(file, owner, &filter, json)?,
        }

        Ok(())
    }

    fn handle_extract(&self, text: &str, json: bool) -> Result<()> {
        let extracted = extract_tags(text);

        if json {
            println!("{}", serde_json::to_string_pretty(&extracted)?);
        } else {
            print!("{}", render_extracted(&extracted));
        }
        Ok(())
    }

    fn handle_count(&self, file: Option<PathBuf>, owner: Option<String>, json: bool) -> Result<()> {
        let gists = self.load(file)?;
        let owner_id = self.config.resolve_owner(owner);

        let counts = TagCounts::from_gists(&gists, &owner_id);

        if json {
            println!("{}", serde_json::to_string_pretty(&counts)?);
        } else {
            print!("{}", render_counts(&counts));
        }
        Ok(())
    }

    fn handle_list(
        &self,
        file: Option<PathBuf>,
        owner: Option<String>,
        filter: &str,
        json: bool,
    ) -> Result<()> {
        let filter: GistFilter = filter.parse()?;
        let gists = self.load(file)?;
        let owner_id = self.config.resolve_owner(owner);

        let selected = filter.apply(&gists, &owner_id);
        debug!("Filter {} selected {} of {} gists", filter, selected.len(), gists.len());

        if json {
            println!("{}", serde_json::to_string_pretty(&selected)?);
            return Ok(());
        }

        if selected.is_empty() {
            println!("No gists found matching {}.", filter);
            return Ok(());
        }

        let term_width = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(80);
        print!("{}", render_gists(&selected, term_width, self.verbose));

        println!(
            "\nFound {} gist{}",
            selected.len(),
            if selected.len() == 1 { "" } else { "s" }
        );
        Ok(())
    }

    fn load(&self, file: Option<PathBuf>) -> Result<Vec<Gist>> {
        let path = self.config.resolve_gists_file(file)?;
        if self.verbose {
            info!("Reading gists from {}", path.display());
        }
        load_gists_from_file(&path)
    }
}

/// Text rendering of an extracted description
pub fn render_extracted(extracted: &ExtractedDescription) -> String {
    let mut out = format!("Description: {}\n", extracted.description);
    if !extracted.tags.is_empty() {
        out.push_str(&format!(
            "Tags: {}\n",
            style(extracted.tags.join(" ")).cyan()
        ));
    }
    out
}

/// Text rendering of the sidebar: categories first, then tags in
/// first-seen order
pub fn render_counts(counts: &TagCounts) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        out.push_str(&format!(
            "{:<10} {}\n",
            category.key(),
            counts.categories().get(category)
        ));
    }
    if !counts.tags().is_empty() {
        out.push('\n');
        for tag in counts.tags() {
            out.push_str(&format!("{} {}\n", style(&tag.name).cyan(), tag.count));
        }
    }
    out
}

/// Text rendering of a gist listing
pub fn render_gists(gists: &[&Gist], term_width: usize, detailed: bool) -> String {
    let mut out = String::new();

    for (i, gist) in gists.iter().enumerate() {
        // Add separator between gists (except before the first)
        if i > 0 {
            out.push_str(&"-".repeat(term_width.min(50)));
            out.push('\n');
        }

        let visibility = if gist.is_public() { "public" } else { "private" };
        let star = if gist.is_starred() { " *" } else { "" };
        out.push_str(&format!(
            "ID: {} | {}{} | Updated: {}\n",
            gist.id(),
            visibility,
            star,
            gist.updated_at()
        ));

        if !gist.description().is_empty() {
            out.push_str(&format!("{}\n", style(gist.description()).bold()));
        }

        if !gist.tags().is_empty() {
            out.push_str(&format!("Tags: {}\n", style(gist.tags().join(" ")).cyan()));
        }

        if detailed {
            if let Some(login) = &gist.owner().login {
                out.push_str(&format!("Owner: {}\n", login));
            }
            if !gist.files().is_empty() {
                let names: Vec<&str> = gist.files().keys().map(String::as_str).collect();
                out.push_str(&format!("Files: {}\n", names.join(", ")));
            }
            if !gist.html_url().is_empty() {
                out.push_str(&format!("{}\n", gist.html_url()));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{count_tags, Owner};

    fn plain() {
        console::set_colors_enabled(false);
    }

    #[test]
    fn renders_extraction() {
        plain();
        let text = render_extracted(&extract_tags("Sample #todo #urgent text"));

        assert_eq!(text, "Description: Sample   text\nTags: #todo #urgent\n");
    }

    #[test]
    fn renders_counts_in_order() {
        plain();
        let mut gist = Gist::new("1");
        gist.set_owner(Owner::new("me"));
        gist.set_description_and_tags("#b #a");
        gist.set_is_public(true);

        let text = render_counts(&count_tags(&[gist], "me"));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "public     1");
        assert_eq!(lines[4], "myGists    1");
        assert_eq!(&lines[7..], ["#b 1", "#a 1"]);
    }

    #[test]
    fn renders_gist_listing() {
        plain();
        let mut first = Gist::new("g1");
        first.set_description_and_tags("Hello #demo");
        first.set_is_public(true);
        first.set_is_starred(true);
        first.set_updated_at("2020-01-02T03:04:05Z").unwrap();
        let second = Gist::new("g2");

        let text = render_gists(&[&first, &second], 20, false);

        assert_eq!(
            text,
            "ID: g1 | public * | Updated: 2020-01-02 03:04:05\n\
             Hello\n\
             Tags: #demo\n\
             --------------------\n\
             ID: g2 | private | Updated: \n"
        );
    }
}
