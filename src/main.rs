//! Voyagr CLI application entry point
//!
//! This is the main executable for the voyagr travel recommendation browser.
//! It fetches a JSON dataset from a configurable endpoint, filters it by a
//! substring query, and presents the matches either interactively (one card
//! at a time with prev/next navigation) or as a one-shot listing.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command); press / to search
//! voyagr
//! voyagr browse beach
//!
//! # One-shot search
//! voyagr search temple
//!
//! # Point at a different endpoint for this run
//! voyagr --url http://localhost:9000/data.json search beach
//!
//! # Persist settings
//! voyagr config set endpoint=http://localhost:9000/data.json
//! voyagr config get endpoint
//!
//! # Quiet mode (only output result titles)
//! voyagr -q search beach
//! ```
//!
//! # Configuration
//!
//! Settings are stored in the user's config directory
//! (`~/.config/voyagr/config.toml` on Linux).

use colored::Colorize;
use voyagr::{
    VoyagrError,
    browse::BrowseController,
    cli::{Cli, Commands, ConfigCommands},
    config::VoyagrConfig,
    dataset::{DataSource, HttpSource},
    search,
    ui::{KeyEvents, TerminalRenderer},
};

type Result<T> = std::result::Result<T, VoyagrError>;

/// Handle the browse command - interactive card browser
///
/// Runs the event loop until the user quits. A fetch failure during any
/// search is logged and absorbed by the controller; the loop keeps running.
///
/// # Errors
///
/// Returns `VoyagrError` if rendering or key input fails.
fn handle_browse_command(source: HttpSource, query: Option<String>, quiet: bool) -> Result<()> {
    if !quiet {
        println!("Browsing recommendations from {}", source.endpoint());
        println!("Keys: [/] search  [n]/[→] next  [p]/[←] prev  [r] reset  [q] quit");
    }

    let renderer = TerminalRenderer::new(quiet);
    let mut controller = BrowseController::new(source, renderer, KeyEvents::new());
    controller.run(query.as_deref())?;
    Ok(())
}

/// Handle the search command - one-shot listing of all matches
///
/// Fetches, filters, and prints the flattened result list in category order
/// (beaches, cities, temples). A failed fetch is logged to stderr and
/// absorbed; the command exits without output rather than propagating.
///
/// # Errors
///
/// This handler itself does not fail; the signature matches the other
/// handlers for uniform dispatch.
fn handle_search_command(source: &HttpSource, query: &str, quiet: bool) -> Result<()> {
    let dataset = match source.fetch() {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("{} {e}", "Error fetching recommendations:".red());
            return Ok(());
        }
    };

    let items = search::filter(&dataset, query).flatten();

    if items.is_empty() {
        if !quiet {
            println!("No destinations matching '{query}'");
        }
        return Ok(());
    }

    if !quiet {
        println!("Found {} destination(s) matching '{query}':", items.len());
    }

    for item in &items {
        if quiet {
            println!("{}", item.title());
            continue;
        }
        match item.country_name() {
            Some(country) => println!("  {} ({country})", item.title()),
            None => println!("  {}", item.title()),
        }
        println!("    {}", item.description());
        println!("    {}", item.image_url().dimmed());
    }

    Ok(())
}

/// Handle the config command - manage application settings
///
/// # Errors
///
/// Returns `VoyagrError` if the key is unknown, value parsing fails, or
/// saving the configuration fails.
fn handle_config_command(
    mut config: VoyagrConfig,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let parts: Vec<&str> = setting.splitn(2, '=').collect();
            if parts.len() != 2 {
                return Err(VoyagrError::InvalidInput(
                    "Invalid format. Use: voyagr config set key=value".into(),
                ));
            }

            let key = parts[0].trim();
            let value = parts[1].trim();

            match key {
                "endpoint" => {
                    config.endpoint = value.to_string();
                    config.save()?;
                    if !quiet {
                        println!("Set endpoint = {value}");
                    }
                }
                "quiet" => {
                    let new_value = value.parse::<bool>().map_err(|_| {
                        VoyagrError::InvalidInput(format!(
                            "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                        ))
                    })?;
                    config.quiet = new_value;
                    config.save()?;
                    if !quiet {
                        println!("Set quiet = {new_value}");
                    }
                }
                _ => {
                    return Err(VoyagrError::InvalidInput(format!(
                        "Unknown configuration key: '{key}'. Available keys: endpoint, quiet"
                    )));
                }
            }
        }
        ConfigCommands::Get { key } => match key.as_str() {
            "endpoint" => println!("{}", config.endpoint),
            "quiet" => println!("{}", config.quiet),
            _ => {
                return Err(VoyagrError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: endpoint, quiet"
                )));
            }
        },
    }
    Ok(())
}

/// Main entry point for the voyagr application
///
/// Loads configuration, parses command-line arguments, and dispatches to
/// the appropriate command handler.
///
/// # Errors
///
/// Returns `VoyagrError` if configuration loading fails or any command
/// handler returns an error.
fn main() -> Result<()> {
    let config = VoyagrConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;
    let endpoint = cli.url.clone().unwrap_or_else(|| config.endpoint.clone());

    match cli.get_command() {
        Commands::Browse { query } => {
            handle_browse_command(HttpSource::new(endpoint), query, quiet)?;
        }
        Commands::Search { query } => {
            handle_search_command(&HttpSource::new(endpoint), &query, quiet)?;
        }
        Commands::Config { command } => {
            handle_config_command(config, &command, quiet)?;
        }
    }

    Ok(())
}
