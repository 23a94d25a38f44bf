//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::bookmark::{Bookmark, BookmarkStore};
use crate::cli::output::{
    OutputFormat, format_bookmark, format_bookmark_list, format_text, format_widget,
};
use crate::cli::parser::{BookmarkCommands, Cli, Commands};
use crate::core::{SizeClass, format as format_content};
use crate::error::{BookmarkError, CommandError, Result};
use crate::io::{FsReader, read_file};
use crate::widget::{create_widget, resolve_parameter};
use std::io::{self, Read};
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let store_path = cli.get_bookmarks_path();

    match &cli.command {
        Commands::Render { param, size } => {
            cmd_render(&store_path, param.as_deref(), size, format)
        }
        Commands::Format { file } => cmd_format(file.as_deref(), format),
        Commands::Bookmark(bookmark_cmd) => match bookmark_cmd {
            BookmarkCommands::Add { name, path } => {
                cmd_bookmark_add(&store_path, name, path, format)
            }
            BookmarkCommands::Remove { name } => cmd_bookmark_remove(&store_path, name, format),
            BookmarkCommands::List => cmd_bookmark_list(&store_path, format),
            BookmarkCommands::Show { name } => cmd_bookmark_show(&store_path, name, format),
        },
    }
}

// ==================== Command Implementations ====================

fn cmd_render(
    store_path: &Path,
    param: Option<&str>,
    size: &str,
    format: OutputFormat,
) -> Result<String> {
    let store = BookmarkStore::open(store_path)?;
    let bookmark = resolve_parameter(param);

    let family = parse_family(size)?;

    debug!(bookmark, ?family, "rendering widget");
    let widget = create_widget(&store, &FsReader, bookmark, family, SystemTime::now());
    Ok(format_widget(&widget, format))
}

/// Size name that selects the default font row.
const DEFAULT_FAMILY: &str = "default";

fn parse_family(size: &str) -> Result<Option<SizeClass>> {
    if size.trim().eq_ignore_ascii_case(DEFAULT_FAMILY) {
        return Ok(None);
    }
    SizeClass::parse(size).map(Some).ok_or_else(|| {
        CommandError::InvalidArgument(format!(
            "unknown size class: {size} (expected small, medium, large, extraLarge or default)"
        ))
        .into()
    })
}

fn cmd_format(file: Option<&Path>, format: OutputFormat) -> Result<String> {
    let raw = match file {
        Some(path) => read_file(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| CommandError::ExecutionFailed(format!("failed to read stdin: {e}")))?;
            buffer
        }
    };

    Ok(format_text(&format_content(&raw), format))
}

fn cmd_bookmark_add(
    store_path: &Path,
    name: &str,
    target: &Path,
    format: OutputFormat,
) -> Result<String> {
    let mut store = BookmarkStore::open(store_path)?;
    let previous = store.add(name, target)?;
    store.save()?;

    let bookmark = store
        .get(name)
        .ok_or_else(|| BookmarkError::NotFound {
            name: name.to_string(),
        })?;

    match format {
        OutputFormat::Text => {
            let verb = if previous.is_some() { "Updated" } else { "Added" };
            Ok(format!(
                "{verb} bookmark: {} -> {}\n",
                bookmark.name,
                bookmark.path.display()
            ))
        }
        OutputFormat::Json => Ok(format_bookmark(&bookmark, format)),
    }
}

fn cmd_bookmark_remove(store_path: &Path, name: &str, format: OutputFormat) -> Result<String> {
    let mut store = BookmarkStore::open(store_path)?;
    let path = store.remove(name)?;
    store.save()?;

    let removed = Bookmark {
        name: name.trim().to_string(),
        path,
    };
    match format {
        OutputFormat::Text => Ok(format!("Removed bookmark: {}\n", removed.name)),
        OutputFormat::Json => Ok(format_bookmark(&removed, format)),
    }
}

fn cmd_bookmark_list(store_path: &Path, format: OutputFormat) -> Result<String> {
    let store = BookmarkStore::open(store_path)?;
    Ok(format_bookmark_list(&store.list(), format))
}

fn cmd_bookmark_show(store_path: &Path, name: &str, format: OutputFormat) -> Result<String> {
    let store = BookmarkStore::open(store_path)?;
    let bookmark = store.get(name).ok_or_else(|| BookmarkError::NotFound {
        name: name.to_string(),
    })?;
    Ok(format_bookmark(&bookmark, format))
}
