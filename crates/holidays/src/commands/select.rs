//! Select command handler.

use crate::cli::{GlobalOpts, SelectArgs};
use crate::config::Session;
use crate::error::CliError;

/// Validate `code` against the loaded country list and remember it.
pub async fn handle(args: SelectArgs, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let spinner = super::spinner(global, "Loading countries...");
    let view = super::load_selection(session, Some(&args.code)).await;
    spinner.finish_and_clear();
    let view = view?;

    if let Some(ref message) = view.errors.holiday {
        tracing::warn!(%message, "selection saved, but its holidays could not be loaded");
    }
    if !global.quiet {
        eprintln!(
            "✓ Selected {} ({})",
            view.selected_country_name(),
            view.selected.as_deref().unwrap_or_default()
        );
    }
    Ok(())
}
