//! Command handlers and shared fetch helpers.

pub mod config_cmd;
pub mod countries;
pub mod select;
pub mod show;

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use holidays_config::normalize_country_code;
use holidays_core::HolidayView;
use holidays_core::model::country;

use crate::cli::{Command, GlobalOpts};
use crate::config::Session;
use crate::error::CliError;

/// Route a network-backed command to its handler.
pub async fn dispatch(cmd: Command, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Countries => countries::handle(session, global).await,
        Command::Show(args) => show::handle(args, session, global).await,
        Command::Select(args) => select::handle(args, session, global).await,
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "command does not need a fetch session".into(),
        )),
    }
}

/// Spinner on stderr while a fetch runs; hidden when quiet or piped.
pub(crate) fn spinner(global: &GlobalOpts, message: &'static str) -> ProgressBar {
    if global.quiet || !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Run the startup sequence, then switch to `requested` if given.
///
/// `requested` must be in the loaded country list; switching persists it.
/// Returns once both resources have settled. Fails when the country list
/// itself could not be loaded.
pub(crate) async fn load_selection(
    session: &Session,
    requested: Option<&str>,
) -> Result<HolidayView, CliError> {
    let requested = requested.map(parse_country_code).transpose()?;
    let orchestrator = &session.orchestrator;

    orchestrator.start().ok_or_else(shut_down)?.await?;
    let view = orchestrator.view();
    blocked(&view)?;

    if let Some(code) = requested {
        if !country::contains(&view.countries, &code) {
            return Err(CliError::UnknownCountry { code });
        }
        if view.selected.as_deref() != Some(code.as_str()) {
            orchestrator
                .select_country(&code)
                .ok_or_else(shut_down)?
                .await?;
        }
    }

    Ok(orchestrator.view())
}

/// Nothing can be shown without a country list.
fn blocked(view: &HolidayView) -> Result<(), CliError> {
    if view.is_blocked() {
        return Err(CliError::CountriesUnavailable {
            message: view.errors.country.clone().unwrap_or_default(),
        });
    }
    Ok(())
}

pub(crate) fn parse_country_code(raw: &str) -> Result<String, CliError> {
    normalize_country_code(raw).ok_or_else(|| CliError::Validation {
        field: "country".into(),
        reason: format!("expected a two-letter ISO 3166-1 code, got '{raw}'"),
    })
}

fn shut_down() -> CliError {
    CliError::Internal("orchestrator is shut down".into())
}
