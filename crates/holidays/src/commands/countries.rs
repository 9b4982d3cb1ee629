//! Countries command handler.

use tabled::Tabled;

use holidays_core::Country;

use crate::cli::GlobalOpts;
use crate::config::Session;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct CountryRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Selected")]
    selected: &'static str,
}

fn to_row(country: &Country, selected: &str) -> CountryRow {
    CountryRow {
        code: country.iso_code.clone(),
        name: country.name.clone(),
        selected: if country.iso_code == selected { "*" } else { "" },
    }
}

/// List countries. Falls back to the built-in table when the provider is
/// unavailable, so this never fails on network errors.
pub async fn handle(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let spinner = super::spinner(global, "Loading countries...");
    let countries = session
        .orchestrator
        .coordinator()
        .list_countries_with_fallback()
        .await;
    spinner.finish_and_clear();

    let selected = session.stored_country();
    let out = output::render_list(
        &global.output,
        &countries,
        |c| to_row(c, &selected),
        |c| c.iso_code.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
