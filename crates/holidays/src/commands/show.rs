//! Show command: holidays for the active selection, grouped by month.

use std::fmt::Write;

use serde::Serialize;

use holidays_core::{Holiday, HolidayView, MonthGroup};

use crate::cli::{GlobalOpts, ShowArgs};
use crate::config::Session;
use crate::error::CliError;
use crate::output::{self, Painter};

/// What `show` prints: the selection and its holidays, sorted by start date.
#[derive(Debug, Serialize)]
struct HolidayReport {
    code: String,
    country: String,
    year: i32,
    holidays: Vec<Holiday>,
    #[serde(skip)]
    months: Vec<MonthGroup>,
}

impl HolidayReport {
    fn from_view(view: HolidayView) -> Self {
        let country = view.selected_country_name().to_owned();
        let months = view.holidays_by_month();
        Self {
            code: view.selected.unwrap_or_default(),
            country,
            year: view.year,
            holidays: view.holidays,
            months,
        }
    }
}

pub async fn handle(args: ShowArgs, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let spinner = super::spinner(global, "Loading holidays...");
    let view = super::load_selection(session, args.code.as_deref()).await;
    spinner.finish_and_clear();
    let view = view?;

    // Scoped to holidays; the country list is still usable.
    if let Some(message) = view.errors.holiday.clone() {
        return Err(CliError::HolidaysUnavailable { message });
    }

    let report = HolidayReport::from_view(view);
    let painter = Painter::new(&global.color);
    let out = output::render_single(
        &global.output,
        &report,
        |r| render_calendar(r, painter),
        render_plain,
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Rendering ───────────────────────────────────────────────────────

const DATE_WIDTH: usize = 22;

fn date_label(holiday: &Holiday) -> String {
    let start = holiday.start_date.format("%a %d %b").to_string();
    if holiday.is_multi_day() {
        format!("{start} - {}", holiday.end_date.format("%a %d %b"))
    } else {
        start
    }
}

fn scope_label(holiday: &Holiday) -> String {
    if holiday.nationwide {
        "Nationwide".into()
    } else if holiday.regions.is_empty() {
        "Regional".into()
    } else {
        let regions: Vec<&str> = holiday.regions.iter().map(String::as_str).collect();
        format!("Regional: {}", regions.join(", "))
    }
}

fn render_calendar(report: &HolidayReport, painter: Painter) -> String {
    let mut out = String::new();
    let title = format!(
        "Public holidays in {} ({}), {}",
        report.country, report.code, report.year
    );
    let _ = writeln!(out, "{}", painter.heading(&title));

    if report.holidays.is_empty() {
        let _ = write!(
            out,
            "\nNo holidays found for {} in {}.",
            report.country, report.year
        );
        return out;
    }

    let indent = " ".repeat(DATE_WIDTH + 2);
    for group in &report.months {
        let _ = writeln!(out, "\n{}", painter.heading(group.month.name()));
        for holiday in &group.holidays {
            let _ = writeln!(
                out,
                "  {:<width$}{}",
                date_label(holiday),
                painter.accent(&holiday.name),
                width = DATE_WIDTH
            );

            let details: Vec<String> = holiday
                .kind
                .iter()
                .cloned()
                .chain(std::iter::once(scope_label(holiday)))
                .collect();
            let _ = writeln!(out, "{indent}{}", painter.dim(&details.join(" · ")));

            if let Some(ref comment) = holiday.comment {
                let _ = writeln!(out, "{indent}{}", painter.dim(comment));
            }
        }
    }

    out.trim_end().to_owned()
}

/// One holiday per line: `date<TAB>name`, ranges as `start..end`.
fn render_plain(report: &HolidayReport) -> String {
    report
        .holidays
        .iter()
        .map(|h| {
            if h.is_multi_day() {
                format!("{}..{}\t{}", h.start_date, h.end_date, h.name)
            } else {
                format!("{}\t{}", h.start_date, h.name)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
