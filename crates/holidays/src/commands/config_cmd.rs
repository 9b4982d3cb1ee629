//! Config subcommand handlers.

use std::path::PathBuf;

use dialoguer::{Input, Select};
use serde::Serialize;

use holidays_config::{SECONDARY_API_KEY_ENV, normalize_country_code};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

const REDACTED: &str = "****";

// ── Helpers ─────────────────────────────────────────────────────────

/// Copy of `cfg` safe to print.
fn redacted(cfg: &Config) -> Config {
    let mut cfg = cfg.clone();
    if cfg.secondary.api_key.is_some() {
        cfg.secondary.api_key = Some(REDACTED.into());
    }
    cfg
}

/// Format config for display, TOML-style.
fn format_config(cfg: &Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    let _ = writeln!(out, "default_country = \"{}\"", cfg.default_country);
    if let Some(year) = cfg.year {
        let _ = writeln!(out, "year = {year}");
    }
    let _ = writeln!(out, "timeout_secs = {}", cfg.timeout_secs);
    let _ = writeln!(
        out,
        "preferences_file = \"{}\"",
        cfg.preferences_path().display()
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "[primary]");
    let _ = writeln!(out, "base_url = \"{}\"", cfg.primary.base_url);

    let _ = writeln!(out);
    let _ = writeln!(out, "[secondary]");
    let _ = writeln!(out, "base_url = \"{}\"", cfg.secondary.base_url);
    if let Some(ref key) = cfg.secondary.api_key {
        let _ = writeln!(out, "api_key = \"{key}\"");
    }
    if let Some(ref env) = cfg.secondary.api_key_env {
        let _ = writeln!(out, "api_key_env = \"{env}\"");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "[retry]");
    let _ = writeln!(out, "max_retries = {}", cfg.retry.max_retries);
    let _ = write!(out, "delay_ms = {}", cfg.retry.delay_ms);

    out
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

#[derive(Serialize)]
struct ConfigPaths {
    config: PathBuf,
    preferences: PathBuf,
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global),

        ConfigCommand::Show => {
            let cfg = redacted(&config::resolve(global)?);
            let out = output::render_single(&global.output, &cfg, format_config, |c| {
                c.default_country.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            let config_path = config::config_path(global);
            let cfg = config::load_config_or_default(Some(config_path.as_path()));
            let paths = ConfigPaths {
                preferences: cfg.preferences_path(),
                config: config_path,
            };
            let out = output::render_single(
                &global.output,
                &paths,
                |p| {
                    format!(
                        "config:      {}\npreferences: {}",
                        p.config.display(),
                        p.preferences.display()
                    )
                },
                |p| p.config.display().to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

// ── Init: interactive wizard ────────────────────────────────────────

fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let config_path = config::config_path(global);
    eprintln!("✨ holidays -- configuration wizard");
    eprintln!("   Config path: {}\n", config_path.display());

    // Start from whatever is already there so unrelated settings survive.
    let mut cfg = config::load_config_or_default(Some(config_path.as_path()));

    // 1. Default country
    let country: String = Input::new()
        .with_prompt("Default country (ISO 3166-1 alpha-2)")
        .default(cfg.default_country.clone())
        .validate_with(|input: &String| -> Result<(), &str> {
            normalize_country_code(input)
                .map(|_| ())
                .ok_or("expected a two-letter code such as US or DE")
        })
        .interact_text()
        .map_err(prompt_err)?;
    cfg.default_country = normalize_country_code(&country).unwrap_or(country);

    // 2. Fallback provider key
    let key_choices = &[
        "Read from an environment variable (recommended)",
        "Save to config file (plaintext)",
        "Skip (Nager.Date only, no fallback provider)",
    ];
    let key_selection = Select::new()
        .with_prompt("Calendarific API key for the fallback provider")
        .items(key_choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    match key_selection {
        0 => {
            let env_name: String = Input::new()
                .with_prompt("Environment variable name")
                .default(SECONDARY_API_KEY_ENV.into())
                .interact_text()
                .map_err(prompt_err)?;
            cfg.secondary.api_key = None;
            cfg.secondary.api_key_env = Some(env_name);
        }
        1 => {
            let key = rpassword::prompt_password("API key: ").map_err(prompt_err)?;
            if key.trim().is_empty() {
                return Err(CliError::Validation {
                    field: "api_key".into(),
                    reason: "API key cannot be empty".into(),
                });
            }
            cfg.secondary.api_key = Some(key.trim().to_owned());
            cfg.secondary.api_key_env = None;
        }
        _ => {
            cfg.secondary.api_key = None;
            cfg.secondary.api_key_env = None;
        }
    }

    // 3. Write config
    let written = config::save_config(&cfg, Some(config_path.as_path()))?;

    eprintln!("\n✓ Configuration written to {}", written.display());
    eprintln!("  Default country: {}", cfg.default_country);
    eprintln!("\n  Try it: holidays show");

    Ok(())
}
