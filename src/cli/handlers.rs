// src/cli/handlers.rs
use console::{style, Style};
use inquire::Password;

use crate::analysis::StrengthTier;
use crate::cli::clipboard::{ClipboardManager, SystemClipboard};
use crate::core::config::Config;
use crate::core::engine::{self, GenerationInput, GenerationReport};
use crate::error::{AppError, Result};
use crate::generators::PasswordGenerator;
use crate::models::{CharacterClass, PasswordGenerationOptions};

// Closest terminal color for each tier's hex color
fn tier_style(tier: StrengthTier) -> Style {
    match tier {
        StrengthTier::VeryWeak => Style::new().red().bold(),
        StrengthTier::Weak => Style::new().yellow().bold(),
        StrengthTier::Reasonable => Style::new().green(),
        StrengthTier::Strong => Style::new().green().bright().bold(),
        StrengthTier::VeryStrong => Style::new().cyan().bold(),
    }
}

pub fn render_report(report: &GenerationReport) -> String {
    let password = if report.password.is_empty() {
        style("(empty: enable at least one character class)").dim().to_string()
    } else {
        style(&report.password).bold().to_string()
    };

    format!(
        "Password:   {}\nEntropy:    {}\nCrack time: {}\nStrength:   {} ({})",
        password,
        report.entropy_display,
        report.crack_time_display,
        tier_style(report.tier).apply_to(report.strength_label),
        report.strength_color,
    )
}

pub fn print_reports(reports: &[GenerationReport], json: bool) -> Result<()> {
    if json {
        let out = match reports {
            [single] => serde_json::to_string_pretty(single)?,
            many => serde_json::to_string_pretty(many)?,
        };
        println!("{}", out);
    } else {
        let rendered: Vec<String> = reports.iter().map(render_report).collect();
        println!("{}", rendered.join("\n\n"));
    }
    Ok(())
}

/// Merge command line overrides with the configured defaults.
pub fn resolve_options(
    config: &Config,
    length: Option<usize>,
    classes: Option<Vec<CharacterClass>>,
) -> Result<PasswordGenerationOptions> {
    let mut options = config.default_options();

    if let Some(length) = length {
        if !config.length_in_bounds(length) {
            return Err(AppError::InvalidLength {
                length,
                min: config.min_password_length,
                max: config.max_password_length,
            });
        }
        options.length = length;
    }

    if let Some(mut classes) = classes {
        let mut seen = Vec::with_capacity(classes.len());
        classes.retain(|c| {
            let fresh = !seen.contains(c);
            seen.push(*c);
            fresh
        });
        options.classes = classes;
    }

    Ok(options)
}

pub fn handle_generate(
    config: &Config,
    length: Option<usize>,
    classes: Option<Vec<CharacterClass>>,
    count: usize,
    copy: bool,
    json: bool,
) -> Result<()> {
    let options = resolve_options(config, length, classes)?;
    log::info!(
        "Generating {} password(s) of length {} from [{}]",
        count,
        options.length,
        options
            .classes
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let reports: Vec<GenerationReport> = PasswordGenerator::new()
        .generate_batch(&options, count)
        .into_iter()
        .map(engine::analyze)
        .collect();

    print_reports(&reports, json)?;

    if copy {
        match reports.last() {
            Some(last) if !last.password.is_empty() => {
                copy_and_wait(ClipboardManager::system(config.clipboard_clear_after), &last.password)?
            }
            _ => eprintln!("{}", style("Nothing to copy").yellow()),
        }
    }

    Ok(())
}

/// Copy, then stay alive until the clipboard has been restored. Ctrl+C restores early.
fn copy_and_wait(mut clipboard: ClipboardManager<SystemClipboard>, password: &str) -> Result<()> {
    clipboard.copy(password)?;

    let Some(after) = clipboard.clear_after() else {
        eprintln!("{}", style("Copied to clipboard").green());
        return Ok(());
    };

    let handle = clipboard.handle();
    if let Err(e) = ctrlc::set_handler(move || {
        handle.restore_now();
        std::process::exit(130);
    }) {
        log::warn!("Could not install the Ctrl+C handler: {}", e);
    }

    eprintln!(
        "{} restoring it in {} seconds (Ctrl+C to restore now)",
        style("Copied to clipboard,").green(),
        after.as_secs()
    );
    clipboard.wait();
    Ok(())
}

pub fn handle_analyze(password: Option<String>, json: bool) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => Password::new("Password to analyze:")
            .with_display_mode(inquire::PasswordDisplayMode::Hidden)
            .without_confirmation()
            .prompt()?,
    };

    print_reports(&[engine::analyze(password)], json)
}

/// Recompute everything for the current selection.
pub fn recompute(options: &PasswordGenerationOptions) -> GenerationReport {
    engine::compute(&GenerationInput::from(options))
}
