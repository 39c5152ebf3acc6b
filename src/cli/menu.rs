// src/cli/menu.rs
use inquire::validator::Validation;
use inquire::error::InquireResult;
use inquire::{CustomUserError, InquireError, MultiSelect, Select, Text};

use crate::cli::clipboard::ClipboardManager;
use crate::cli::handlers::{print_reports, recompute, render_report};
use crate::core::config::Config;
use crate::error::Result;
use crate::models::{CharacterClass, PasswordGenerationOptions};

const CHANGE_LENGTH: &str = "📏  Change length";
const CHANGE_CLASSES: &str = "🔤  Choose character classes";
const REGENERATE: &str = "🔄  Regenerate";
const COPY: &str = "📋  Copy to clipboard";
const QUIT: &str = "🚪  Quit";

/// Esc or Ctrl+C in a sub-prompt means "keep what I had".
fn cancelled_as_none<T>(answer: InquireResult<T>) -> Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn prompt_length(config: &Config, current: usize) -> Result<Option<usize>> {
    let min = config.min_password_length;
    let max = config.max_password_length;

    let answer: InquireResult<usize> = Text::new(&format!("Password length ({min}-{max}):"))
        .with_default(&current.to_string())
        .with_validator(move |input: &str| -> std::result::Result<Validation, CustomUserError> {
            match input.trim().parse::<usize>() {
                Ok(n) if (min..=max).contains(&n) => Ok(Validation::Valid),
                _ => Ok(Validation::Invalid(
                    format!("Enter a whole number between {min} and {max}").into(),
                )),
            }
        })
        .prompt()
        .and_then(|s| {
            s.trim()
                .parse()
                .map_err(|_| InquireError::Custom("Invalid number".into()))
        });

    cancelled_as_none(answer)
}

fn prompt_classes(current: &PasswordGenerationOptions) -> Result<Option<Vec<CharacterClass>>> {
    let defaults: Vec<usize> = CharacterClass::ALL
        .iter()
        .enumerate()
        .filter(|(_, class)| current.is_enabled(**class))
        .map(|(i, _)| i)
        .collect();

    let answer = MultiSelect::new("Character classes:", CharacterClass::ALL.to_vec())
        .with_default(&defaults)
        .prompt();

    cancelled_as_none(answer)
}

/// Every change of length or classes immediately produces and shows a new password.
pub fn run_cli_menu(config: &Config, json: bool) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🔐 PASSFORGE GENERATOR        ║");
    println!("╚══════════════════════════════════════╝");

    let mut options = config.default_options();
    let mut report = recompute(&options);
    // Dropping it on the way out restores anything still pending
    let mut clipboard = ClipboardManager::system(config.clipboard_clear_after);

    loop {
        if json {
            print_reports(std::slice::from_ref(&report), true)?;
        } else {
            println!("\n{}\n", render_report(&report));
        }

        let choice = match Select::new(
            "What next?",
            vec![CHANGE_LENGTH, CHANGE_CLASSES, REGENERATE, COPY, QUIT],
        )
        .prompt()
        {
            Ok(choice) => choice,
            // Esc or Ctrl+C at the main menu leaves quietly
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match choice {
            CHANGE_LENGTH => {
                if let Some(length) = prompt_length(config, options.length)? {
                    options.length = length;
                    report = recompute(&options);
                }
            }
            CHANGE_CLASSES => {
                let Some(selected) = prompt_classes(&options)? else {
                    continue;
                };
                options = CharacterClass::ALL
                    .iter()
                    .fold(options, |opts, class| {
                        opts.with_class_enabled(*class, selected.contains(class))
                    });
                report = recompute(&options);
            }
            REGENERATE => {
                report = recompute(&options);
            }
            COPY => {
                if report.password.is_empty() {
                    println!("❌ Nothing to copy, enable at least one character class.");
                } else {
                    match clipboard.copy(&report.password) {
                        Ok(()) => match clipboard.clear_after() {
                            Some(after) => println!(
                                "✅ Copied! The clipboard is restored in {} seconds.",
                                after.as_secs()
                            ),
                            None => println!("✅ Copied!"),
                        },
                        Err(e) => println!("❌ {}", e),
                    }
                }
            }
            _ => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_sub_prompt_keeps_current_value() {
        assert_eq!(cancelled_as_none::<usize>(Err(InquireError::OperationCanceled)).unwrap(), None);
        assert_eq!(
            cancelled_as_none::<usize>(Err(InquireError::OperationInterrupted)).unwrap(),
            None
        );
        assert_eq!(cancelled_as_none(Ok(24usize)).unwrap(), Some(24));
    }

    #[test]
    fn other_prompt_failures_still_propagate() {
        let err = cancelled_as_none::<usize>(Err(InquireError::NotTTY)).unwrap_err();
        assert!(matches!(err, crate::error::AppError::Prompt(InquireError::NotTTY)));
    }
}
