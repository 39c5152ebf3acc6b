// src/core/engine.rs
use serde::{Deserialize, Serialize};

use crate::analysis::{self, StrengthTier, TierDisplay};
use crate::generators::PasswordGenerator;
use crate::models::{CharacterClass, PasswordGenerationOptions, Stats};
use crate::utils::{format_crack_time, format_entropy};

/// What the user currently has selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationInput {
    pub length: usize,
    pub classes: Vec<CharacterClass>,
}

impl From<&PasswordGenerationOptions> for GenerationInput {
    fn from(options: &PasswordGenerationOptions) -> Self {
        Self {
            length: options.length,
            classes: options.classes.clone(),
        }
    }
}

/// Everything the front end needs to render one password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    pub password: String,
    pub entropy_bits: f64,
    pub entropy_display: String,
    pub crack_time_seconds: f64,
    pub crack_time_display: String,
    pub tier: StrengthTier,
    pub strength_label: &'static str,
    pub strength_color: &'static str,
}

impl GenerationReport {
    fn build(password: String, stats: Stats) -> Self {
        let tier = analysis::determine(stats.entropy_bits);
        let TierDisplay { label, color } = analysis::get_color_and_text(stats.entropy_bits);
        Self {
            password,
            entropy_bits: stats.entropy_bits,
            entropy_display: format_entropy(stats.entropy_bits),
            crack_time_seconds: stats.crack_time_seconds,
            crack_time_display: format_crack_time(stats.crack_time_seconds),
            tier,
            strength_label: label,
            strength_color: color,
        }
    }
}

/// Generate a fresh password for `input` and rate it.
pub fn compute(input: &GenerationInput) -> GenerationReport {
    let password = PasswordGenerator::new().generate(&input.classes, input.length);
    analyze(password)
}

/// Rate an existing password without generating anything.
pub fn analyze(password: impl Into<String>) -> GenerationReport {
    let password = password.into();
    let stats = analysis::calculate(&password);
    let report = GenerationReport::build(password, stats);

    log::debug!(
        "Rated password: {:.2} bits, tier {} ({})",
        report.entropy_bits,
        report.tier.index(),
        report.strength_label
    );
    report
}
