// src/models.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = r#"!@#$%^&*()-_=+[]{};:'",.<>/?\|~`"#;

/// One of the four fixed alphabets a password can be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Canonical order, used whenever classes are toggled on.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// Every character of the class, in insertion order.
    pub fn all(&self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown character class '{0}' (expected lowercase, uppercase, digit or symbol)")]
pub struct ParseClassError(pub String);

impl FromStr for CharacterClass {
    type Err = ParseClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lowercase" | "lower" => Ok(CharacterClass::Lowercase),
            "uppercase" | "upper" => Ok(CharacterClass::Uppercase),
            "digit" | "digits" | "number" | "numbers" => Ok(CharacterClass::Digit),
            "symbol" | "symbols" => Ok(CharacterClass::Symbol),
            _ => Err(ParseClassError(s.to_string())),
        }
    }
}

/// Parse a comma separated list such as `lower,digit`. Blank entries are skipped.
pub fn parse_class_list(list: &str) -> Result<Vec<CharacterClass>, ParseClassError> {
    let mut classes = Vec::new();
    for part in list.split(',').filter(|s| !s.trim().is_empty()) {
        let class: CharacterClass = part.parse()?;
        if !classes.contains(&class) {
            classes.push(class);
        }
    }
    Ok(classes)
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub classes: Vec<CharacterClass>,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            classes: CharacterClass::ALL.to_vec(),
        }
    }
}

impl PasswordGenerationOptions {
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.classes.contains(&class)
    }

    /// Enable or disable a class, keeping the canonical class order.
    pub fn with_class_enabled(mut self, class: CharacterClass, enabled: bool) -> Self {
        self.classes = CharacterClass::ALL
            .iter()
            .copied()
            .filter(|c| if *c == class { enabled } else { self.classes.contains(c) })
            .collect();
        self
    }
}

/// Entropy and crack time derived from a password's content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub entropy_bits: f64,
    pub crack_time_seconds: f64,
}
