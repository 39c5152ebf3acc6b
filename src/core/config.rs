// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;

use crate::models::{parse_class_list, CharacterClass, PasswordGenerationOptions};

// Configuration for the generator front ends
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub min_password_length: usize,
    pub max_password_length: usize,
    pub default_classes: Vec<CharacterClass>,

    // Clipboard
    pub clipboard_clear_after: Option<Duration>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Problems found while loading, logged once the logger is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            min_password_length: 1,
            max_password_length: 128,
            default_classes: CharacterClass::ALL.to_vec(),

            // Clipboard
            clipboard_clear_after: Some(Duration::from_secs(30)),

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    fn parse_value<T: FromStr>(&mut self, key: &str, raw: &str) -> Option<T> {
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.warnings
                    .push(format!("Ignoring invalid value '{}' for {}", raw, key));
                None
            }
        }
    }

    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("MIN_PASSWORD_LENGTH") {
            if let Some(min) = config.parse_value("MIN_PASSWORD_LENGTH", &val) {
                config.min_password_length = min;
            }
        }

        if let Some(val) = lookup("MAX_PASSWORD_LENGTH") {
            if let Some(max) = config.parse_value("MAX_PASSWORD_LENGTH", &val) {
                config.max_password_length = max;
            }
        }

        if config.min_password_length > config.max_password_length {
            let warning = format!(
                "MIN_PASSWORD_LENGTH ({}) is above MAX_PASSWORD_LENGTH ({}), swapping them",
                config.min_password_length, config.max_password_length
            );
            config.warnings.push(warning);
            std::mem::swap(&mut config.min_password_length, &mut config.max_password_length);
        }

        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            if let Some(length) = config.parse_value("DEFAULT_PASSWORD_LENGTH", &val) {
                config.default_password_length = length;
            }
        }
        config.default_password_length = config.clamp_length(config.default_password_length);

        if let Some(val) = lookup("DEFAULT_CHARACTER_CLASSES") {
            match parse_class_list(&val) {
                Ok(classes) => config.default_classes = classes,
                Err(e) => config
                    .warnings
                    .push(format!("Ignoring DEFAULT_CHARACTER_CLASSES: {}", e)),
            }
        }

        // Clipboard
        if let Some(val) = lookup("CLIPBOARD_CLEAR_SECONDS") {
            if let Some(secs) = config.parse_value::<u64>("CLIPBOARD_CLEAR_SECONDS", &val) {
                config.clipboard_clear_after = if secs == 0 {
                    None
                } else {
                    Some(Duration::from_secs(secs))
                };
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {
                    let warning = format!("Unknown log level '{}', keeping {}", level, config.log_level);
                    config.warnings.push(warning);
                }
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    pub fn clamp_length(&self, length: usize) -> usize {
        length.clamp(self.min_password_length, self.max_password_length)
    }

    pub fn length_in_bounds(&self, length: usize) -> bool {
        (self.min_password_length..=self.max_password_length).contains(&length)
    }

    pub fn default_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.default_password_length,
            classes: self.default_classes.clone(),
        }
    }
}
