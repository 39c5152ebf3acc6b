// src/analysis/mod.rs
pub mod estimator;
pub mod tier;

pub use estimator::calculate;
pub use tier::{determine, get_color_and_text, StrengthTier, TierDisplay};
