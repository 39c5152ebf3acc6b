// src/analysis/tier.rs
use serde::{Deserialize, Serialize};

/// Qualitative rating, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Reasonable,
    Strong,
    VeryStrong,
}

// (upper bound in bits, tier); anything at or above the last bound is VeryStrong
const THRESHOLDS: [(f64, StrengthTier); 4] = [
    (28.0, StrengthTier::VeryWeak),
    (36.0, StrengthTier::Weak),
    (60.0, StrengthTier::Reasonable),
    (128.0, StrengthTier::Strong),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierDisplay {
    pub label: &'static str,
    pub color: &'static str,
}

impl StrengthTier {
    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "Very Weak",
            StrengthTier::Weak => "Weak",
            StrengthTier::Reasonable => "Reasonable",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "#A10702",
            StrengthTier::Weak => "#F3A712",
            StrengthTier::Reasonable => "#8CD867",
            StrengthTier::Strong => "#04E762",
            StrengthTier::VeryStrong => "#0C7489",
        }
    }

    pub fn display(&self) -> TierDisplay {
        TierDisplay {
            label: self.label(),
            color: self.color(),
        }
    }
}

pub fn determine(entropy_bits: f64) -> StrengthTier {
    if entropy_bits.is_nan() {
        return StrengthTier::VeryWeak;
    }

    THRESHOLDS
        .iter()
        .find(|(bound, _)| entropy_bits < *bound)
        .map(|(_, tier)| *tier)
        .unwrap_or(StrengthTier::VeryStrong)
}

pub fn get_color_and_text(entropy_bits: f64) -> TierDisplay {
    determine(entropy_bits).display()
}
