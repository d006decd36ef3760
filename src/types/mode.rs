//! Sampling temperature presets
//!
//! The completion API exposes exactly four named presets rather than a raw
//! float; each carries a fixed temperature and a stable label used for
//! user-facing selection.

use serde::{Serialize, Serializer};
use std::fmt;

/// Closed set of sampling presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMode {
    Fresh,
    Warmth,
    Balance,
    Creativity,
}

impl AiMode {
    /// All presets, in selection order
    pub const ALL: [AiMode; 4] = [
        AiMode::Fresh,
        AiMode::Warmth,
        AiMode::Balance,
        AiMode::Creativity,
    ];

    /// Sampling temperature sent on the wire
    pub fn temperature(self) -> f64 {
        match self {
            AiMode::Fresh => 0.1,
            AiMode::Warmth => 0.7,
            AiMode::Balance => 1.2,
            AiMode::Creativity => 1.7,
        }
    }

    /// Stable label used for user-facing selection
    pub fn label(self) -> &'static str {
        match self {
            AiMode::Fresh => "fresh",
            AiMode::Warmth => "warmth",
            AiMode::Balance => "balance",
            AiMode::Creativity => "creativity",
        }
    }

    /// Look up a preset by its label
    pub fn from_label(label: &str) -> Option<AiMode> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for AiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// On the wire the preset is its bare temperature value.
impl Serialize for AiMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.temperature())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_four_presets() {
        assert_eq!(AiMode::ALL.len(), 4);
    }

    #[test]
    fn test_fixed_temperatures() {
        assert_eq!(AiMode::Fresh.temperature(), 0.1);
        assert_eq!(AiMode::Warmth.temperature(), 0.7);
        assert_eq!(AiMode::Balance.temperature(), 1.2);
        assert_eq!(AiMode::Creativity.temperature(), 1.7);
    }

    #[test]
    fn test_label_round_trip() {
        for mode in AiMode::ALL {
            assert_eq!(AiMode::from_label(mode.label()), Some(mode));
        }
        assert_eq!(AiMode::from_label("Balance"), Some(AiMode::Balance));
        assert_eq!(AiMode::from_label("unknown"), None);
    }

    #[test]
    fn test_serializes_as_temperature() {
        let json = serde_json::to_value(AiMode::Balance).unwrap();
        assert_eq!(json, serde_json::json!(1.2));
    }
}
