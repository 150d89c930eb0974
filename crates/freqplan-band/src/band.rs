//! # Band — Registered Regulatory Bands
//!
//! Each variant names a regional frequency allocation profile. The
//! identifier strings are the ones frequency plan documents use in their
//! `band` key and must never change once published.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::UnknownBandError;

/// A regulatory band known to the registry.
///
/// | Identifier | Region |
/// |------------|--------|
/// | `EU_863_870` | Europe, 863–870 MHz |
/// | `US_902_928` | United States, 902–928 MHz |
/// | `CN_779_787` | China, 779–787 MHz |
/// | `EU_433` | Europe, 433 MHz |
/// | `AU_915_928` | Australia, 915–928 MHz |
/// | `CN_470_510` | China, 470–510 MHz |
/// | `AS_923` | Asia, 923 MHz |
/// | `KR_920_923` | South Korea, 920–923 MHz |
/// | `IN_865_867` | India, 865–867 MHz |
/// | `RU_864_870` | Russia, 864–870 MHz |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Band {
    /// Europe 863–870 MHz.
    #[serde(rename = "EU_863_870")]
    Eu863870,
    /// United States 902–928 MHz.
    #[serde(rename = "US_902_928")]
    Us902928,
    /// China 779–787 MHz.
    #[serde(rename = "CN_779_787")]
    Cn779787,
    /// Europe 433 MHz.
    #[serde(rename = "EU_433")]
    Eu433,
    /// Australia 915–928 MHz.
    #[serde(rename = "AU_915_928")]
    Au915928,
    /// China 470–510 MHz.
    #[serde(rename = "CN_470_510")]
    Cn470510,
    /// Asia 923 MHz.
    #[serde(rename = "AS_923")]
    As923,
    /// South Korea 920–923 MHz.
    #[serde(rename = "KR_920_923")]
    Kr920923,
    /// India 865–867 MHz.
    #[serde(rename = "IN_865_867")]
    In865867,
    /// Russia 864–870 MHz.
    #[serde(rename = "RU_864_870")]
    Ru864870,
}

impl Band {
    /// Returns every registered band in registry order.
    pub fn all() -> &'static [Band] {
        &[
            Self::Eu863870,
            Self::Us902928,
            Self::Cn779787,
            Self::Eu433,
            Self::Au915928,
            Self::Cn470510,
            Self::As923,
            Self::Kr920923,
            Self::In865867,
            Self::Ru864870,
        ]
    }

    /// Returns the canonical identifier used in frequency plan documents.
    ///
    /// Must match the serde rename on each variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eu863870 => "EU_863_870",
            Self::Us902928 => "US_902_928",
            Self::Cn779787 => "CN_779_787",
            Self::Eu433 => "EU_433",
            Self::Au915928 => "AU_915_928",
            Self::Cn470510 => "CN_470_510",
            Self::As923 => "AS_923",
            Self::Kr920923 => "KR_920_923",
            Self::In865867 => "IN_865_867",
            Self::Ru864870 => "RU_864_870",
        }
    }

    /// Human-readable region label, for diagnostics only.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Eu863870 => "Europe 863-870 MHz",
            Self::Us902928 => "United States 902-928 MHz",
            Self::Cn779787 => "China 779-787 MHz",
            Self::Eu433 => "Europe 433 MHz",
            Self::Au915928 => "Australia 915-928 MHz",
            Self::Cn470510 => "China 470-510 MHz",
            Self::As923 => "Asia 923 MHz",
            Self::Kr920923 => "South Korea 920-923 MHz",
            Self::In865867 => "India 865-867 MHz",
            Self::Ru864870 => "Russia 864-870 MHz",
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Band {
    type Err = UnknownBandError;

    /// Parse a band from its canonical identifier. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|band| band.as_str() == s)
            .ok_or_else(|| UnknownBandError(s.to_string()))
    }
}
