// src/domain/password.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Five-level password strength vocabulary backing the signup form's
/// strength meter. Estimators report a score in `0..=4`; this type gives
/// each score its display label and meter colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    pub fn from_score(score: u8) -> DomainResult<Self> {
        match score {
            0 => Ok(Self::VeryWeak),
            1 => Ok(Self::Weak),
            2 => Ok(Self::Fair),
            3 => Ok(Self::Good),
            4 => Ok(Self::Strong),
            other => Err(DomainError::Validation(format!(
                "strength score {other} is outside 0..=4"
            ))),
        }
    }

    pub fn score(self) -> u8 {
        match self {
            Self::VeryWeak => 0,
            Self::Weak => 1,
            Self::Fair => 2,
            Self::Good => 3,
            Self::Strong => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very weak",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    /// Colour the meter renders the level with (Tailwind 600-series hexes,
    /// red through green).
    pub fn color(self) -> &'static str {
        match self {
            Self::VeryWeak => "#dc2626",
            Self::Weak => "#ea580c",
            Self::Fair => "#ca8a04",
            Self::Good => "#65a30d",
            Self::Strong => "#16a34a",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::VeryWeak => "very-weak",
            Self::Weak => "weak",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PasswordStrength {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "very-weak" => Ok(Self::VeryWeak),
            "weak" => Ok(Self::Weak),
            "fair" => Ok(Self::Fair),
            "good" => Ok(Self::Good),
            "strong" => Ok(Self::Strong),
            other => Err(DomainError::Validation(format!(
                "unknown strength level '{other}'"
            ))),
        }
    }
}
