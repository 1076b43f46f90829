//! Crimes and their fixed risk levels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

/// The offence a prisoner was convicted of. Each crime carries a fixed
/// risk level that drives block placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Crime {
    Theft,
    Assault,
    Murder,
}

impl Crime {
    /// Every crime, in ascending risk order.
    pub const ALL: [Crime; 3] = [Crime::Theft, Crime::Assault, Crime::Murder];

    /// Risk level on the 1–3 scale.
    pub const fn risk_level(self) -> u8 {
        match self {
            Crime::Theft => 1,
            Crime::Assault => 2,
            Crime::Murder => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Crime::Theft => "THEFT",
            Crime::Assault => "ASSAULT",
            Crime::Murder => "MURDER",
        }
    }

    /// Draw a crime uniformly over all variants.
    pub fn random(rng: &mut impl RandomSource) -> Self {
        Self::ALL[rng.pick(Self::ALL.len())]
    }
}

impl fmt::Display for Crime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
