//! Riot staffing — guards needed for a combined risk level.
//!
//! One guard controls [`RISK_PER_GUARD`] points of combined prisoner risk,
//! rounded up:
//!
//! ```
//! use prisonsim_logic::riot::guards_needed;
//!
//! assert_eq!(guards_needed(4), 1);
//! assert_eq!(guards_needed(5), 2);
//! assert_eq!(guards_needed(144), 36);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::riot::{DAYS_SINCE_LAST_RIOT, LAST_RIOT_RISK_LEVEL, RISK_PER_GUARD};
use crate::store::PopulationStore;

/// Guards required to control a riot with the given combined risk.
pub const fn guards_needed(risk_sum: u32) -> u32 {
    risk_sum.div_ceil(RISK_PER_GUARD)
}

/// A past riot, kept as fixed history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiotRecord {
    pub days_since: u32,
    pub risk_level: u32,
}

impl RiotRecord {
    pub const fn guards_needed(&self) -> u32 {
        guards_needed(self.risk_level)
    }
}

/// The most recent riot on record.
pub const LAST_RIOT: RiotRecord = RiotRecord {
    days_since: DAYS_SINCE_LAST_RIOT,
    risk_level: LAST_RIOT_RISK_LEVEL,
};

/// Staffing estimate for a riot involving the whole current population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiotAssessment {
    pub risk_level: u32,
    pub guards_needed: u32,
}

pub fn assess_current(store: &PopulationStore) -> RiotAssessment {
    let risk_level = store.total_risk_level();
    RiotAssessment {
        risk_level,
        guards_needed: guards_needed(risk_level),
    }
}
