//! Prisoner records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::crime::Crime;

/// Identifier assigned by the [`PopulationStore`](crate::store::PopulationStore).
/// Monotonic within a store and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrisonerId(pub u32);

impl fmt::Display for PrisonerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{:04}", self.0)
    }
}

/// One inmate. Immutable once created.
///
/// `block` is the block's name, a lookup key rather than a link; it is
/// validated against the known blocks whenever occupancy is recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prisoner {
    id: PrisonerId,
    name: String,
    risk_level: u8,
    block: String,
    cell: u32,
    crime: Crime,
}

impl Prisoner {
    pub(crate) fn new(
        id: PrisonerId,
        name: String,
        risk_level: u8,
        block: String,
        cell: u32,
        crime: Crime,
    ) -> Self {
        Self {
            id,
            name,
            risk_level,
            block,
            cell,
            crime,
        }
    }

    pub fn id(&self) -> PrisonerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn risk_level(&self) -> u8 {
        self.risk_level
    }

    pub fn block_name(&self) -> &str {
        &self.block
    }

    pub fn cell(&self) -> u32 {
        self.cell
    }

    pub fn crime(&self) -> Crime {
        self.crime
    }
}

impl fmt::Display for Prisoner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [ID: {}, Risk Level: {}, Block: {}, Cell: {}, Crime: {}]",
            self.name, self.id, self.risk_level, self.block, self.cell, self.crime
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_zero_padded() {
        assert_eq!(PrisonerId(7).to_string(), "P0007");
        assert_eq!(PrisonerId(12345).to_string(), "P12345");
    }

    #[test]
    fn display_lists_every_field() {
        let prisoner = Prisoner::new(
            PrisonerId(3),
            "Prisoner3".into(),
            2,
            "B".into(),
            17,
            Crime::Assault,
        );
        assert_eq!(
            prisoner.to_string(),
            "Prisoner3 [ID: P0003, Risk Level: 2, Block: B, Cell: 17, Crime: ASSAULT]"
        );
    }
}
