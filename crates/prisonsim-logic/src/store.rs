//! Population store — the authoritative prisoner list and block occupancy.
//!
//! The prisoner list is the source of truth. Block occupancy is kept in
//! step on every insert and can be rebuilt from the list at any time with
//! [`PopulationStore::recompute_block_counts`], which doubles as a
//! consistency check.
//!
//! The store does not enforce capacity policy; that belongs to
//! [`crate::intake`]. It does enforce the occupancy invariant: a counter
//! never exceeds its block's cells, and anything that would push it past is
//! reported instead of recorded.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::block::{BlockId, BlockOccupancy};
use crate::constants::MAX_CAPACITY;
use crate::crime::Crime;
use crate::prisoner::{Prisoner, PrisonerId};

/// A prisoner whose block name matched no known block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownBlockRef {
    pub prisoner: PrisonerId,
    pub block_name: String,
}

/// Outcome of rebuilding block occupancy from the prisoner list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecomputeReport {
    pub occupancy: BlockOccupancy,
    /// Prisoners that could not be counted against any block.
    pub unknown_blocks: Vec<UnknownBlockRef>,
    /// Prisoners beyond a block's cell count.
    pub over_capacity: Vec<PrisonerId>,
}

impl RecomputeReport {
    /// True when every prisoner was counted against a block.
    pub fn is_consistent(&self) -> bool {
        self.unknown_blocks.is_empty() && self.over_capacity.is_empty()
    }
}

/// Owns every prisoner and the per-block occupancy counters.
#[derive(Debug, Clone, Default)]
pub struct PopulationStore {
    prisoners: Vec<Prisoner>,
    occupancy: BlockOccupancy,
    next_id: u32,
}

impl PopulationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a prisoner and count them against `block_name`.
    ///
    /// Never fails. An unknown block name or a full block is logged and
    /// leaves the counters untouched; the prisoner is still recorded.
    pub fn add_prisoner(
        &mut self,
        name: impl Into<String>,
        risk_level: u8,
        block_name: &str,
        cell: u32,
        crime: Crime,
    ) -> PrisonerId {
        self.next_id += 1;
        let id = PrisonerId(self.next_id);
        let prisoner = Prisoner::new(
            id,
            name.into(),
            risk_level,
            block_name.to_string(),
            cell,
            crime,
        );

        match block_name.parse::<BlockId>() {
            Ok(block) => {
                if !self.occupancy.increment(block) {
                    warn!(prisoner = %id, block = %block, "block over capacity, occupancy not counted");
                }
            }
            Err(err) => warn!(prisoner = %id, %err, "prisoner added with unknown block"),
        }

        debug!(prisoner = %prisoner, "prisoner added");
        self.prisoners.push(prisoner);
        id
    }

    /// Reset every block counter, then recount from the prisoner list.
    ///
    /// Idempotent. Prisoners that cannot be counted are returned in the
    /// report and logged.
    pub fn recompute_block_counts(&mut self) -> RecomputeReport {
        self.occupancy.reset();
        let mut report = RecomputeReport::default();

        for prisoner in &self.prisoners {
            match prisoner.block_name().parse::<BlockId>() {
                Ok(block) => {
                    if !self.occupancy.increment(block) {
                        warn!(prisoner = %prisoner, "prisoner exceeds block capacity");
                        report.over_capacity.push(prisoner.id());
                    }
                }
                Err(_) => {
                    warn!(prisoner = %prisoner, "unknown block for prisoner");
                    report.unknown_blocks.push(UnknownBlockRef {
                        prisoner: prisoner.id(),
                        block_name: prisoner.block_name().to_string(),
                    });
                }
            }
        }

        report.occupancy = self.occupancy;
        debug!(
            listed = self.prisoners.len(),
            counted = self.occupancy.total(),
            "block counts recomputed"
        );
        report
    }

    pub fn total_population(&self) -> u32 {
        self.prisoners.len() as u32
    }

    /// Sum of every prisoner's risk level.
    pub fn total_risk_level(&self) -> u32 {
        self.prisoners.iter().map(|p| u32::from(p.risk_level())).sum()
    }

    /// Free places under the facility-wide cap; zero once at or over it.
    pub fn remaining_capacity(&self) -> u32 {
        MAX_CAPACITY.saturating_sub(self.total_population())
    }

    pub fn occupancy(&self) -> BlockOccupancy {
        self.occupancy
    }

    pub fn block_count(&self, block: BlockId) -> u32 {
        self.occupancy.get(block)
    }

    pub fn has_room(&self, block: BlockId) -> bool {
        self.occupancy.has_room(block)
    }

    /// Prisoners in insertion order.
    pub fn prisoners(&self) -> &[Prisoner] {
        &self.prisoners
    }

    pub fn get(&self, id: PrisonerId) -> Option<&Prisoner> {
        self.prisoners.iter().find(|p| p.id() == id)
    }

    /// Prisoners whose block name is `block`.
    pub fn prisoners_in(&self, block: BlockId) -> impl Iterator<Item = &Prisoner> {
        self.prisoners
            .iter()
            .filter(move |p| p.block_name() == block.name())
    }

    /// Display name for the next prisoner: `prefix` followed by
    /// `population + 1`.
    pub fn next_name(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.prisoners.len() + 1)
    }
}
