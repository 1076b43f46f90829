//! Prison — the run-wide simulation state.
//!
//! Bundles the [`PopulationStore`] and the [`IntakePolicy`] and exposes
//! every report the menu asks for. Created once at startup and owned by
//! the driver for the rest of the run.
//!
//! ```
//! use prisonsim_logic::prison::Prison;
//! use prisonsim_logic::random::RngSource;
//!
//! let mut rng = RngSource::seeded(1);
//! let mut prison = Prison::generate(&mut rng);
//! assert_eq!(prison.max_capacity(), 120);
//!
//! let incoming = prison.incoming_count(&mut rng);
//! assert!(incoming <= prison.max_capacity() - prison.total_population());
//! ```

use serde::{Deserialize, Serialize};

use crate::block::{BlockId, BlockOccupancy};
use crate::constants::MAX_CAPACITY;
use crate::error::Result;
use crate::generation::generate_initial_population;
use crate::intake::{AssignOutcome, IntakePolicy, IntakeState};
use crate::random::RandomSource;
use crate::riot::{self, RiotAssessment, RiotRecord, LAST_RIOT};
use crate::store::{PopulationStore, RecomputeReport};

/// Occupancy of one block for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStatus {
    pub block: BlockId,
    pub occupancy: u32,
    pub max_cells: u32,
}

/// Serializable summary of the prison at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrisonSnapshot {
    pub max_capacity: u32,
    pub population: u32,
    pub blocks: Vec<BlockStatus>,
    pub total_risk_level: u32,
    pub guards_needed: u32,
    pub intake: IntakeState,
    pub last_riot: RiotRecord,
}

#[derive(Debug, Clone, Default)]
pub struct Prison {
    store: PopulationStore,
    intake: IntakePolicy,
}

impl Prison {
    /// An empty prison with no prisoners.
    pub fn new() -> Self {
        Self::default()
    }

    /// A prison with a freshly generated startup population.
    pub fn generate(rng: &mut impl RandomSource) -> Self {
        let mut prison = Self::new();
        generate_initial_population(&mut prison.store, rng);
        prison
    }

    /// Wrap an existing store; intake starts from scratch.
    pub fn from_store(store: PopulationStore) -> Self {
        Self {
            store,
            intake: IntakePolicy::new(),
        }
    }

    pub fn store(&self) -> &PopulationStore {
        &self.store
    }

    pub fn intake_state(&self) -> IntakeState {
        self.intake.state()
    }

    pub fn is_intake_assigned(&self) -> bool {
        self.intake.is_assigned()
    }

    pub const fn max_capacity(&self) -> u32 {
        MAX_CAPACITY
    }

    pub fn total_population(&self) -> u32 {
        self.store.total_population()
    }

    /// Rebuild block counts from the prisoner list and report them.
    pub fn block_counts(&mut self) -> RecomputeReport {
        self.store.recompute_block_counts()
    }

    pub fn occupancy(&self) -> BlockOccupancy {
        self.store.occupancy()
    }

    /// Size of this run's arrival batch (drawn on first call).
    pub fn incoming_count(&mut self, rng: &mut impl RandomSource) -> u32 {
        self.intake.calculate_incoming_count(&self.store, rng)
    }

    /// Place this run's arrivals.
    pub fn place_incoming(&mut self, rng: &mut impl RandomSource) -> Result<AssignOutcome> {
        self.intake.assign_incoming(&mut self.store, rng)
    }

    pub fn last_riot(&self) -> RiotRecord {
        LAST_RIOT
    }

    /// Guards needed for an arbitrary combined risk level.
    pub fn guards_needed(&self, risk_sum: u32) -> u32 {
        riot::guards_needed(risk_sum)
    }

    /// Risk and staffing for a riot involving everyone currently held.
    pub fn current_riot(&self) -> RiotAssessment {
        riot::assess_current(&self.store)
    }

    pub fn snapshot(&self) -> PrisonSnapshot {
        let occupancy = self.store.occupancy();
        let current = self.current_riot();
        PrisonSnapshot {
            max_capacity: MAX_CAPACITY,
            population: self.store.total_population(),
            blocks: occupancy
                .iter()
                .map(|(block, count)| BlockStatus {
                    block,
                    occupancy: count,
                    max_cells: block.max_cells(),
                })
                .collect(),
            total_risk_level: current.risk_level,
            guards_needed: current.guards_needed,
            intake: self.intake.state(),
            last_riot: LAST_RIOT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;

    #[test]
    fn generated_prison_is_consistent() {
        let mut prison = Prison::generate(&mut RngSource::seeded(17));
        let report = prison.block_counts();
        assert!(report.is_consistent());
        assert_eq!(report.occupancy.total(), prison.total_population());
        assert!(prison.total_population() >= 75);
        assert!(prison.total_population() <= 120);
    }

    #[test]
    fn incoming_fits_remaining_capacity() {
        for seed in 0..30 {
            let mut rng = RngSource::seeded(seed);
            let mut prison = Prison::generate(&mut rng);
            let remaining = prison.max_capacity() - prison.total_population();
            let incoming = prison.incoming_count(&mut rng);
            if remaining == 0 {
                assert_eq!(incoming, 0);
            } else {
                assert!((1..=remaining).contains(&incoming));
            }
        }
    }

    #[test]
    fn intake_flow_moves_through_states() {
        let mut rng = RngSource::seeded(2);
        let mut prison = Prison::generate(&mut rng);
        assert_eq!(prison.intake_state(), IntakeState::NotCalculated);

        let incoming = prison.incoming_count(&mut rng);
        assert_eq!(prison.intake_state(), IntakeState::Calculated { incoming });

        let before = prison.total_population();
        let AssignOutcome::Completed(report) = prison.place_incoming(&mut rng).unwrap() else {
            panic!("first placement should complete");
        };
        assert_eq!(
            prison.total_population(),
            before + report.placed_count() as u32
        );
        assert!(prison.is_intake_assigned());
        assert_eq!(
            prison.place_incoming(&mut rng).unwrap(),
            AssignOutcome::AlreadyAssigned
        );
        assert_eq!(prison.incoming_count(&mut rng), incoming);
    }

    #[test]
    fn blocks_never_exceed_cells_after_intake() {
        for seed in 0..30 {
            let mut rng = RngSource::seeded(seed);
            let mut prison = Prison::generate(&mut rng);
            prison.place_incoming(&mut rng).unwrap();
            let report = prison.block_counts();
            for (block, count) in report.occupancy.iter() {
                assert!(count <= block.max_cells());
            }
            assert_eq!(report.occupancy.total(), prison.total_population());
        }
    }

    #[test]
    fn riot_figures() {
        let prison = Prison::from_store(PopulationStore::new());
        assert_eq!(prison.last_riot().days_since, 224);
        assert_eq!(prison.guards_needed(prison.last_riot().risk_level), 36);
        assert_eq!(prison.current_riot().guards_needed, 0);
    }

    #[test]
    fn snapshot_serializes() {
        let prison = Prison::generate(&mut RngSource::seeded(3));
        let snapshot = prison.snapshot();
        assert_eq!(snapshot.blocks.len(), 3);
        assert_eq!(
            snapshot.blocks.iter().map(|b| b.occupancy).sum::<u32>(),
            snapshot.population
        );

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["max_capacity"], 120);
        assert_eq!(json["intake"]["state"], "not_calculated");
        assert_eq!(json["blocks"][2]["block"], "C");
        assert_eq!(json["last_riot"]["risk_level"], 144);
    }
}
