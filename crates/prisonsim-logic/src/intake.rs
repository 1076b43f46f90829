//! Intake policy — sizing an arrival batch and placing each arrival.
//!
//! # Lifecycle
//!
//! ```text
//! NotCalculated ──size query / assign──▶ Calculated ──assign──▶ Assigned
//! ```
//!
//! The batch size is drawn once and reused. Assignment happens once; a
//! second request is answered with [`AssignOutcome::AlreadyAssigned`] and
//! places nobody.
//!
//! # Placement
//!
//! Each arrival's crime sets a risk level, and the risk level picks the
//! intended block (1 → A, 2 → B, 3 → C). If that block is full the arrival
//! tries the block's [fallbacks](crate::block::BlockId::fallbacks) in order
//! and, if placed there, is flagged as a risk mismatch. With no room
//! anywhere the arrival is a placement failure and must be transferred;
//! the rest of the batch carries on.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::block::{BlockId, BlockOccupancy};
use crate::constants::names;
use crate::crime::Crime;
use crate::error::Result;
use crate::prisoner::PrisonerId;
use crate::random::RandomSource;
use crate::store::PopulationStore;

/// Where the intake workflow stands for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum IntakeState {
    #[default]
    NotCalculated,
    Calculated { incoming: u32 },
    Assigned { incoming: u32 },
}

/// What happened to one arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlacementOutcome {
    /// Placed in the intended block.
    Placed {
        prisoner: PrisonerId,
        block: BlockId,
        cell: u32,
    },
    /// Intended block was full; placed in a lower-security block instead.
    RiskMismatch {
        prisoner: PrisonerId,
        block: BlockId,
        cell: u32,
    },
    /// No block had room. No record was created; transfer required.
    PlacementFailure,
}

/// One arrival and its placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrival {
    pub name: String,
    pub crime: Crime,
    pub risk_level: u8,
    pub intended: BlockId,
    pub outcome: PlacementOutcome,
}

impl Arrival {
    /// The block the arrival ended up in, if any.
    pub fn block(&self) -> Option<BlockId> {
        match self.outcome {
            PlacementOutcome::Placed { block, .. } | PlacementOutcome::RiskMismatch { block, .. } => {
                Some(block)
            }
            PlacementOutcome::PlacementFailure => None,
        }
    }

    pub fn is_placed(&self) -> bool {
        self.block().is_some()
    }
}

/// Result of placing a full batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeReport {
    pub incoming: u32,
    pub arrivals: Vec<Arrival>,
    pub population_after: u32,
    pub occupancy_after: BlockOccupancy,
}

impl IntakeReport {
    pub fn placed_count(&self) -> usize {
        self.arrivals.iter().filter(|a| a.is_placed()).count()
    }

    pub fn mismatch_count(&self) -> usize {
        self.arrivals
            .iter()
            .filter(|a| matches!(a.outcome, PlacementOutcome::RiskMismatch { .. }))
            .count()
    }

    pub fn failure_count(&self) -> usize {
        self.arrivals.len() - self.placed_count()
    }
}

/// Answer to an assignment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    Completed(IntakeReport),
    /// The batch was already placed earlier in this run.
    AlreadyAssigned,
}

/// Draw a batch size in `1..=remaining_capacity`.
///
/// A prison with no remaining capacity receives nobody, and nothing is
/// drawn from the random source.
pub fn incoming_count_for(remaining_capacity: u32, rng: &mut impl RandomSource) -> u32 {
    if remaining_capacity == 0 {
        return 0;
    }
    rng.roll(1, remaining_capacity)
}

/// Place one arrival with a known crime.
pub fn place_arrival(
    store: &mut PopulationStore,
    crime: Crime,
    rng: &mut impl RandomSource,
) -> Result<Arrival> {
    let name = store.next_name(names::INTAKE_PREFIX);
    let risk_level = crime.risk_level();
    let intended = BlockId::for_risk_level(risk_level)?;

    let target = if store.has_room(intended) {
        Some((intended, false))
    } else {
        intended
            .fallbacks()
            .iter()
            .copied()
            .find(|block| store.has_room(*block))
            .map(|block| (block, true))
    };

    let outcome = match target {
        Some((block, mismatch)) => {
            let cell = rng.roll(1, block.max_cells());
            let prisoner = store.add_prisoner(name.as_str(), risk_level, block.name(), cell, crime);
            if mismatch {
                warn!(
                    %name, %crime, %intended, assigned = %block,
                    "arrival reassigned to a block that does not match its risk level"
                );
                PlacementOutcome::RiskMismatch {
                    prisoner,
                    block,
                    cell,
                }
            } else {
                debug!(%name, %crime, %block, cell, "arrival placed");
                PlacementOutcome::Placed {
                    prisoner,
                    block,
                    cell,
                }
            }
        }
        None => {
            warn!(%name, %crime, risk_level, "no available cells, transfer required");
            PlacementOutcome::PlacementFailure
        }
    };

    Ok(Arrival {
        name,
        crime,
        risk_level,
        intended,
        outcome,
    })
}

/// Place `count` arrivals, each with a uniformly drawn crime.
pub fn place_batch(
    store: &mut PopulationStore,
    count: u32,
    rng: &mut impl RandomSource,
) -> Result<Vec<Arrival>> {
    let mut arrivals = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let crime = Crime::random(rng);
        arrivals.push(place_arrival(store, crime, rng)?);
    }
    Ok(arrivals)
}

/// Per-run intake state machine.
#[derive(Debug, Clone, Default)]
pub struct IntakePolicy {
    state: IntakeState,
}

impl IntakePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> IntakeState {
        self.state
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self.state, IntakeState::Assigned { .. })
    }

    /// The batch size, drawn from the store's remaining capacity on first
    /// call and cached afterwards.
    pub fn calculate_incoming_count(
        &mut self,
        store: &PopulationStore,
        rng: &mut impl RandomSource,
    ) -> u32 {
        match self.state {
            IntakeState::Calculated { incoming } | IntakeState::Assigned { incoming } => incoming,
            IntakeState::NotCalculated => {
                let remaining = store.remaining_capacity();
                let incoming = incoming_count_for(remaining, rng);
                info!(incoming, remaining, "incoming batch sized");
                self.state = IntakeState::Calculated { incoming };
                incoming
            }
        }
    }

    /// Place this run's batch, sizing it first if needed.
    pub fn assign_incoming(
        &mut self,
        store: &mut PopulationStore,
        rng: &mut impl RandomSource,
    ) -> Result<AssignOutcome> {
        if self.is_assigned() {
            info!("incoming prisoners already assigned");
            return Ok(AssignOutcome::AlreadyAssigned);
        }

        let incoming = self.calculate_incoming_count(store, rng);
        let arrivals = place_batch(store, incoming, rng)?;
        self.state = IntakeState::Assigned { incoming };

        let report = IntakeReport {
            incoming,
            arrivals,
            population_after: store.total_population(),
            occupancy_after: store.occupancy(),
        };
        info!(
            incoming,
            placed = report.placed_count(),
            mismatched = report.mismatch_count(),
            failed = report.failure_count(),
            population = report.population_after,
            "incoming batch assigned"
        );
        Ok(AssignOutcome::Completed(report))
    }
}
