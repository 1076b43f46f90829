//! Initial population generation.
//!
//! Every block starts with a random number of residents between
//! [`MIN_PER_BLOCK`] and [`MAX_PER_BLOCK`], each convicted of the crime
//! matching the block's tier. Blocks are filled A, B, then C so that
//! display names run in block order.

use tracing::{debug, info};

use crate::block::{BlockId, BlockOccupancy};
use crate::constants::initial_population::{MAX_PER_BLOCK, MIN_PER_BLOCK};
use crate::constants::names;
use crate::crime::Crime;
use crate::random::RandomSource;
use crate::store::PopulationStore;

/// The crime every startup resident of `block` is held for.
pub const fn resident_crime(block: BlockId) -> Crime {
    match block {
        BlockId::A => Crime::Theft,
        BlockId::B => Crime::Assault,
        BlockId::C => Crime::Murder,
    }
}

/// Add `count` residents to `block`, each in a random cell.
pub fn generate_block(
    store: &mut PopulationStore,
    block: BlockId,
    count: u32,
    rng: &mut impl RandomSource,
) {
    let crime = resident_crime(block);
    for _ in 0..count {
        let name = store.next_name(names::INITIAL_PREFIX);
        let cell = rng.roll(1, block.max_cells());
        store.add_prisoner(name, crime.risk_level(), block.name(), cell, crime);
    }
}

/// Populate every block with its startup residents. Returns the number of
/// residents generated per block.
pub fn generate_initial_population(
    store: &mut PopulationStore,
    rng: &mut impl RandomSource,
) -> BlockOccupancy {
    let mut generated = BlockOccupancy::default();
    let counts: Vec<(BlockId, u32)> = BlockId::ALL
        .into_iter()
        .map(|block| (block, rng.roll(MIN_PER_BLOCK, MAX_PER_BLOCK.min(block.max_cells()))))
        .collect();

    for (block, count) in counts {
        generate_block(store, block, count, rng);
        for _ in 0..count {
            generated.increment(block);
        }
    }

    info!(
        a = generated.get(BlockId::A),
        b = generated.get(BlockId::B),
        c = generated.get(BlockId::C),
        "initial population generated"
    );
    debug!(
        listed = store.total_population(),
        across_blocks = store.occupancy().total(),
        "initial population totals"
    );
    generated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{RngSource, ScriptedRolls};

    #[test]
    fn residents_match_block_tier() {
        assert_eq!(resident_crime(BlockId::A).risk_level(), 1);
        assert_eq!(resident_crime(BlockId::B).risk_level(), 2);
        assert_eq!(resident_crime(BlockId::C).risk_level(), 3);
    }

    #[test]
    fn block_counts_stay_in_range() {
        for seed in 0..20 {
            let mut store = PopulationStore::new();
            let generated = generate_initial_population(&mut store, &mut RngSource::seeded(seed));
            for (block, count) in generated.iter() {
                assert!(
                    (MIN_PER_BLOCK..=MAX_PER_BLOCK).contains(&count),
                    "block {block} got {count}"
                );
                assert_eq!(store.block_count(block), count);
            }
            assert_eq!(generated.total(), store.total_population());
        }
    }

    #[test]
    fn counts_are_drawn_before_cells() {
        let mut store = PopulationStore::new();
        let mut rolls = ScriptedRolls::new([25, 26, 27]);
        let generated = generate_initial_population(&mut store, &mut rolls);
        assert_eq!(generated.get(BlockId::A), 25);
        assert_eq!(generated.get(BlockId::B), 26);
        assert_eq!(generated.get(BlockId::C), 27);
        // Script exhausted: every cell falls back to 1.
        assert!(store.prisoners().iter().all(|p| p.cell() == 1));
    }

    #[test]
    fn names_run_in_block_order() {
        let mut store = PopulationStore::new();
        let mut rolls = ScriptedRolls::new([25, 25, 25]);
        generate_initial_population(&mut store, &mut rolls);
        let prisoners = store.prisoners();
        assert_eq!(prisoners[0].name(), "Prisoner1");
        assert_eq!(prisoners[0].block_name(), "A");
        assert_eq!(prisoners[25].name(), "Prisoner26");
        assert_eq!(prisoners[25].block_name(), "B");
        assert_eq!(prisoners[74].name(), "Prisoner75");
        assert_eq!(prisoners[74].crime(), Crime::Murder);
    }

    #[test]
    fn cells_are_within_block_bounds() {
        let mut store = PopulationStore::new();
        generate_initial_population(&mut store, &mut RngSource::seeded(8));
        for prisoner in store.prisoners() {
            let block: BlockId = prisoner.block_name().parse().unwrap();
            assert!((1..=block.max_cells()).contains(&prisoner.cell()));
        }
    }
}
