//! Security blocks, their fixed capacities, and occupancy counters.
//!
//! | Block | Security | Cells | Holds risk level |
//! |-------|----------|-------|------------------|
//! | A | Low | 40 | 1 |
//! | B | Medium | 40 | 2 |
//! | C | High | 40 | 3 |
//!
//! When a block is full, arrivals fall back to lower-security blocks
//! in descending order (C tries B then A, B tries A, A has no fallback).
//!
//! ```
//! use prisonsim_logic::block::BlockId;
//!
//! assert_eq!(BlockId::for_risk_level(3).unwrap(), BlockId::C);
//! assert_eq!(BlockId::C.fallbacks(), &[BlockId::B, BlockId::A]);
//! assert!(BlockId::A.fallbacks().is_empty());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::cells;
use crate::error::{PrisonError, Result};

/// One of the three security blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlockId {
    A,
    B,
    C,
}

/// Fixed attributes of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpec {
    pub id: BlockId,
    pub name: &'static str,
    pub security: &'static str,
    pub max_cells: u32,
}

static BLOCK_SPECS: [BlockSpec; 3] = [
    BlockSpec {
        id: BlockId::A,
        name: "A",
        security: "low",
        max_cells: cells::BLOCK_A,
    },
    BlockSpec {
        id: BlockId::B,
        name: "B",
        security: "medium",
        max_cells: cells::BLOCK_B,
    },
    BlockSpec {
        id: BlockId::C,
        name: "C",
        security: "high",
        max_cells: cells::BLOCK_C,
    },
];

impl BlockId {
    /// Every block, from lowest to highest security.
    pub const ALL: [BlockId; 3] = [BlockId::A, BlockId::B, BlockId::C];

    const fn index(self) -> usize {
        match self {
            BlockId::A => 0,
            BlockId::B => 1,
            BlockId::C => 2,
        }
    }

    pub fn spec(self) -> &'static BlockSpec {
        &BLOCK_SPECS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn max_cells(self) -> u32 {
        self.spec().max_cells
    }

    /// The block a prisoner of the given risk level is meant to occupy.
    pub fn for_risk_level(risk_level: u8) -> Result<Self> {
        match risk_level {
            1 => Ok(BlockId::A),
            2 => Ok(BlockId::B),
            3 => Ok(BlockId::C),
            other => Err(PrisonError::InvalidRiskLevel(other)),
        }
    }

    /// Lower-security blocks to try, in order, when this one is full.
    pub const fn fallbacks(self) -> &'static [BlockId] {
        match self {
            BlockId::C => &[BlockId::B, BlockId::A],
            BlockId::B => &[BlockId::A],
            BlockId::A => &[],
        }
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockId {
    type Err = PrisonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|block| block.name() == s)
            .ok_or_else(|| PrisonError::UnknownBlockName(s.to_string()))
    }
}

/// Current occupancy of every block.
///
/// Counters never exceed a block's `max_cells`; an increment against a
/// full block is rejected and leaves the counter unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockOccupancy {
    counts: [u32; 3],
}

impl BlockOccupancy {
    pub fn get(&self, block: BlockId) -> u32 {
        self.counts[block.index()]
    }

    /// Free cells left in `block`.
    pub fn free_cells(&self, block: BlockId) -> u32 {
        block.max_cells().saturating_sub(self.get(block))
    }

    pub fn has_room(&self, block: BlockId) -> bool {
        self.get(block) < block.max_cells()
    }

    /// Count one more prisoner in `block`. Returns `false` (and records
    /// nothing) if the block is already full.
    pub fn increment(&mut self, block: BlockId) -> bool {
        if !self.has_room(block) {
            return false;
        }
        self.counts[block.index()] += 1;
        true
    }

    pub fn reset(&mut self) {
        self.counts = [0; 3];
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// `(block, occupancy)` pairs from A to C.
    pub fn iter(&self) -> impl Iterator<Item = (BlockId, u32)> + '_ {
        BlockId::ALL.into_iter().map(move |block| (block, self.get(block)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_levels_map_to_tiers() {
        assert_eq!(BlockId::for_risk_level(1), Ok(BlockId::A));
        assert_eq!(BlockId::for_risk_level(2), Ok(BlockId::B));
        assert_eq!(BlockId::for_risk_level(3), Ok(BlockId::C));
    }

    #[test]
    fn out_of_scale_risk_level_is_rejected() {
        assert_eq!(
            BlockId::for_risk_level(0),
            Err(PrisonError::InvalidRiskLevel(0))
        );
        assert_eq!(
            BlockId::for_risk_level(4),
            Err(PrisonError::InvalidRiskLevel(4))
        );
    }

    #[test]
    fn fallbacks_only_descend() {
        for block in BlockId::ALL {
            for fallback in block.fallbacks() {
                assert!(*fallback < block, "{block} falls back upward to {fallback}");
            }
        }
        assert_eq!(BlockId::B.fallbacks(), &[BlockId::A]);
    }

    #[test]
    fn names_round_trip_through_parse() {
        for block in BlockId::ALL {
            assert_eq!(block.name().parse::<BlockId>(), Ok(block));
        }
        assert_eq!(
            "D".parse::<BlockId>(),
            Err(PrisonError::UnknownBlockName("D".into()))
        );
        assert!("a".parse::<BlockId>().is_err());
    }

    #[test]
    fn specs_match_their_ids() {
        for block in BlockId::ALL {
            assert_eq!(block.spec().id, block);
            assert_eq!(block.max_cells(), 40);
        }
        assert_eq!(BlockId::C.spec().security, "high");
    }

    #[test]
    fn increment_stops_at_capacity() {
        let mut occupancy = BlockOccupancy::default();
        for _ in 0..BlockId::A.max_cells() {
            assert!(occupancy.increment(BlockId::A));
        }
        assert!(!occupancy.has_room(BlockId::A));
        assert!(!occupancy.increment(BlockId::A));
        assert_eq!(occupancy.get(BlockId::A), BlockId::A.max_cells());
        assert_eq!(occupancy.free_cells(BlockId::A), 0);
        assert_eq!(occupancy.free_cells(BlockId::B), 40);
    }

    #[test]
    fn reset_clears_every_block() {
        let mut occupancy = BlockOccupancy::default();
        occupancy.increment(BlockId::A);
        occupancy.increment(BlockId::C);
        assert_eq!(occupancy.total(), 2);
        occupancy.reset();
        assert_eq!(occupancy, BlockOccupancy::default());
    }

    #[test]
    fn iter_walks_a_to_c() {
        let mut occupancy = BlockOccupancy::default();
        occupancy.increment(BlockId::B);
        let pairs: Vec<_> = occupancy.iter().collect();
        assert_eq!(
            pairs,
            vec![(BlockId::A, 0), (BlockId::B, 1), (BlockId::C, 0)]
        );
    }
}
