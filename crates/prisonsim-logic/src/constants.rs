//! Prison constants — capacity, block sizes, intake ranges, riot history.
//!
//! Capacity is fixed for the life of the facility. Every component reads
//! these values; nothing overrides them at run time.

/// Total number of prisoners the facility can contain.
pub const MAX_CAPACITY: u32 = 120;

/// Cell counts per block. The three blocks together hold exactly
/// [`MAX_CAPACITY`] prisoners.
pub mod cells {
    pub const BLOCK_A: u32 = 40;
    pub const BLOCK_B: u32 = 40;
    pub const BLOCK_C: u32 = 40;
}

/// Size of each block's population when the prison is first generated.
pub mod initial_population {
    /// Fewest prisoners placed in a block at startup.
    pub const MIN_PER_BLOCK: u32 = 25;
    /// Most prisoners placed in a block at startup (must not exceed any block's cells).
    pub const MAX_PER_BLOCK: u32 = 40;
}

/// Historical riot figures and the staffing ratio.
pub mod riot {
    /// Days elapsed since the last recorded riot.
    pub const DAYS_SINCE_LAST_RIOT: u32 = 224;
    /// Combined prisoner risk level during the last riot.
    pub const LAST_RIOT_RISK_LEVEL: u32 = 144;
    /// One guard controls this much combined risk.
    pub const RISK_PER_GUARD: u32 = 4;
}

/// Display-name prefixes, suffixed with `population + 1`.
pub mod names {
    pub const INITIAL_PREFIX: &str = "Prisoner";
    pub const INTAKE_PREFIX: &str = "NewPrisoner";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_cells_sum_to_capacity() {
        assert_eq!(cells::BLOCK_A + cells::BLOCK_B + cells::BLOCK_C, MAX_CAPACITY);
    }

    #[test]
    fn initial_range_fits_every_block() {
        assert!(initial_population::MIN_PER_BLOCK <= initial_population::MAX_PER_BLOCK);
        for max in [cells::BLOCK_A, cells::BLOCK_B, cells::BLOCK_C] {
            assert!(initial_population::MAX_PER_BLOCK <= max);
        }
    }
}
