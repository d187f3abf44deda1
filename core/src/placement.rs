use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::prelude::*;

use crate::*;

/// Strategy seam for choosing bomb positions.
pub trait BombPlacer {
    /// Selects `total_bombs` distinct flat indices in `[0, total_cells)`,
    /// never picking an index in `excluded`.
    fn place(
        self,
        total_cells: CellCount,
        total_bombs: CellCount,
        excluded: &BTreeSet<FlatIndex>,
    ) -> Result<Vec<FlatIndex>>;
}

/// Rejection-sampling placer seeded from an explicit seed.
///
/// Draws a random index per round and keeps it when it is neither already
/// chosen nor excluded. Fine at the fixed 15% density; the rejection rate
/// grows as density approaches 100%, so this is not a general-purpose
/// sampler.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RejectionPlacer {
    seed: u64,
}

impl RejectionPlacer {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BombPlacer for RejectionPlacer {
    fn place(
        self,
        total_cells: CellCount,
        total_bombs: CellCount,
        excluded: &BTreeSet<FlatIndex>,
    ) -> Result<Vec<FlatIndex>> {
        // Without free cells left over, rejection sampling would spin forever.
        if total_bombs as usize + excluded.len() > total_cells as usize {
            return Err(GameError::InvalidConfiguration);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut chosen: BTreeSet<FlatIndex> = BTreeSet::new();

        while (chosen.len() as CellCount) < total_bombs {
            let pick = rng.random_range(0..total_cells) as FlatIndex;
            if !excluded.contains(&pick) {
                chosen.insert(pick);
            }
        }

        log::debug!(
            "placed {} bombs over {} cells ({} excluded)",
            total_bombs,
            total_cells,
            excluded.len()
        );
        Ok(chosen.into_iter().collect())
    }
}
