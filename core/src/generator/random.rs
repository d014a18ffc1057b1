use rand::rngs::SmallRng;
use rand::seq::index;
use rand::SeedableRng;

use super::*;

/// Uniform placement drawn without replacement from every cell except the
/// excluded one.
///
/// The RNG stream carries over between games, so one seed reproduces a whole
/// session of consecutive layouts.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    seed: u64,
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: &GameConfig, exclude: Coord2) -> Vec<Coord2> {
        let total = usize::from(config.total_cells());
        let mines = usize::from(config.mines);
        let skipped = linear_index(exclude, config.cols);

        // sample from the `total - 1` eligible slots, then shift past the excluded cell
        let eligible = total.saturating_sub(1);
        if mines > eligible {
            log::warn!(
                "Cannot fit {} mines around a safe start, only {} cells available",
                mines,
                eligible
            );
            return Vec::new();
        }

        let picked: Vec<Coord2> = index::sample(&mut self.rng, eligible, mines)
            .into_iter()
            .map(|i| if i >= skipped { i + 1 } else { i })
            .map(|i| coords_of(i, config.cols))
            .collect();
        log::debug!("Sampled {} mine positions avoiding {:?}", picked.len(), exclude);
        picked
    }
}
