use alloc::vec::Vec;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy for choosing where the mines of a new game go.
pub trait MineGenerator {
    /// Returns `config.mines` distinct in-bounds positions, none equal to `exclude`.
    fn generate(&mut self, config: &GameConfig, exclude: Coord2) -> Vec<Coord2>;
}

impl<G: MineGenerator + ?Sized> MineGenerator for &mut G {
    fn generate(&mut self, config: &GameConfig, exclude: Coord2) -> Vec<Coord2> {
        (**self).generate(config, exclude)
    }
}
