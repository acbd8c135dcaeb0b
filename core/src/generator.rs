use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::types::Coord;

/// Strategy for laying out mines on a fresh grid.
///
/// `width` bounds the row axis and `height` the column axis, matching the
/// grid's own indexing. Callers guarantee `0 <= mines < width * height`.
pub trait MinePlacer {
    fn place(&mut self, width: Coord, height: Coord, mines: i32) -> Array2<bool>;
}

/// Uniformly random placement: draws positions and rejects duplicates until
/// exactly the requested count is placed.
#[derive(Clone, Debug, Default)]
pub struct RandomPlacer {
    seed: Option<u64>,
}

impl RandomPlacer {
    pub fn from_entropy() -> Self {
        Self { seed: None }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl MinePlacer for RandomPlacer {
    fn place(&mut self, width: Coord, height: Coord, mines: i32) -> Array2<bool> {
        let mut mask = Array2::from_elem((width as usize, height as usize), false);
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };

        let mut placed = 0;
        while placed < mines {
            let row = rng.random_range(0..width) as usize;
            let col = rng.random_range(0..height) as usize;

            let spot = &mut mask[(row, col)];
            if !*spot {
                *spot = true;
                placed += 1;
            }
        }

        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_mines(mask: &Array2<bool>) -> usize {
        mask.iter().filter(|&&mined| mined).count()
    }

    #[test]
    fn places_exactly_the_requested_count() {
        let mask = RandomPlacer::seeded(7).place(9, 9, 10);

        assert_eq!(mask.dim(), (9, 9));
        assert_eq!(count_mines(&mask), 10);
    }

    #[test]
    fn same_seed_reproduces_the_layout() {
        let first = RandomPlacer::seeded(42).place(6, 4, 5);
        let second = RandomPlacer::seeded(42).place(6, 4, 5);

        assert_eq!(first, second);
    }

    #[test]
    fn terminates_on_a_nearly_full_board() {
        let mask = RandomPlacer::seeded(3).place(3, 3, 8);

        assert_eq!(count_mines(&mask), 8);
    }
}
