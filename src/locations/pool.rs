use crate::locations::models::Location;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PoolError {
    #[error("no locations left to draw")]
    Empty,
}

/// Draws catalog locations at random, never the same one twice until the pool is refilled.
///
/// The catalog itself is never reordered: `available` and `used` hold indices into it and
/// together always cover every index exactly once.
#[derive(Debug)]
pub struct LocationPool {
    catalog: Vec<Location>,
    available: Vec<usize>,
    used: Vec<usize>,
    rng: StdRng,
}

impl LocationPool {
    pub fn new(catalog: Vec<Location>) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    pub fn with_seed(catalog: Vec<Location>, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Vec<Location>, rng: StdRng) -> Self {
        let available = (0..catalog.len()).collect();
        Self {
            catalog,
            available,
            used: Vec::new(),
            rng,
        }
    }

    pub fn draw_next(&mut self) -> Result<Location, PoolError> {
        if self.available.is_empty() {
            return Err(PoolError::Empty);
        }
        let pick = self.rng.gen_range(0..self.available.len());
        let index = self.available.swap_remove(pick);
        self.used.push(index);
        Ok(self.catalog[index].clone())
    }

    pub fn return_all_and_reshuffle(&mut self) {
        self.available.append(&mut self.used);
        self.available.shuffle(&mut self.rng);
    }

    pub fn catalog(&self) -> &[Location] {
        &self.catalog
    }

    pub fn available(&self) -> impl Iterator<Item = &Location> {
        self.available.iter().map(|&index| &self.catalog[index])
    }

    /// Drawn locations, in draw order.
    pub fn used(&self) -> impl Iterator<Item = &Location> {
        self.used.iter().map(|&index| &self.catalog[index])
    }

    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Checks that `available` and `used` split the catalog with no overlap and no gaps.
    pub fn is_partitioned(&self) -> bool {
        let mut indices = self
            .available
            .iter()
            .chain(self.used.iter())
            .copied()
            .collect::<Vec<_>>();
        indices.sort_unstable();
        indices.into_iter().eq(0..self.catalog.len())
    }
}
