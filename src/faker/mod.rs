//! Random molecules for tests, demos and smoke runs.
//!
//! A [`Faker`] draws molecules uniformly at random from a
//! [`MoleculeSource`] and keeps drawing until one satisfies every
//! [`Predicate`] or the trial budget runs out.

mod library;

pub use library::Library;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::convert::convert;
use crate::graph::{Assembly, Error, FeatureSelection};
use crate::model::molecule::Molecule;

/// Default number of draws before giving up.
pub const DEFAULT_MAX_TRIALS: usize = 10;

/// Somewhere to draw molecules from.
pub trait MoleculeSource {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Molecule>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named acceptance test for drawn molecules.
pub struct Predicate {
    name: String,
    test: Box<dyn Fn(&Molecule) -> bool + Send + Sync>,
}

impl Predicate {
    pub fn new<F>(name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Molecule) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            test: Box::new(test),
        }
    }

    /// Accepts molecules with at least `n` atoms.
    pub fn min_atoms(n: usize) -> Self {
        Self::new(format!("min_atoms({n})"), move |m| m.atoms().len() >= n)
    }

    /// Accepts molecules with at least one ring.
    pub fn has_ring() -> Self {
        Self::new("has_ring", Molecule::has_ring)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn check(&self, molecule: &Molecule) -> bool {
        (self.test)(molecule)
    }
}

impl std::fmt::Debug for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .finish()
    }
}

/// Settings for a [`Faker`].
#[derive(Debug, Clone, Default)]
pub struct FakerConfig {
    /// Draw budget per request; [`DEFAULT_MAX_TRIALS`] when `None` or zero.
    pub max_trials: Option<usize>,
    /// Seed for reproducible draws; seeded from the OS when `None`.
    pub seed: Option<u64>,
}

/// Random molecule generator over a [`MoleculeSource`].
pub struct Faker<S> {
    source: S,
    max_trials: usize,
    rng: StdRng,
}

impl<S: MoleculeSource> Faker<S> {
    pub fn new(source: S, config: &FakerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            source,
            max_trials: config
                .max_trials
                .filter(|&n| n > 0)
                .unwrap_or(DEFAULT_MAX_TRIALS),
            rng,
        }
    }

    #[inline]
    pub fn max_trials(&self) -> usize {
        self.max_trials
    }

    /// Draws one molecule regardless of predicates.
    pub fn draw(&mut self) -> Option<&Molecule> {
        if self.source.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..self.source.len());
        self.source.get(index)
    }

    /// Draws until a molecule passes every predicate.
    ///
    /// Returns `None`, with a logged warning, if no draw within the trial
    /// budget passes.
    pub fn molecule(&mut self, predicates: &[Predicate]) -> Option<Molecule> {
        let max_trials = self.max_trials;
        for trial in 0..max_trials {
            let Some(candidate) = self.draw() else {
                log::warn!("Molecule source is empty. Returning None ...");
                return None;
            };
            match predicates.iter().find(|p| !p.check(candidate)) {
                None => return Some(candidate.clone()),
                Some(failed) => log::debug!(
                    "trial {}: generated molecule with {} atoms failed predicate {}",
                    trial + 1,
                    candidate.atoms().len(),
                    failed.name()
                ),
            }
        }

        log::warn!(
            "Cannot find a molecule that passes all {} predicates in {} trials. Returning None ...",
            predicates.len(),
            max_trials
        );
        None
    }

    /// Draws a molecule as in [`molecule`](Self::molecule) and converts it.
    ///
    /// # Errors
    ///
    /// Propagates conversion errors; an exhausted trial budget is
    /// `Ok(None)`.
    pub fn graph(
        &mut self,
        predicates: &[Predicate],
        selection: &FeatureSelection,
    ) -> Result<Option<Assembly>, Error> {
        self.molecule(predicates)
            .map(|molecule| convert(&molecule, None, selection))
            .transpose()
    }
}
