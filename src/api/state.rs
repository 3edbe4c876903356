use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::Catalog;

/// Shared application state.
///
/// The catalog is read-only after load, so queries share it without
/// locking; only the RNG needs a mutex.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// Creates state over a loaded catalog with an entropy-seeded RNG
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Creates state with a fixed seed, for reproducible sampling
    pub fn with_seed(catalog: Catalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Catalog, rng: StdRng) -> Self {
        Self {
            catalog: Arc::new(catalog),
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}
