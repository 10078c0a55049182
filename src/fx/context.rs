use crate::fx::cache::AuxCache;
use crate::fx::rng::RandomSource;

/// State that outlives a single effect call: the auxiliary buffer cache and the random source.
///
/// One context per rendering thread. Frame buffers are only ever borrowed by the effects; the
/// context owns every auxiliary buffer.
pub struct FxContext {
    cache: AuxCache,
    rng: Box<dyn RandomSource + Send>,
}

impl FxContext {
    /// Context with an unseeded (non-reproducible) random source.
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// Context whose random source is seeded, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    /// Context with a caller-supplied random source.
    pub fn with_rng(rng: impl RandomSource + Send + 'static) -> Self {
        Self {
            cache: AuxCache::new(),
            rng: Box::new(rng),
        }
    }

    /// Auxiliary buffer cache.
    pub fn cache(&self) -> &AuxCache {
        &self.cache
    }

    /// Mutable auxiliary buffer cache.
    pub fn cache_mut(&mut self) -> &mut AuxCache {
        &mut self.cache
    }

    /// Random source used by stochastic effects.
    pub fn rng_mut(&mut self) -> &mut (dyn RandomSource + Send) {
        self.rng.as_mut()
    }
}

impl Default for FxContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FxContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FxContext")
            .field("cached_frames", &self.cache.len())
            .field("cache_stats", &self.cache.stats())
            .finish_non_exhaustive()
    }
}
