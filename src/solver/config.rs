//! Multi-start solver configuration.

/// Start-condition selection policy for restart attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPolicy {
    /// Attempt `k` builds a nearest-neighbor tour from city `k % n`.
    Cyclic,
    /// Attempt `k` builds a nearest-neighbor tour from city `k`, running
    /// at most `min(n, K)` attempts so every start city stays in range.
    Bounded(usize),
    /// Attempts skip nearest-neighbor and improve a uniformly shuffled
    /// permutation directly.
    Shuffled,
}

/// Configuration parameters for the multi-start solver.
///
/// # Examples
///
/// ```
/// use u_tsp::solver::{SolverConfig, StartPolicy};
///
/// let config = SolverConfig::default()
///     .with_restarts(50)
///     .with_start_policy(StartPolicy::Shuffled)
///     .with_seed(42);
/// assert_eq!(config.restarts, 50);
/// assert_eq!(config.start_policy, StartPolicy::Shuffled);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Number of independent restart attempts. More restarts trade
    /// running time for a better chance of escaping poor local optima.
    pub restarts: usize,
    /// How each attempt obtains its initial tour.
    pub start_policy: StartPolicy,
    /// Random seed for shuffled starts (None draws from OS entropy).
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            restarts: 100,
            start_policy: StartPolicy::Cyclic,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Sets the number of restart attempts.
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    /// Sets the start-condition selection policy.
    pub fn with_start_policy(mut self, policy: StartPolicy) -> Self {
        self.start_policy = policy;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
