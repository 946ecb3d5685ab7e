//! Identity Rotator

mod tests;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Identity used whenever the pool cannot produce one.
pub const FALLBACK_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Built-in pool: current desktop and mobile browsers.
pub const DEFAULT_USER_AGENTS: [&str; 6] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Mobile Safari/537.36",
];

/// Hands out a plausible browser `User-Agent` per request.
///
/// Pass a seed to make the sequence reproducible. Selection is best effort:
/// an empty pool or a poisoned RNG yields [`FALLBACK_USER_AGENT`].
#[derive(Debug)]
pub struct IdentityRotator {
    pool: Vec<String>,
    rng: Mutex<StdRng>,
}

impl IdentityRotator {
    pub fn new(pool: Vec<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            pool,
            rng: Mutex::new(rng),
        }
    }

    /// Built-in pool with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(default_pool(), Some(seed))
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// Next identity string. Never fails.
    pub fn next(&self) -> String {
        if self.pool.is_empty() {
            return FALLBACK_USER_AGENT.to_string();
        }
        match self.rng.lock() {
            Ok(mut rng) => {
                let idx = rng.gen_range(0..self.pool.len());
                self.pool[idx].clone()
            }
            Err(_) => FALLBACK_USER_AGENT.to_string(),
        }
    }
}

impl Default for IdentityRotator {
    fn default() -> Self {
        Self::new(default_pool(), None)
    }
}

pub fn default_pool() -> Vec<String> {
    DEFAULT_USER_AGENTS.iter().map(|ua| ua.to_string()).collect()
}
