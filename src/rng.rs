//! Deterministic pseudo-random stream for reproducible art.
//!
//! A saved site stores only the generator seed, never the rendered image.
//! Reloading must reproduce the background pixel-for-pixel, so the
//! recurrence here is fixed: a Borland-style linear congruential generator
//! with multiplier 9301, increment 49297, modulus 233280, evaluated in
//! integer arithmetic.

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233280;

/// Seeded LCG yielding reals in `[0, 1)`.
///
/// # Example
///
/// ```
/// use sprout_renderer::SeededRng;
///
/// let mut a = SeededRng::new(7);
/// let mut b = SeededRng::new(7);
/// assert_eq!(a.next_f64(), b.next_f64());
/// ```
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Creates a generator from an integer seed.
    ///
    /// The seed is reduced modulo 233280 up front; this is congruent to
    /// feeding the raw value through the recurrence, so wall-clock seeds
    /// (milliseconds since epoch) stay exact.
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    /// Advances the stream and returns the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }
}
