//! SFC64 core engine
//!
//! Chris Doty-Humphrey's Small Fast Chaotic generator, 64-bit variant. This
//! is the only source of raw words in the crate: every derived value
//! (integers, floats, deviates, permutations, bytes) is built on top of
//! [`Sfc64::next_u64`].
//!
//! # Algorithm
//!
//! Four 64-bit words of state. `a`, `b`, `c` are chaotic; `w` is a counter
//! that guarantees a minimum period of 2^64 for every seed. Each step:
//!
//! ```text
//! out = a + b + w
//! w   = w + 1
//! a   = b ^ (b >> 11)
//! b   = c + (c << 3)
//! c   = rotl(c, 24) + out
//! ```
//!
//! # Determinism
//!
//! Same seed → same sequence of words, on every platform, forever. The
//! step function and the seeding transform are frozen: changing either one
//! invalidates every recorded regression vector.

use serde::{Deserialize, Serialize};

/// Number of steps discarded after loading a seed into the state.
const SEED_ROUNDS: usize = 12;

/// Raw state of an SFC64 generator.
///
/// # Example
/// ```
/// use sfc_rand::rng::Sfc64;
///
/// let mut a = Sfc64::new(7);
/// let mut b = Sfc64::new(7);
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sfc64 {
    a: u64,
    b: u64,
    c: u64,
    /// Step counter
    w: u64,
}

impl Sfc64 {
    /// Create an engine seeded with `seed`
    pub fn new(seed: u64) -> Self {
        let mut engine = Self {
            a: 0,
            b: 0,
            c: 0,
            w: 0,
        };
        engine.seed(seed);
        engine
    }

    /// Reset the state from a single 64-bit seed
    ///
    /// All three chaotic words start equal to `seed`, the counter starts at
    /// one, and the first twelve outputs are thrown away so that nearby
    /// seeds diverge before anything is observed.
    pub fn seed(&mut self, seed: u64) {
        self.a = seed;
        self.b = seed;
        self.c = seed;
        self.w = 1;
        for _ in 0..SEED_ROUNDS {
            self.next_u64();
        }
    }

    /// Advance the state and return the next raw word
    ///
    /// # Example
    /// ```
    /// use sfc_rand::rng::Sfc64;
    ///
    /// let mut engine = Sfc64::new(0);
    /// let first = engine.next_u64();
    /// assert_ne!(first, engine.next_u64());
    /// ```
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let out = self.a.wrapping_add(self.b).wrapping_add(self.w);
        self.w = self.w.wrapping_add(1);
        self.a = self.b ^ (self.b >> 11);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(24).wrapping_add(out);
        out
    }

    /// State words in codec order: `[a, b, c, w]`
    pub(crate) fn to_words(&self) -> [u64; 4] {
        [self.a, self.b, self.c, self.w]
    }

    /// Rebuild an engine from words produced by [`Sfc64::to_words`]
    pub(crate) fn from_words(words: [u64; 4]) -> Self {
        let [a, b, c, w] = words;
        Self { a, b, c, w }
    }
}
