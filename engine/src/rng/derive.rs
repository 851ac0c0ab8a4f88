//! Fixed-width integers and unit-interval floats
//!
//! Every function here is a pure function of the next raw word (or the next
//! buffered half-word). Bit selection is frozen:
//!
//! | value     | source                                  |
//! |-----------|-----------------------------------------|
//! | `uint32`  | high half of a word, then its low half  |
//! | `int31`   | `uint32` with the top bit cleared       |
//! | `int63`   | raw word with the top bit cleared       |
//! | `int`     | `int63` (platform integer fixed at 64)  |
//! | `float32` | low 24 bits of a `uint32`, times 2^-24  |
//! | `float64` | low 53 bits of a raw word, times 2^-53  |

use super::Generator;

const INT31_MASK: u32 = 0x7fff_ffff;
const INT63_MASK: u64 = 0x7fff_ffff_ffff_ffff;

const FLOAT32_MANTISSA: u32 = (1 << 24) - 1;
const FLOAT64_MANTISSA: u64 = (1 << 53) - 1;

/// 2^-24
const FLOAT32_SCALE: f32 = 1.0 / (1u32 << 24) as f32;
/// 2^-53
const FLOAT64_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

impl Generator {
    /// Next 32-bit value
    ///
    /// Two values are packed into each raw word. The first call draws a word
    /// and returns its high half; the second returns the low half without
    /// touching the engine.
    ///
    /// # Example
    /// ```
    /// use sfc_rand::Generator;
    ///
    /// let mut words = Generator::new(9);
    /// let word = words.uint64();
    ///
    /// let mut halves = Generator::new(9);
    /// assert_eq!(halves.uint32(), (word >> 32) as u32);
    /// assert_eq!(halves.uint32(), word as u32);
    /// ```
    pub fn uint32(&mut self) -> u32 {
        if self.half_pending {
            self.half_pending = false;
            return self.half_word as u32;
        }
        self.half_word = self.engine.next_u64();
        self.half_pending = true;
        (self.half_word >> 32) as u32
    }

    /// Non-negative 31-bit value as `i32`
    pub fn int31(&mut self) -> i32 {
        (self.uint32() & INT31_MASK) as i32
    }

    /// Non-negative 63-bit value as `i64`
    pub fn int63(&mut self) -> i64 {
        (self.uint64() & INT63_MASK) as i64
    }

    /// Non-negative platform integer
    ///
    /// The platform integer is fixed at 64 bits on every target, so this is
    /// the same stream as [`Generator::int63`].
    pub fn int(&mut self) -> i64 {
        self.int63()
    }

    /// Uniform `f64` in `[0, 1)`
    ///
    /// Exact multiple of 2^-53 built from the low 53 bits of one raw word.
    /// The largest possible result is `1 - 2^-53`.
    pub fn float64(&mut self) -> f64 {
        (self.uint64() & FLOAT64_MANTISSA) as f64 * FLOAT64_SCALE
    }

    /// Uniform `f32` in `[0, 1)`
    ///
    /// Exact multiple of 2^-24 built from the low 24 bits of one half-word,
    /// so the conversion never rounds up to 1.0.
    pub fn float32(&mut self) -> f32 {
        (self.uint32() & FLOAT32_MANTISSA) as f32 * FLOAT32_SCALE
    }
}
