//! Uniform values in `[0, n)`
//!
//! Every width narrows to the same 64-bit routine so that the number of raw
//! words consumed depends only on `n`:
//!
//! - `n <= u32::MAX`: one word `v`, result is the high word of `n * v`.
//!   Powers of two therefore cost exactly one word and return the top
//!   `log2(n)` bits. The residual bias is below 2^-32.
//! - `n > u32::MAX`: two words. The high word of `n * v1` is corrected by the
//!   carry out of adding the low word of `n * v1` to the high word of
//!   `n * v2`.
//!
//! The word counts above are part of the reproducibility contract. Swapping
//! in a different debiasing scheme changes every value drawn afterwards.
//!
//! An invalid bound is rejected before any word is drawn.

use super::{Generator, RngError};

/// Full 128-bit product of two words as `(high, low)`
#[inline]
fn mul_wide(a: u64, b: u64) -> (u64, u64) {
    let product = (a as u128) * (b as u128);
    ((product >> 64) as u64, product as u64)
}

impl Generator {
    /// Uniform `u64` in `[0, n)`
    ///
    /// # Errors
    /// [`RngError::Domain`] if `n == 0`. No word is consumed.
    ///
    /// # Example
    /// ```
    /// use sfc_rand::Generator;
    ///
    /// let mut rng = Generator::new(12345);
    /// let roll = rng.uint64n(6).unwrap();
    /// assert!(roll < 6);
    /// assert!(rng.uint64n(0).is_err());
    /// ```
    pub fn uint64n(&mut self, n: u64) -> Result<u64, RngError> {
        if n == 0 {
            return Err(RngError::Domain { bound: 0 });
        }
        Ok(self.bounded(n))
    }

    /// Uniform `u32` in `[0, n)`
    ///
    /// # Errors
    /// [`RngError::Domain`] if `n == 0`.
    pub fn uint32n(&mut self, n: u32) -> Result<u32, RngError> {
        if n == 0 {
            return Err(RngError::Domain { bound: 0 });
        }
        Ok(self.bounded(n as u64) as u32)
    }

    /// Uniform `i64` in `[0, n)`
    ///
    /// # Errors
    /// [`RngError::Domain`] if `n <= 0`.
    pub fn int63n(&mut self, n: i64) -> Result<i64, RngError> {
        if n <= 0 {
            return Err(RngError::Domain { bound: n as i128 });
        }
        Ok(self.bounded(n as u64) as i64)
    }

    /// Uniform `i32` in `[0, n)`
    ///
    /// # Errors
    /// [`RngError::Domain`] if `n <= 0`.
    pub fn int31n(&mut self, n: i32) -> Result<i32, RngError> {
        if n <= 0 {
            return Err(RngError::Domain { bound: n as i128 });
        }
        Ok(self.bounded(n as u64) as i32)
    }

    /// Uniform platform integer in `[0, n)`
    ///
    /// The platform integer is fixed at 64 bits, so this is [`Generator::int63n`].
    ///
    /// # Errors
    /// [`RngError::Domain`] if `n <= 0`.
    pub fn intn(&mut self, n: i64) -> Result<i64, RngError> {
        self.int63n(n)
    }

    /// Core bounded draw; `n` must be non-zero
    pub(crate) fn bounded(&mut self, n: u64) -> u64 {
        debug_assert!(n > 0);
        let (res, frac) = mul_wide(n, self.engine.next_u64());
        if n <= u32::MAX as u64 {
            return res;
        }
        let (hi, _) = mul_wide(n, self.engine.next_u64());
        let (_, carry) = frac.overflowing_add(hi);
        res + carry as u64
    }
}
