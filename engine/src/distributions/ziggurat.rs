//! Ziggurat sampling (Marsaglia & Tsang, 2000)
//!
//! One raw word per attempt. The low 8 bits pick a layer `i`; bits 11..64
//! form the magnitude `j`. Most draws land inside the layer's rectangle and
//! are accepted with a single compare. The rest fall through to the wedge
//! test against the density, or for layer 0, to the unbounded tail.
//!
//! Bits 8..11 are unused, so `i` and `j` never share a bit.

use super::tables::{FE, FN, KE, KN, RE, RN, WE, WN};
use crate::rng::Generator;

const LAYER_MASK: u64 = 0xFF;
const MAGNITUDE_SHIFT: u32 = 11;

impl Generator {
    /// Standard normal deviate (mean 0, standard deviation 1)
    ///
    /// For another mean and deviation, use `norm_float64() * stddev + mean`.
    ///
    /// # Example
    /// ```
    /// use sfc_rand::Generator;
    ///
    /// let mut rng = Generator::new(1);
    /// let z = rng.norm_float64();
    /// assert!(z.is_finite());
    /// ```
    pub fn norm_float64(&mut self) -> f64 {
        loop {
            let v = self.uint64();
            // Arithmetic shift keeps the sign bit as the sign of the result
            let j = (v as i64) >> MAGNITUDE_SHIFT;
            let i = (v & LAYER_MASK) as usize;
            let x = j as f64 * WN[i];
            if j.unsigned_abs() < KN[i] {
                return x;
            }

            if i == 0 {
                return self.normal_tail(j > 0);
            }

            if FN[i] + self.float64() * (FN[i - 1] - FN[i]) < (-0.5 * x * x).exp() {
                return x;
            }
        }
    }

    /// Standard exponential deviate (rate 1, mean 1)
    ///
    /// For rate `lambda`, use `exp_float64() / lambda`.
    ///
    /// # Example
    /// ```
    /// use sfc_rand::Generator;
    ///
    /// let mut rng = Generator::new(1);
    /// assert!(rng.exp_float64() > 0.0);
    /// ```
    pub fn exp_float64(&mut self) -> f64 {
        loop {
            let v = self.uint64();
            let j = v >> MAGNITUDE_SHIFT;
            let i = (v & LAYER_MASK) as usize;
            let x = j as f64 * WE[i];
            if j < KE[i] {
                return x;
            }

            if i == 0 {
                return RE - self.float64().ln();
            }

            if FE[i] + self.float64() * (FE[i - 1] - FE[i]) < (-x).exp() {
                return x;
            }
        }
    }

    /// Sample beyond `RN` by rejection against a shifted exponential
    fn normal_tail(&mut self, positive: bool) -> f64 {
        let x = loop {
            let x = -self.float64().ln() * (1.0 / RN);
            let y = -self.float64().ln();
            if y + y >= x * x {
                break x;
            }
        };
        if positive {
            RN + x
        } else {
            -RN - x
        }
    }
}
