//! Random permutations and in-place shuffles
//!
//! Both operations draw one bounded value per position, highest index first
//! for shuffles and lowest first for permutations. No draw happens for
//! sizes 0 and 1.

use crate::rng::Generator;

impl Generator {
    /// Random permutation of `0..n`
    ///
    /// Built inside-out: each new index `i` lands at a uniform position
    /// `j` in `0..=i`, and whatever sat at `j` moves to `i`. Draws `n - 1`
    /// bounded values for `n >= 2`.
    ///
    /// # Example
    /// ```
    /// use sfc_rand::Generator;
    ///
    /// let mut rng = Generator::new(42);
    /// let mut p = rng.perm(5);
    /// p.sort_unstable();
    /// assert_eq!(p, vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn perm(&mut self, n: usize) -> Vec<usize> {
        let mut m = vec![0usize; n];
        for i in 1..n {
            let j = self.bounded(i as u64 + 1) as usize;
            m[i] = m[j];
            m[j] = i;
        }
        m
    }

    /// Fisher–Yates over `n` caller-owned elements
    ///
    /// Calls `swap(i, j)` for `i` from `n - 1` down to 1 with `j` uniform in
    /// `0..=i`. `j` may equal `i`; the callback is still invoked.
    ///
    /// # Example
    /// ```
    /// use sfc_rand::Generator;
    ///
    /// let mut cards = vec!['A', 'K', 'Q', 'J'];
    /// let mut rng = Generator::new(7);
    /// rng.shuffle(cards.len(), |i, j| cards.swap(i, j));
    /// assert_eq!(cards.len(), 4);
    /// ```
    pub fn shuffle<F>(&mut self, n: usize, mut swap: F)
    where
        F: FnMut(usize, usize),
    {
        for i in (1..n).rev() {
            let j = self.bounded(i as u64 + 1) as usize;
            swap(i, j);
        }
    }

    /// Shuffle a slice in place
    ///
    /// Same draws as `shuffle(items.len(), |i, j| items.swap(i, j))`.
    pub fn shuffle_slice<T>(&mut self, items: &mut [T]) {
        self.shuffle(items.len(), |i, j| items.swap(i, j));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_sizes_draw_nothing() {
        let mut rng = Generator::new(1);
        let before = rng.clone();

        assert_eq!(rng.perm(0), Vec::<usize>::new());
        assert_eq!(rng.perm(1), vec![0]);
        let mut calls = 0;
        rng.shuffle(0, |_, _| calls += 1);
        rng.shuffle(1, |_, _| calls += 1);

        assert_eq!(calls, 0);
        assert_eq!(rng, before);
    }

    #[test]
    fn test_perm_of_two_follows_one_draw() {
        let mut rng = Generator::new(31);
        let mut reference = Generator::new(31);
        let j = reference.uint64n(2).unwrap();

        let p = rng.perm(2);
        if j == 0 {
            assert_eq!(p, vec![1, 0]);
        } else {
            assert_eq!(p, vec![0, 1]);
        }
        assert_eq!(rng, reference);
    }

    #[test]
    fn test_shuffle_visits_indices_high_to_low() {
        let mut rng = Generator::new(9);
        let mut seen = Vec::new();
        rng.shuffle(6, |i, j| {
            assert!(j <= i);
            seen.push(i);
        });
        assert_eq!(seen, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_shuffle_slice_matches_callback_form() {
        let mut a: Vec<u32> = (0..50).collect();
        let mut b = a.clone();

        Generator::new(3).shuffle_slice(&mut a);
        Generator::new(3).shuffle(b.len(), |i, j| b.swap(i, j));

        assert_eq!(a, b);
    }
}
